pub mod ethernet;
pub mod ethertype;
pub mod layer;

pub use ethernet::{BROADCAST_MAC, ETHERNET_HEADER_SIZE, EthernetFrame, EthernetHeader};
pub use layer::{InnerLayer, LayerKind};
