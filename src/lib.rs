pub mod core;
pub mod network;
pub mod setup_logger;

pub use crate::core::error::{CraftError, CraftResult};
pub use crate::network::packet::ethernet::{BROADCAST_MAC, ETHERNET_HEADER_SIZE, EthernetFrame, EthernetHeader};
pub use crate::network::packet::layer::{InnerLayer, LayerKind};
