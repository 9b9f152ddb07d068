pub mod interface;
pub mod packet;
pub mod transmit;

pub use interface::{InterfaceResolver, SystemInterfaces};
pub use transmit::{ChannelSender, LinkDestination, LinkSender};
