pub mod config;
pub mod error;

pub use config::Configuration;
pub use error::{CraftError, CraftResult};
