pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod progress;
pub mod store;
pub mod transform;
