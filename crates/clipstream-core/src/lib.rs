pub mod config;
pub mod logging;

pub mod embed;
pub mod feed;
pub mod frame;
pub mod resolver;
pub mod store;
