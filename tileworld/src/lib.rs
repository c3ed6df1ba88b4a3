pub use domains::*;

pub mod api;
pub mod collections;
pub mod config;
mod domains;
