pub use domain::*;
pub use projection::*;

mod commands;
mod domain;
mod projection;
mod queries;
