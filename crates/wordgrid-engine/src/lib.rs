pub use self::{config::*, core::*, engine::*, error::*};

pub mod core;
pub mod engine;

mod config;
mod error;
