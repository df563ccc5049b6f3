pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod gui;
pub mod presenter;
pub mod rates;
pub mod tracker;

pub use error::{Error, Result};
