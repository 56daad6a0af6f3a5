pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{ClientResult, OcrError};
pub use models::*;
pub use services::*;
