

pub mod config;
pub mod error;

pub use config::MedQaConfig;
pub use error::{MedQaError, Result};
