pub mod config;
pub mod error;
pub mod fallback;
pub mod pipeline;

pub use config::AppConfig;
pub use error::TarixError;
pub use pipeline::{Conversion, Fallback, Pipeline};
