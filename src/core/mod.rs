pub mod engine;
pub mod generator;

pub use crate::domain::catalog::EXCUSES;
pub use crate::domain::model::{Board, BoardSet, ExportFormat, FREE_SPACE};
pub use crate::domain::ports::{ConfigProvider, Exporter, Storage};
pub use crate::utils::error::Result;
