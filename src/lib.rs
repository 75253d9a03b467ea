pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::engine::BingoEngine;
pub use crate::domain::catalog::EXCUSES;
pub use crate::domain::model::{Board, BoardSet, ExportFormat, FREE_SPACE};
pub use crate::utils::error::{BingoError, Result};
