use crate::domain::model::{BoardSet, ExportFormat};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn num_boards(&self) -> u32;
    fn export_formats(&self) -> Vec<ExportFormat>;
}

/// Renders a board set to the bytes of a finished document.
///
/// Exporters never touch the filesystem; the engine writes the returned
/// bytes through [`Storage`].
pub trait Exporter: Send + Sync {
    fn format(&self) -> ExportFormat;
    fn default_filename(&self) -> &'static str;
    fn render(&self, boards: &BoardSet) -> Result<Vec<u8>>;
}
