// Adapters layer: concrete exporter implementations for the document
// formats the CLI can produce.

pub mod pdf;
pub mod xlsx;

use crate::domain::model::ExportFormat;
use crate::domain::ports::Exporter;

pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Xlsx => Box::new(xlsx::XlsxExporter::new()),
        ExportFormat::Pdf => Box::new(pdf::PdfExporter::new()),
    }
}
