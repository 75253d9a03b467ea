use crate::core::generator;
use crate::domain::catalog::EXCUSES;
use crate::domain::ports::{ConfigProvider, Exporter, Storage};
use crate::utils::error::Result;

/// Orchestrates one run: generate the board set once, then render and
/// write it through every selected exporter.
pub struct BingoEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    exporters: Vec<Box<dyn Exporter>>,
}

impl<S: Storage, C: ConfigProvider> BingoEngine<S, C> {
    pub fn new(storage: S, config: C, exporters: Vec<Box<dyn Exporter>>) -> Self {
        Self {
            storage,
            config,
            exporters,
        }
    }

    /// Returns the file names written, in export order.
    pub fn run(&self) -> Result<Vec<String>> {
        let count = self.config.num_boards();

        tracing::info!("Generating {} bingo boards", count);
        let boards = generator::generate_board_set(&EXCUSES, count)?;
        tracing::debug!("Generated {} boards", boards.len());

        let mut outputs = Vec::with_capacity(self.exporters.len());
        for exporter in &self.exporters {
            let filename = exporter.default_filename();
            tracing::debug!("Rendering {:?} export", exporter.format());

            let bytes = exporter.render(&boards)?;
            self.storage.write_file(filename, &bytes)?;

            tracing::info!("Wrote {} bytes to {}", bytes.len(), filename);
            println!("{} bingo boards saved to {}", boards.len(), filename);
            outputs.push(filename.to_string());
        }

        Ok(outputs)
    }
}
