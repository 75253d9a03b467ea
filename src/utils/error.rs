use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Catalog too small: {available} phrases available, {required} required")]
    CatalogTooSmall { available: usize, required: usize },

    #[error("Spreadsheet generation failed: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl BingoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BingoError::CatalogTooSmall {
                available,
                required,
            } => format!(
                "The excuse catalog only has {} entries, but a board needs {}",
                available, required
            ),
            BingoError::XlsxError(e) => format!("Could not build the spreadsheet: {}", e),
            BingoError::IoError(e) => format!("Could not write the output file: {}", e),
            BingoError::ConfigError { message } => format!("Invalid configuration: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BingoError::CatalogTooSmall { required, .. } => {
                format!("Add phrases to the catalog until it has at least {}", required)
            }
            BingoError::XlsxError(_) => {
                "Re-run with --verbose to see the underlying spreadsheet error".to_string()
            }
            BingoError::IoError(_) => {
                "Check that the current directory is writable and has free space".to_string()
            }
            BingoError::ConfigError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BingoError>;
