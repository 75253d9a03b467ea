pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::ExportFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "excuse-bingo")]
#[command(about = "Generate Yu-Gi-Oh! excuse bingo boards")]
pub struct CliConfig {
    #[arg(long, default_value = "5", help = "Number of boards to generate")]
    pub num: u32,

    #[arg(long, help = "Export as PDF (default when no format flag is given)")]
    pub pdf: bool,

    #[arg(long, help = "Export as Excel")]
    pub excel: bool,

    #[arg(long, help = "Export both Excel and PDF")]
    pub both: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn num_boards(&self) -> u32 {
        self.num
    }

    /// Flag precedence: --both wins, then --excel, then the PDF default.
    fn export_formats(&self) -> Vec<ExportFormat> {
        if self.both {
            vec![ExportFormat::Xlsx, ExportFormat::Pdf]
        } else if self.excel {
            vec![ExportFormat::Xlsx]
        } else {
            vec![ExportFormat::Pdf]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("excuse-bingo").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.num, 5);
        assert_eq!(config.export_formats(), vec![ExportFormat::Pdf]);
        assert!(!config.verbose);
    }

    #[test]
    fn test_num_flag() {
        let config = parse(&["--num", "3"]);
        assert_eq!(config.num_boards(), 3);
    }

    #[test]
    fn test_num_rejects_negative() {
        assert!(
            CliConfig::try_parse_from(["excuse-bingo", "--num", "-1"]).is_err()
        );
    }

    #[test]
    fn test_excel_flag_selects_xlsx_only() {
        let config = parse(&["--excel"]);
        assert_eq!(config.export_formats(), vec![ExportFormat::Xlsx]);
    }

    #[test]
    fn test_both_flag_selects_both_formats() {
        let config = parse(&["--both"]);
        assert_eq!(
            config.export_formats(),
            vec![ExportFormat::Xlsx, ExportFormat::Pdf]
        );
    }

    #[test]
    fn test_both_overrides_other_flags() {
        let config = parse(&["--both", "--excel", "--pdf"]);
        assert_eq!(
            config.export_formats(),
            vec![ExportFormat::Xlsx, ExportFormat::Pdf]
        );
    }

    #[test]
    fn test_excel_wins_over_pdf_without_both() {
        let config = parse(&["--excel", "--pdf"]);
        assert_eq!(config.export_formats(), vec![ExportFormat::Xlsx]);
    }
}
