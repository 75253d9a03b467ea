use crate::domain::model::{BoardSet, ExportFormat, GRID_SIZE};
use crate::domain::ports::Exporter;
use crate::utils::error::Result;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};

pub const XLSX_FILENAME: &str = "bingo_boards.xlsx";

const COLUMN_WIDTH: f64 = 25.0;
const ROW_HEIGHT: f64 = 60.0;
const FONT_SIZE: f64 = 12.0;

/// Renders a board set as one workbook with a sheet per board.
#[derive(Debug, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for XlsxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn default_filename(&self) -> &'static str {
        XLSX_FILENAME
    }

    fn render(&self, boards: &BoardSet) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        let cell_format = Format::new()
            .set_bold()
            .set_font_size(FONT_SIZE)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        for (i, board) in boards.iter().enumerate() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(format!("Board {}", i + 1))?;

            for (r, row) in board.rows.iter().enumerate() {
                for (c, value) in row.iter().enumerate() {
                    worksheet.write_string_with_format(
                        r as u32,
                        c as u16,
                        value.as_str(),
                        &cell_format,
                    )?;
                }
                worksheet.set_row_height(r as u32, ROW_HEIGHT)?;
            }
            for c in 0..GRID_SIZE {
                worksheet.set_column_width(c as u16, COLUMN_WIDTH)?;
            }
        }

        // save_to_buffer adds a blank default sheet when the workbook is
        // empty, so a zero-board run still yields a valid file.
        let bytes = workbook.save_to_buffer()?;
        Ok(bytes)
    }
}
