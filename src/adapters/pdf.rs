//! PDF export.
//!
//! Builds minimal but valid PDF 1.4 files by raw PDF construction, one page
//! per board. Uses the built-in Helvetica-Bold font, so no font files are
//! embedded and text metrics are estimated from an average glyph width.

use crate::domain::model::{Board, BoardSet, ExportFormat, GRID_SIZE};
use crate::domain::ports::Exporter;
use crate::utils::error::Result;

pub const PDF_FILENAME: &str = "bingo_boards.pdf";
pub const PDF_TITLE: &str = "Yu-Gi-Oh! Excuses Bingo";

// Landscape US letter, in points.
const PAGE_WIDTH: f64 = 792.0;
const PAGE_HEIGHT: f64 = 612.0;

const COL_WIDTH: f64 = 120.0;
const ROW_HEIGHT: f64 = 70.0;
const GRID_WIDTH: f64 = COL_WIDTH * GRID_SIZE as f64;
const GRID_HEIGHT: f64 = ROW_HEIGHT * GRID_SIZE as f64;
const GRID_LEFT: f64 = (PAGE_WIDTH - GRID_WIDTH) / 2.0;
const GRID_TOP: f64 = 535.0;

const TITLE_SIZE: f64 = 16.0;
const TITLE_Y: f64 = 560.0;
const CELL_FONT_SIZE: f64 = 10.0;
const CELL_LEADING: f64 = 12.0;

// Average Helvetica-Bold glyph width as a fraction of the font size; good
// enough for centering and wrap estimates without real font metrics.
const CHAR_WIDTH_FACTOR: f64 = 0.55;
const WRAP_CHARS: usize = 20;

/// Renders a board set as a PDF with one titled table per page.
#[derive(Debug, Default)]
pub struct PdfExporter;

impl PdfExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn default_filename(&self) -> &'static str {
        PDF_FILENAME
    }

    fn render(&self, boards: &BoardSet) -> Result<Vec<u8>> {
        let mut builder = PdfBuilder::new();
        for board in boards.iter() {
            builder.add_page(board_page_content(board));
        }
        Ok(builder.build(PDF_TITLE))
    }
}

/// Content stream for one board: title, cell background, wrapped cell
/// text, then the grid lines on top.
fn board_page_content(board: &Board) -> String {
    let mut content = String::new();

    // Cell background (whitesmoke).
    content.push_str("0.96 0.96 0.96 rg\n");
    content.push_str(&format!(
        "{GRID_LEFT:.1} {:.1} {GRID_WIDTH:.1} {GRID_HEIGHT:.1} re f\n",
        GRID_TOP - GRID_HEIGHT
    ));

    // Title, centered.
    content.push_str("0 0 0 rg\n");
    let title_x = (PAGE_WIDTH - text_width(PDF_TITLE, TITLE_SIZE)) / 2.0;
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {TITLE_SIZE:.0} Tf\n"));
    content.push_str(&format!("{title_x:.1} {TITLE_Y:.1} Td\n"));
    content.push_str(&format!("({}) Tj\n", pdf_escape(PDF_TITLE)));
    content.push_str("ET\n");

    // Cell text, word-wrapped and centered in each cell.
    for (r, row) in board.rows.iter().enumerate() {
        let cell_top = GRID_TOP - r as f64 * ROW_HEIGHT;
        for (c, value) in row.iter().enumerate() {
            let cell_left = GRID_LEFT + c as f64 * COL_WIDTH;
            let lines = wrap_text(value, WRAP_CHARS);

            let block_height = lines.len() as f64 * CELL_LEADING;
            let mut baseline =
                cell_top - (ROW_HEIGHT - block_height) / 2.0 - CELL_FONT_SIZE * 0.8;

            for line in &lines {
                let line_x = cell_left
                    + ((COL_WIDTH - text_width(line, CELL_FONT_SIZE)) / 2.0).max(2.0);
                content.push_str("BT\n");
                content.push_str(&format!("/F1 {CELL_FONT_SIZE:.0} Tf\n"));
                content.push_str(&format!("{line_x:.1} {baseline:.1} Td\n"));
                content.push_str(&format!("({}) Tj\n", pdf_escape(line)));
                content.push_str("ET\n");
                baseline -= CELL_LEADING;
            }
        }
    }

    // Grid lines.
    content.push_str("0 0 0 RG\n1 w\n");
    for i in 0..=GRID_SIZE {
        let x = GRID_LEFT + i as f64 * COL_WIDTH;
        content.push_str(&format!(
            "{x:.1} {:.1} m {x:.1} {GRID_TOP:.1} l S\n",
            GRID_TOP - GRID_HEIGHT
        ));
    }
    for i in 0..=GRID_SIZE {
        let y = GRID_TOP - i as f64 * ROW_HEIGHT;
        content.push_str(&format!(
            "{GRID_LEFT:.1} {y:.1} m {:.1} {y:.1} l S\n",
            GRID_LEFT + GRID_WIDTH
        ));
    }

    content
}

fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
}

/// Greedy word wrap against a character budget per line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Escape special characters for PDF string literals.
///
/// The typographic apostrophe is transcribed to ASCII: the built-in
/// Helvetica encoding has no glyph at the raw UTF-8 byte positions.
fn pdf_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace('\u{2019}', "'")
}

/// Minimal multi-page PDF file builder. Constructs valid PDF 1.4 files.
struct PdfBuilder {
    pages: Vec<String>,
}

impl PdfBuilder {
    fn new() -> Self {
        Self { pages: Vec::new() }
    }

    fn add_page(&mut self, content: String) {
        self.pages.push(content);
    }

    /// Build the complete PDF file as bytes.
    ///
    /// A PDF needs at least one page to be valid, so an empty builder
    /// produces a single blank page.
    fn build(&self, title: &str) -> Vec<u8> {
        let blank = [String::new()];
        let pages: &[String] = if self.pages.is_empty() {
            &blank
        } else {
            &self.pages
        };
        let page_count = pages.len();

        // Object layout: 1 catalog, 2 page tree, then a page/content pair
        // per board, then the font and the info dictionary.
        let font_id = 3 + 2 * page_count;
        let info_id = 4 + 2 * page_count;

        let mut pdf = String::new();
        let mut offsets: Vec<usize> = Vec::new();

        pdf.push_str("%PDF-1.4\n");

        // Obj 1: Catalog
        offsets.push(pdf.len());
        pdf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        // Obj 2: Pages
        offsets.push(pdf.len());
        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();
        pdf.push_str(&format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {page_count} >>\nendobj\n",
            kids.join(" ")
        ));

        // Page and content stream pairs.
        for (i, stream) in pages.iter().enumerate() {
            let page_id = 3 + 2 * i;
            let content_id = 4 + 2 * i;

            offsets.push(pdf.len());
            pdf.push_str(&format!(
                "{page_id} 0 obj\n<< /Type /Page /Parent 2 0 R \
                 /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                 /Contents {content_id} 0 R \
                 /Resources << /Font << /F1 {font_id} 0 R >> >> >>\nendobj\n"
            ));

            offsets.push(pdf.len());
            pdf.push_str(&format!(
                "{content_id} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                stream.len(),
                stream
            ));
        }

        // Font (Helvetica-Bold, the only face the boards use).
        offsets.push(pdf.len());
        pdf.push_str(&format!(
            "{font_id} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>\nendobj\n"
        ));

        // Info
        offsets.push(pdf.len());
        pdf.push_str(&format!(
            "{info_id} 0 obj\n<< /Title ({}) /Producer (excuse-bingo) >>\nendobj\n",
            pdf_escape(title)
        ));

        // Cross-reference table
        let xref_offset = pdf.len();
        let num_objects = offsets.len() + 1; // +1 for the free entry
        pdf.push_str(&format!("xref\n0 {num_objects}\n"));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }

        // Trailer
        pdf.push_str(&format!(
            "trailer\n<< /Size {num_objects} /Root 1 0 R /Info {info_id} 0 R >>\n"
        ));
        pdf.push_str(&format!("startxref\n{xref_offset}\n%%EOF\n"));

        pdf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator;
    use crate::domain::catalog::EXCUSES;
    use crate::domain::model::FREE_SPACE;

    fn render_boards(count: u32) -> Vec<u8> {
        let boards = generator::generate_board_set(&EXCUSES, count).unwrap();
        PdfExporter::new().render(&boards).unwrap()
    }

    fn page_object_count(pdf: &str) -> usize {
        pdf.matches("<< /Type /Page /Parent").count()
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_boards(1);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_render_one_page_per_board() {
        let pdf = String::from_utf8(render_boards(2)).unwrap();
        assert!(pdf.contains("/Count 2"));
        assert_eq!(page_object_count(&pdf), 2);
    }

    #[test]
    fn test_render_empty_set_has_single_blank_page() {
        let pdf = String::from_utf8(render_boards(0)).unwrap();
        assert!(pdf.starts_with("%PDF"));
        assert!(pdf.contains("/Count 1"));
        assert_eq!(page_object_count(&pdf), 1);
    }

    #[test]
    fn test_render_titles_every_page() {
        let pdf = String::from_utf8(render_boards(3)).unwrap();
        // Title in the info dictionary plus once per page.
        assert_eq!(pdf.matches("Yu-Gi-Oh! Excuses Bingo").count(), 4);
    }

    #[test]
    fn test_render_includes_free_space_cell() {
        let pdf = String::from_utf8(render_boards(1)).unwrap();
        assert!(pdf.contains(FREE_SPACE));
    }

    #[test]
    fn test_render_transcribes_typographic_apostrophes() {
        let pdf = String::from_utf8(render_boards(5)).unwrap();
        // Helvetica has no glyph for the raw UTF-8 bytes of U+2019.
        assert!(!pdf.contains('\u{2019}'));
    }

    #[test]
    fn test_default_filename() {
        assert_eq!(PdfExporter::new().default_filename(), "bingo_boards.pdf");
    }

    #[test]
    fn test_wrap_text_respects_budget() {
        let lines = wrap_text("Your deck only wins when you go first", 20);
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), "Your deck only wins when you go first");
    }

    #[test]
    fn test_wrap_text_keeps_overlong_word_whole() {
        let lines = wrap_text("supercalifragilisticexpialidocious", 10);
        assert_eq!(lines, vec!["supercalifragilisticexpialidocious".to_string()]);
    }

    #[test]
    fn test_pdf_escape() {
        assert_eq!(pdf_escape("hello"), "hello");
        assert_eq!(pdf_escape("(test)"), "\\(test\\)");
        assert_eq!(pdf_escape("a\\b"), "a\\\\b");
        assert_eq!(pdf_escape("I didn’t"), "I didn't");
    }
}
