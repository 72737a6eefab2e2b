//! PDF report export
//!
//! Assembles the full expense report as a PDF: title, grand total, category
//! breakdown, embedded chart images, and the complete transaction listing
//! with page breaks. Generation is read-only over its inputs.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Expense;
use crate::reports::{category_totals, grand_total};

// US letter; printpdf measures in f32 millimeters
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 18.0;

const IMAGE_DPI: f32 = 300.0;
const MAX_IMAGE_HEIGHT: f32 = 95.0;

/// Export the full report as a PDF
///
/// `chart_paths` are PNG files rendered beforehand; missing paths are
/// skipped so a report without charts still succeeds.
pub fn export_pdf(
    expenses: &[Expense],
    currency_symbol: &str,
    chart_paths: &[PathBuf],
    output: &Path,
) -> SpendlogResult<()> {
    let (doc, page, layer) =
        PdfDocument::new("Expense Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;
    let mono = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(pdf_err)?;

    let mut cursor = Cursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - MARGIN,
    };

    // Header
    cursor.text("Expense Report", 16.0, &bold);
    cursor.text(
        &format!("Generated on: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        9.0,
        &regular,
    );
    cursor.gap(2.0);

    // Totals
    cursor.text(
        &format!(
            "Total expenses: {}",
            grand_total(expenses).format_with_symbol(currency_symbol)
        ),
        11.0,
        &regular,
    );
    cursor.gap(2.0);

    // Category breakdown, largest spend first
    cursor.text("Category breakdown:", 11.0, &bold);
    for category in category_totals(expenses) {
        cursor.text(
            &format!(
                "  - {}: {}",
                category.category,
                category.total.format_with_symbol(currency_symbol)
            ),
            10.0,
            &regular,
        );
    }
    cursor.gap(4.0);

    // Charts
    for chart_path in chart_paths {
        if chart_path.exists() {
            cursor.image(chart_path)?;
        }
    }

    // Transaction listing
    cursor.ensure_room(20.0);
    cursor.text("Details:", 11.0, &bold);
    let listing_header = format!("{:<12} {:<20} {:>12}  Description", "Date", "Category", "Amount");
    cursor.text(&listing_header, 8.0, &mono);

    for expense in expenses {
        let was_first_on_page = cursor.ensure_room(6.0);
        if was_first_on_page {
            cursor.text(&listing_header, 8.0, &mono);
        }

        let row = format!(
            "{:<12} {:<20} {:>12}  {}",
            expense.date.format("%Y-%m-%d"),
            truncate(&expense.category, 20),
            expense.amount.format_with_symbol(currency_symbol),
            truncate(&expense.description, 60),
        );
        cursor.text(&row, 8.0, &mono);
    }

    let file = File::create(output)
        .map_err(|e| SpendlogError::Export(format!("Failed to create {}: {}", output.display(), e)))?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;

    Ok(())
}

/// Tracks the current layer and vertical position, adding pages as needed
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor<'_> {
    /// Start a fresh page when fewer than `needed` millimeters remain.
    /// Returns true when a page break happened.
    fn ensure_room(&mut self, needed: f32) -> bool {
        if self.y - needed < MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
            true
        } else {
            false
        }
    }

    fn text(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let line_height = size * 0.5;
        self.ensure_room(line_height);
        self.y -= line_height;
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
    }

    fn gap(&mut self, millimeters: f32) {
        self.y -= millimeters;
    }

    fn image(&mut self, path: &Path) -> SpendlogResult<()> {
        let file = File::open(path)
            .map_err(|e| SpendlogError::Export(format!("Failed to open {}: {}", path.display(), e)))?;
        let decoder = printpdf::image_crate::codecs::png::PngDecoder::new(file)
            .map_err(|e| SpendlogError::Export(format!("Failed to decode {}: {}", path.display(), e)))?;
        let image = Image::try_from(decoder)
            .map_err(|e| SpendlogError::Export(format!("Failed to embed {}: {}", path.display(), e)))?;

        // Natural size in mm at the embedding DPI
        let natural_width = image.image.width.0 as f32 * 25.4 / IMAGE_DPI;
        let natural_height = image.image.height.0 as f32 * 25.4 / IMAGE_DPI;

        let max_width = PAGE_WIDTH - 2.0 * MARGIN;
        let scale = (max_width / natural_width)
            .min(MAX_IMAGE_HEIGHT / natural_height)
            .min(1.0);
        let height = natural_height * scale;

        self.ensure_room(height + 5.0);
        self.y -= height;

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN)),
                translate_y: Some(Mm(self.y)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
        self.y -= 5.0;

        Ok(())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}

fn pdf_err(err: impl std::fmt::Display) -> SpendlogError {
    SpendlogError::Export(err.to_string())
}
