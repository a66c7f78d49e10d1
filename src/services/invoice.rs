//! Invoice rendering service
//!
//! Projects a purchase's line entries into a fixed-layout single-page PDF:
//! a title, one line per entry at a fixed horizontal offset stepping down the
//! page, and a trailing total one extra step below the last entry. Layout is
//! computed separately from PDF assembly so the text placement is testable
//! without decoding a document.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

const LEFT_MARGIN: i64 = 100;
const TITLE_Y: i64 = 800;
const FIRST_LINE_Y: i64 = 750;
const LINE_STEP: i64 = 20;
const FONT_SIZE: i64 = 12;

/// Invoice service for rendering purchase documents
#[derive(Clone)]
pub struct InvoiceService {
    db: PgPool,
}

/// One billable entry: item name, quantity and unit price
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceEntry {
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// A piece of text placed at an absolute page position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedText {
    pub x: i64,
    pub y: i64,
    pub text: String,
}

/// Compute the invoice layout for a set of entries, in order
///
/// Prices and the total render via `Decimal`'s natural string form, so an
/// entry priced "10.0" prints as "10.0", never "10" or "10.00".
pub fn layout_invoice(entries: &[InvoiceEntry]) -> Vec<PlacedText> {
    let mut placed = vec![PlacedText {
        x: LEFT_MARGIN,
        y: TITLE_Y,
        text: "Invoice".to_string(),
    }];

    let mut y = FIRST_LINE_Y;
    for entry in entries {
        placed.push(PlacedText {
            x: LEFT_MARGIN,
            y,
            text: format!("{} x {} @ {}", entry.name, entry.quantity, entry.price),
        });
        y -= LINE_STEP;
    }

    let total: Decimal = entries
        .iter()
        .map(|e| e.price * Decimal::from(e.quantity))
        .sum();

    placed.push(PlacedText {
        x: LEFT_MARGIN,
        y: y - LINE_STEP,
        text: format!("Total: {}", total),
    });

    placed
}

/// Assemble a single-page A4 PDF from placed text
pub fn build_pdf(placed: &[PlacedText]) -> Result<Vec<u8>, lopdf::Error> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = Vec::new();
    for text in placed {
        operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("Td", vec![text.x.into(), text.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(text.text.as_str())]),
            Operation::new("ET", vec![]),
        ]);
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

impl InvoiceService {
    /// Create a new InvoiceService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Render the invoice PDF for a purchase
    pub async fn render(&self, purchase_id: i64) -> AppResult<Vec<u8>> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM purchases WHERE id = $1)",
        )
        .bind(purchase_id)
        .fetch_one(&self.db)
        .await?;

        if !exists {
            return Err(AppError::NotFound("Purchase".to_string()));
        }

        let entries = sqlx::query_as::<_, InvoiceEntry>(
            r#"
            SELECT i.name, pl.quantity, i.price
            FROM purchase_lines pl
            JOIN items i ON i.id = pl.item_id
            WHERE pl.purchase_id = $1
            ORDER BY pl.id
            "#,
        )
        .bind(purchase_id)
        .fetch_all(&self.db)
        .await?;

        let pdf = build_pdf(&layout_invoice(&entries))?;

        tracing::debug!(purchase_id, bytes = pdf.len(), "Invoice rendered");

        Ok(pdf)
    }
}
