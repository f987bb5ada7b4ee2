//! Catalog renderers.
//!
//! Every renderer walks the catalog in sorted order: categories and packs by
//! name, stickers by filename.

use crate::{
    catalog::{Catalog, Category, Pack},
    error::Result,
    sticker::StickerRecord,
    writer::LineWriter,
};
use serde::Serialize;
use std::io::Write;

/// Renders a [`Catalog`] into an output sink.
pub trait CatalogRenderer {
    /// Writes the whole catalog to `out` and returns the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` or serialization fails.
    fn render(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<usize>;
}

/// Renders Swift source extending `StickerPackCategory` with an `all` list.
#[derive(Debug, Clone, Copy)]
pub struct SwiftRenderer {
    indent_width: usize,
}

impl SwiftRenderer {
    const HEADER: &'static str = "import CoreGraphics";

    /// Creates a renderer indenting by `indent_width` spaces per level.
    #[must_use]
    pub const fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    fn render_category(
        w: &mut LineWriter<'_>,
        depth: usize,
        category: Category<'_>,
    ) -> Result<()> {
        w.line(depth, "StickerPackCategory(")?;
        w.line(depth + 1, format_args!("name: {},", quoted(category.name())))?;
        w.line(depth + 1, "packs: [")?;
        for pack in category.packs() {
            Self::render_pack(w, depth + 2, pack)?;
        }
        w.line(depth + 1, "]")?;
        w.line(depth, "),")
    }

    fn render_pack(w: &mut LineWriter<'_>, depth: usize, pack: Pack<'_>) -> Result<()> {
        w.line(depth, "StickerPack(")?;
        w.line(depth + 1, format_args!("name: {},", quoted(pack.name())))?;
        w.line(depth + 1, "stickers: [")?;
        for sticker in pack.stickers() {
            Self::render_sticker(w, depth + 2, sticker)?;
        }
        w.line(depth + 1, "]")?;
        w.line(depth, "),")
    }

    fn render_sticker(
        w: &mut LineWriter<'_>,
        depth: usize,
        sticker: &StickerRecord,
    ) -> Result<()> {
        let (center_x, center_y) = sticker.mask_center();
        let (offset_x, offset_y) = sticker.mask_inner_offset();

        w.line(depth, "Sticker(")?;
        w.line(
            depth + 1,
            format_args!("imageName: {},", quoted(&sticker.filename)),
        )?;
        w.line(depth + 1, format_args!("number: {},", sticker.pack_number))?;
        w.line(
            depth + 1,
            format_args!("maskCenter: CGPoint(x: {center_x}, y: {center_y}),"),
        )?;
        w.line(
            depth + 1,
            format_args!("maskInnerOffset: CGPoint(x: {offset_x}, y: {offset_y}),"),
        )?;
        w.line(depth + 1, format_args!("angle: {}", sticker.angle))?;
        w.line(depth, "),")
    }
}

impl CatalogRenderer for SwiftRenderer {
    fn render(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<usize> {
        let mut w = LineWriter::new(out, self.indent_width);

        w.line(0, Self::HEADER)?;
        w.blank()?;
        w.line(0, "extension StickerPackCategory {")?;
        w.line(1, "static var all: [StickerPackCategory] {")?;
        w.line(2, "return [")?;
        for category in catalog.categories() {
            Self::render_category(&mut w, 3, category)?;
        }
        w.line(2, "]")?;
        w.line(1, "}")?;
        w.line(0, "}")?;

        w.finish()
    }
}

/// Quotes and escapes a string as a Swift string literal.
fn quoted(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            c if c.is_control() => {
                literal.push_str(&format!("\\u{{{:x}}}", u32::from(c)));
            }
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Renders the catalog as a pretty-printed JSON array of categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct CategoryView<'a> {
    name: &'a str,
    packs: Vec<PackView<'a>>,
}

#[derive(Serialize)]
struct PackView<'a> {
    name: &'a str,
    stickers: Vec<StickerView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StickerView<'a> {
    image_name: &'a str,
    mask_image_name: String,
    number: i64,
    mask_center: Point<i64>,
    mask_inner_offset: Point<i128>,
    angle: i64,
}

#[derive(Serialize)]
struct Point<T> {
    x: T,
    y: T,
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<'a> From<&'a StickerRecord> for StickerView<'a> {
    fn from(sticker: &'a StickerRecord) -> Self {
        Self {
            image_name: &sticker.filename,
            mask_image_name: sticker.mask_image_name(),
            number: sticker.pack_number,
            mask_center: sticker.mask_center().into(),
            mask_inner_offset: sticker.mask_inner_offset().into(),
            angle: sticker.angle,
        }
    }
}

impl CatalogRenderer for JsonRenderer {
    fn render(&self, catalog: &Catalog, out: &mut dyn Write) -> Result<usize> {
        let document: Vec<CategoryView<'_>> = catalog
            .categories()
            .map(|category| CategoryView {
                name: category.name(),
                packs: category
                    .packs()
                    .map(|pack| PackView {
                        name: pack.name(),
                        stickers: pack
                            .stickers()
                            .into_iter()
                            .map(StickerView::from)
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        let json = serde_json::to_string_pretty(&document)?;
        let mut w = LineWriter::new(out, 0);
        for line in json.lines() {
            w.line(0, line)?;
        }
        w.finish()
    }
}
