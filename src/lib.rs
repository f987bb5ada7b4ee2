//! # sticker-catalog
//!
//! Generates a sticker pack catalog declaration from a directory of image-asset
//! folders whose names encode the sticker metadata.
//!
//! ## Entry names
//!
//! ```text
//! Animals_Farm+Pigs+1+10+20+13+25+0.imageset
//! ^category    ^pack ^number
//!                      ^maskCenter ^maskInner ^angle
//! ```
//!
//! Underscores become spaces in category and pack names. Entries ending in
//! `+mask.imageset` are companion masks and are ignored. Entries that don't
//! decode are skipped and logged.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sticker_catalog::{Config, OutputFormat};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .root_dir("./Assets.xcassets/Stickers")
//!     .format(OutputFormat::Swift)
//!     .build()?;
//!
//! let source = sticker_catalog::generate(config)?;
//! print!("{source}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library follows a pipeline architecture:
//! 1. **Scanner**: Lists the immediate entries of the directory
//! 2. **Parser**: Decodes entry names into sticker records
//! 3. **Catalog**: Groups records by category and pack
//! 4. **Renderer**: Writes the sorted catalog line by line

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod catalog;
mod config;
mod error;
mod parser;
mod pipeline;
mod renderer;
mod scanner;
mod sticker;
mod writer;

pub use catalog::{Catalog, Category, Pack};
pub use config::{Config, ConfigBuilder, DEFAULT_ASSET_SUFFIX, DEFAULT_MASK_SUFFIX, OutputFormat};
pub use error::{Error, Result};
pub use parser::EntryParser;
pub use pipeline::{Pipeline, PipelineStats};
pub use renderer::{CatalogRenderer, JsonRenderer, SwiftRenderer};
pub use sticker::StickerRecord;

/// Runs the pipeline and writes the generated catalog to standard output.
///
/// # Errors
///
/// Returns an error if:
/// - The directory can't be listed
/// - Writing to standard output fails
pub fn run(config: Config) -> Result<PipelineStats> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Pipeline::new(config).run(&mut out)
}

/// Runs the pipeline and returns the generated catalog as a string.
///
/// # Errors
///
/// Returns an error if the directory can't be listed or rendering fails.
pub fn generate(config: Config) -> Result<String> {
    let mut buf = Vec::new();
    Pipeline::new(config).run(&mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Output {
        message: e.to_string(),
    })
}
