use crate::error::{Error, Result};
use crate::renderer::{CatalogRenderer, JsonRenderer, SwiftRenderer};
use std::path::PathBuf;

/// Default suffix of companion mask asset folders.
pub const DEFAULT_MASK_SUFFIX: &str = "+mask.imageset";
/// Default suffix of sticker asset folders.
pub const DEFAULT_ASSET_SUFFIX: &str = ".imageset";
const DEFAULT_INDENT_WIDTH: usize = 4;

/// Output format for the generated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Swift source declaring `StickerPackCategory.all`
    #[default]
    Swift,
    /// Pretty-printed JSON document
    Json,
}

impl OutputFormat {
    /// Creates the renderer for this format.
    #[must_use]
    pub fn renderer(self, indent_width: usize) -> Box<dyn CatalogRenderer> {
        match self {
            Self::Swift => Box::new(SwiftRenderer::new(indent_width)),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

/// Configuration for the catalog generator.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Directory whose immediate entries are scanned
    pub root_dir: PathBuf,

    /// Output format
    pub format: OutputFormat,

    /// Entries ending with this suffix are companion masks and are skipped
    pub mask_suffix: String,

    /// Suffix stripped from every entry name to get the logical filename
    pub asset_suffix: String,

    /// Spaces per nesting level in generated source
    pub indent_width: usize,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sticker_catalog::Config;
    ///
    /// let config = Config::builder()
    ///     .root_dir("./Assets.xcassets/Stickers")
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Root directory doesn't exist or is not a directory
    /// - A suffix is empty
    /// - The mask suffix doesn't end with the asset suffix
    /// - Indent width is zero
    pub fn validate(&self) -> Result<()> {
        let metadata = std::fs::metadata(&self.root_dir)
            .map_err(|e| Error::directory_read(&self.root_dir, e.to_string()))?;

        if !metadata.is_dir() {
            return Err(Error::directory_read(&self.root_dir, "not a directory"));
        }

        if self.asset_suffix.is_empty() {
            return Err(Error::config("asset_suffix must not be empty"));
        }

        if self.mask_suffix.is_empty() {
            return Err(Error::config("mask_suffix must not be empty"));
        }

        if !self.mask_suffix.ends_with(&self.asset_suffix) {
            return Err(Error::config(format!(
                "mask_suffix ({}) must end with asset_suffix ({})",
                self.mask_suffix, self.asset_suffix
            )));
        }

        if self.indent_width == 0 {
            return Err(Error::config("indent_width must be greater than 0"));
        }

        Ok(())
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    root_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    mask_suffix: Option<String>,
    asset_suffix: Option<String>,
    indent_width: Option<usize>,
}

impl ConfigBuilder {
    /// Sets the directory to scan.
    #[must_use]
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(path.into());
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the suffix identifying companion mask entries.
    #[must_use]
    pub fn mask_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.mask_suffix = Some(suffix.into());
        self
    }

    /// Sets the suffix stripped from sticker entry names.
    #[must_use]
    pub fn asset_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.asset_suffix = Some(suffix.into());
        self
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] if no root directory was set,
    /// otherwise any error from [`Config::validate`].
    pub fn build(self) -> Result<Config> {
        let config = Config {
            root_dir: self.root_dir.ok_or(Error::MissingArgument)?,
            format: self.format.unwrap_or_default(),
            mask_suffix: self
                .mask_suffix
                .unwrap_or_else(|| DEFAULT_MASK_SUFFIX.to_string()),
            asset_suffix: self
                .asset_suffix
                .unwrap_or_else(|| DEFAULT_ASSET_SUFFIX.to_string()),
            indent_width: self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH),
        };

        config.validate()?;
        Ok(config)
    }
}
