use crate::{
    catalog::Catalog,
    config::Config,
    error::{Error, Result},
    parser::EntryParser,
    renderer::CatalogRenderer,
    scanner::Scanner,
};
use std::{
    io::Write,
    time::{Duration, Instant},
};
use tracing::{debug, info, instrument, warn};

/// Statistics collected during pipeline execution.
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Entries found in the directory
    pub entries_listed: usize,

    /// Companion mask entries skipped
    pub mask_entries: usize,

    /// Entries skipped for a wrong token count
    pub malformed_entries: usize,

    /// Entries skipped for a non-integer numeric token
    pub unparsable_entries: usize,

    /// Entries skipped for a non UTF-8 name
    pub non_utf8_entries: usize,

    /// Stickers in the generated catalog
    pub stickers: usize,

    /// Distinct categories
    pub categories: usize,

    /// Distinct (category, pack) pairs
    pub packs: usize,

    /// Lines of output written
    pub lines_written: usize,

    /// Total execution time
    pub duration: Duration,
}

impl PipelineStats {
    /// Number of entries that were skipped for any reason other than being a mask.
    #[must_use]
    pub const fn skipped_entries(&self) -> usize {
        self.malformed_entries + self.unparsable_entries + self.non_utf8_entries
    }

    /// Logs and counts an entry that was skipped by the parser.
    fn record_skip(&mut self, error: &Error) {
        if let Error::UnparsableNumericField { .. } = error {
            warn!("{}", error);
            self.unparsable_entries += 1;
        } else {
            debug!("Skipping {}", error);
            self.malformed_entries += 1;
        }
    }

    /// Logs a summary of the run.
    pub fn log_summary(&self) {
        info!(
            "Generated {} stickers in {} packs across {} categories ({} lines) in {:.2}s",
            self.stickers,
            self.packs,
            self.categories,
            self.lines_written,
            self.duration.as_secs_f64()
        );

        if self.skipped_entries() > 0 {
            warn!(
                "Skipped {} entries ({} malformed, {} unparsable, {} non UTF-8)",
                self.skipped_entries(),
                self.malformed_entries,
                self.unparsable_entries,
                self.non_utf8_entries
            );
        }
    }
}

/// Main pipeline: list, parse, group, render.
pub struct Pipeline {
    config: Config,
    scanner: Scanner,
    parser: EntryParser,
    renderer: Box<dyn CatalogRenderer>,
}

impl Pipeline {
    /// Creates a new pipeline from a configuration built by [`Config::builder`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        let scanner = Scanner::new(&config);
        let parser = EntryParser::new(&config);
        let renderer = config.format.renderer(config.indent_width);

        Self {
            config,
            scanner,
            parser,
            renderer,
        }
    }

    /// Lists and parses the directory into a grouped catalog.
    ///
    /// Malformed and unparsable entries are logged and counted, never fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory can't be listed.
    pub fn build_catalog(&self) -> Result<(Catalog, PipelineStats)> {
        let listing = self.scanner.list()?;
        let mut stats = PipelineStats {
            entries_listed: listing.names.len() + listing.non_utf8,
            non_utf8_entries: listing.non_utf8,
            ..PipelineStats::default()
        };

        let mut records = Vec::with_capacity(listing.names.len());
        for name in &listing.names {
            match self.parser.parse(name) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => stats.mask_entries += 1,
                Err(e) if e.is_entry_skip() => stats.record_skip(&e),
                Err(e) => return Err(e),
            }
        }

        let catalog = Catalog::group(records);
        stats.stickers = catalog.sticker_count();
        stats.categories = catalog.category_count();
        stats.packs = catalog.pack_count();

        Ok((catalog, stats))
    }

    /// Executes the pipeline, writing the rendered catalog to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory can't be listed or writing fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sticker_catalog::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder()
    ///     .root_dir("./Stickers")
    ///     .build()?;
    ///
    /// let stats = Pipeline::new(config).run(&mut std::io::stdout().lock())?;
    /// stats.log_summary();
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, out), fields(root_dir = %self.config.root_dir.display()))]
    pub fn run(self, out: &mut dyn Write) -> Result<PipelineStats> {
        let start_time = Instant::now();

        info!("Parsing entries...");
        let (catalog, mut stats) = self.build_catalog()?;
        info!(
            "✓ Parsed {} stickers from {} entries",
            stats.stickers, stats.entries_listed
        );

        if catalog.is_empty() {
            warn!("No sticker entries found in {}", self.config.root_dir.display());
        }

        info!("Rendering {:?} output...", self.config.format);
        stats.lines_written = self.renderer.render(&catalog, out)?;
        stats.duration = start_time.elapsed();

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use assert_fs::prelude::*;

    fn fixture(entries: &[&str]) -> assert_fs::TempDir {
        let temp = assert_fs::TempDir::new().unwrap();
        for entry in entries {
            temp.child(entry).create_dir_all().unwrap();
        }
        temp
    }

    fn run_to_string(root: &std::path::Path, format: OutputFormat) -> (String, PipelineStats) {
        let config = Config::builder()
            .root_dir(root)
            .format(format)
            .build()
            .unwrap();
        let mut buf = Vec::new();
        let stats = Pipeline::new(config).run(&mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), stats)
    }

    #[test]
    fn test_farm_scenario() {
        let temp = fixture(&[
            "Animals_Farm+Pigs+1+10+20+13+25+0.imageset",
            "Animals_Farm+Pigs+1+10+20+13+25+0+mask.imageset",
            "Animals_Farm+Pigs+2+5+5+5+5+90.imageset",
        ]);

        let (output, stats) = run_to_string(temp.path(), OutputFormat::Swift);

        assert!(output.starts_with("import CoreGraphics\n\n"));
        assert_eq!(output.matches("StickerPackCategory(").count(), 1);
        assert!(output.contains("name: \"Animals Farm\","));
        assert_eq!(output.matches("StickerPack(").count(), 1);
        assert!(output.contains("name: \"Pigs\","));
        assert!(!output.contains("mask.imageset"));
        assert!(!output.contains("+mask\""));

        let first = output
            .find("imageName: \"Animals_Farm+Pigs+1+10+20+13+25+0\"")
            .unwrap();
        let second = output
            .find("imageName: \"Animals_Farm+Pigs+2+5+5+5+5+90\"")
            .unwrap();
        assert!(first < second);
        assert!(output.contains("maskInnerOffset: CGPoint(x: 3, y: 5),"));
        assert!(output.contains("maskInnerOffset: CGPoint(x: 0, y: 0),"));

        assert_eq!(stats.entries_listed, 3);
        assert_eq!(stats.mask_entries, 1);
        assert_eq!(stats.stickers, 2);
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.packs, 1);
        assert_eq!(stats.lines_written, output.lines().count());
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let temp = fixture(&[
            "Space+Rockets+1+0+0+0+0+0.imageset",
            "Space+Rockets+1+0+0.imageset",
            "Space+Rockets+x+0+0+0+0+0.imageset",
        ]);
        temp.child("Contents.json").write_str("{}").unwrap();

        let (output, stats) = run_to_string(temp.path(), OutputFormat::Swift);

        assert_eq!(stats.entries_listed, 4);
        assert_eq!(stats.malformed_entries, 2);
        assert_eq!(stats.unparsable_entries, 1);
        assert_eq!(stats.skipped_entries(), 3);
        assert_eq!(stats.stickers, 1);
        assert_eq!(output.matches("Sticker(").count(), 1);
        assert!(!output.contains("Space+Rockets+x"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let temp = fixture(&[
            "B+Two+2+1+1+1+1+0.imageset",
            "A+One+1+1+1+1+1+0.imageset",
            "B+One+3+1+1+1+1+0.imageset",
            "A+One+0+1+1+1+1+0.imageset",
        ]);

        let (first, _) = run_to_string(temp.path(), OutputFormat::Swift);
        let (second, _) = run_to_string(temp.path(), OutputFormat::Swift);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_directory_renders_empty_list() {
        let temp = fixture(&[]);

        let (output, stats) = run_to_string(temp.path(), OutputFormat::Swift);

        assert_eq!(stats.stickers, 0);
        assert!(output.contains("return [\n        ]"));
    }

    #[test]
    fn test_json_format() {
        let temp = fixture(&["Animals_Farm+Pigs+1+10+20+13+25+0.imageset"]);

        let (output, _) = run_to_string(temp.path(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["name"], "Animals Farm");
        assert_eq!(value[0]["packs"][0]["stickers"][0]["maskInnerOffset"]["y"], 5);
    }

    #[test]
    fn test_directory_removed_after_build_is_reported_by_listing() {
        let temp = assert_fs::TempDir::new().unwrap();
        let root = temp.child("Stickers");
        root.create_dir_all().unwrap();
        let config = Config::builder().root_dir(root.path()).build().unwrap();

        std::fs::remove_dir(root.path()).unwrap();

        let pipeline = Pipeline::new(config);
        let err = pipeline.run(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::DirectoryRead { .. }));
    }

    #[test]
    fn test_skip_counters() {
        let mut stats = PipelineStats::default();
        stats.record_skip(&Error::malformed("A+B", 2));
        stats.record_skip(&Error::unparsable("A+B+x+0+0+0+0+0", "packNumber", "x"));
        stats.record_skip(&Error::malformed("C", 1));

        assert_eq!(stats.malformed_entries, 2);
        assert_eq!(stats.unparsable_entries, 1);
        assert_eq!(stats.skipped_entries(), 3);
    }
}
