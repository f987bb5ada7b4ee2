use crate::{
    config::Config,
    error::{Error, Result},
};
use std::path::PathBuf;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Result of listing the asset directory.
#[derive(Debug, Default, Clone)]
pub(crate) struct Listing {
    /// Entry names in ascending order
    pub(crate) names: Vec<String>,

    /// Entries skipped because their name isn't valid UTF-8
    pub(crate) non_utf8: usize,
}

/// Lists the immediate entries of the asset directory.
pub(crate) struct Scanner {
    root_dir: PathBuf,
}

impl Scanner {
    /// Creates a new scanner from configuration.
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
        }
    }

    /// Lists entry names directly under the root directory, without recursion.
    ///
    /// Files and folders are both listed; asset catalogs store stickers as
    /// `.imageset` folders.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryRead`] if the directory can't be read.
    pub(crate) fn list(&self) -> Result<Listing> {
        debug!("Listing {}", self.root_dir.display());

        let walker = WalkDir::new(&self.root_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut listing = Listing::default();
        for entry in walker {
            let entry =
                entry.map_err(|e| Error::directory_read(&self.root_dir, e.to_string()))?;

            match entry.file_name().to_str() {
                Some(name) => {
                    trace!("Found entry: {}", name);
                    listing.names.push(name.to_string());
                }
                None => {
                    warn!(
                        "Skipping entry with non UTF-8 name: {}",
                        entry.path().display()
                    );
                    listing.non_utf8 += 1;
                }
            }
        }

        debug!("Listed {} entries", listing.names.len());
        Ok(listing)
    }
}
