use anyhow::Context;
use clap::Parser;
use sticker_catalog::{Config, DEFAULT_ASSET_SUFFIX, DEFAULT_MASK_SUFFIX, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "sticker-catalog",
    version,
    about = "Generate a sticker pack catalog from encoded image-asset folder names",
    long_about = "Generate a sticker pack catalog from encoded image-asset folder names.\n\n\
    Each sticker folder is named\n  \
      <Category>+<Pack>+<number>+<centerX>+<centerY>+<innerX>+<innerY>+<angle>.imageset\n\
    with underscores standing in for spaces. Companion '+mask.imageset' folders are ignored.\n\n\
    USAGE EXAMPLES:\n  \
      # Generate Swift source\n  \
      sticker-catalog Assets.xcassets/Stickers > Stickers.swift\n\n  \
      # Generate JSON\n  \
      sticker-catalog --format json Assets.xcassets/Stickers"
)]
struct Cli {
    /// Directory containing the sticker asset folders (the last one given wins)
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "swift")]
    format: CliFormat,

    /// Suffix of companion mask entries
    #[arg(long, default_value = DEFAULT_MASK_SUFFIX, value_name = "SUFFIX")]
    mask_suffix: String,

    /// Suffix stripped from sticker entry names
    #[arg(long, default_value = DEFAULT_ASSET_SUFFIX, value_name = "SUFFIX")]
    asset_suffix: String,

    /// Verbose diagnostics on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn root_dir(&self) -> Option<&PathBuf> {
        self.dirs.last()
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliFormat {
    Swift,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Swift => Self::Swift,
            CliFormat::Json => Self::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let root_dir = cli.root_dir().cloned();
    let mut builder = Config::builder()
        .format(cli.format.into())
        .mask_suffix(cli.mask_suffix)
        .asset_suffix(cli.asset_suffix);

    if let Some(dir) = root_dir {
        builder = builder.root_dir(dir);
    }

    let result = builder.build().and_then(sticker_catalog::run);

    match result {
        Ok(stats) => {
            stats.log_summary();
            Ok(())
        }
        // Problems with the directory argument are reported, not failed.
        Err(e) if e.is_input() => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e).context("Catalog generation failed"),
    }
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("sticker_catalog=warn"),
        1 => EnvFilter::new("sticker_catalog=info"),
        2 => EnvFilter::new("sticker_catalog=debug"),
        _ => EnvFilter::new("sticker_catalog=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_positional_is_the_directory() {
        let cli = Cli::try_parse_from(["sticker-catalog", "x", "/dir"]).unwrap();
        assert_eq!(cli.root_dir(), Some(&PathBuf::from("/dir")));
    }

    #[test]
    fn test_flags_between_positionals() {
        let cli =
            Cli::try_parse_from(["sticker-catalog", "a", "--format", "json", "b"]).unwrap();
        assert_eq!(cli.root_dir(), Some(&PathBuf::from("b")));
        assert!(matches!(cli.format, CliFormat::Json));
    }

    #[test]
    fn test_no_directory() {
        let cli = Cli::try_parse_from(["sticker-catalog"]).unwrap();
        assert_eq!(cli.root_dir(), None);
    }
}
