//! Entry-name decoding.
//!
//! A sticker folder name has the form
//! `Category+Pack+number+centerX+centerY+innerX+innerY+angle<asset suffix>`,
//! with underscores standing in for spaces.

use crate::{
    config::Config,
    error::{Error, Result},
    sticker::StickerRecord,
};
use tracing::trace;

/// Number of `+`-separated tokens in a sticker entry name.
pub(crate) const TOKEN_COUNT: usize = 8;
const TOKEN_DELIMITER: char = '+';

/// Position and name of a numeric token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericField {
    PackNumber = 2,
    MaskCenterX = 3,
    MaskCenterY = 4,
    MaskInnerX = 5,
    MaskInnerY = 6,
    Angle = 7,
}

impl NumericField {
    const fn name(self) -> &'static str {
        match self {
            Self::PackNumber => "packNumber",
            Self::MaskCenterX => "maskCenterX",
            Self::MaskCenterY => "maskCenterY",
            Self::MaskInnerX => "maskInnerX",
            Self::MaskInnerY => "maskInnerY",
            Self::Angle => "angle",
        }
    }

    fn decode(self, tokens: &[String], filename: &str) -> Result<i64> {
        let token = &tokens[self as usize];
        token
            .parse::<i64>()
            .map_err(|_| Error::unparsable(filename, self.name(), token.as_str()))
    }
}

/// Turns directory entry names into [`StickerRecord`]s.
#[derive(Debug, Clone)]
pub struct EntryParser {
    mask_suffix: String,
    asset_suffix_len: usize,
}

impl EntryParser {
    /// Creates a parser using the suffixes from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_suffixes(&config.mask_suffix, &config.asset_suffix)
    }

    /// Creates a parser with explicit mask and asset suffixes.
    #[must_use]
    pub fn with_suffixes(mask_suffix: &str, asset_suffix: &str) -> Self {
        Self {
            mask_suffix: mask_suffix.to_string(),
            asset_suffix_len: asset_suffix.chars().count(),
        }
    }

    /// Returns true if the entry is a companion mask asset.
    #[must_use]
    pub fn is_mask_entry(&self, entry_name: &str) -> bool {
        entry_name.ends_with(&self.mask_suffix)
    }

    /// Drops the asset suffix from an entry name.
    ///
    /// The suffix is removed by length, so entries are expected to carry it.
    #[must_use]
    pub fn logical_filename<'a>(&self, entry_name: &'a str) -> &'a str {
        let keep = entry_name
            .chars()
            .count()
            .saturating_sub(self.asset_suffix_len);
        let end = entry_name
            .char_indices()
            .nth(keep)
            .map_or(entry_name.len(), |(idx, _)| idx);
        &entry_name[..end]
    }

    /// Parses a single directory entry name.
    ///
    /// Returns `Ok(None)` for mask entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntryName`] if the name doesn't split into
    /// exactly eight tokens, or [`Error::UnparsableNumericField`] if a numeric
    /// token isn't a base-10 integer. Both only disqualify this entry.
    pub fn parse(&self, entry_name: &str) -> Result<Option<StickerRecord>> {
        if self.is_mask_entry(entry_name) {
            trace!("Skipping mask entry: {}", entry_name);
            return Ok(None);
        }

        let filename = self.logical_filename(entry_name);
        let tokens = tokenize(filename);

        if tokens.len() != TOKEN_COUNT {
            return Err(Error::malformed(filename, tokens.len()));
        }

        let pack_number = NumericField::PackNumber.decode(&tokens, filename)?;
        let mask_center_x = NumericField::MaskCenterX.decode(&tokens, filename)?;
        let mask_center_y = NumericField::MaskCenterY.decode(&tokens, filename)?;
        let mask_inner_x = NumericField::MaskInnerX.decode(&tokens, filename)?;
        let mask_inner_y = NumericField::MaskInnerY.decode(&tokens, filename)?;
        let angle = NumericField::Angle.decode(&tokens, filename)?;

        let mut tokens = tokens.into_iter();
        let category_name = tokens.next().unwrap_or_default();
        let pack_name = tokens.next().unwrap_or_default();

        Ok(Some(StickerRecord {
            category_name,
            pack_name,
            pack_number,
            filename: filename.to_string(),
            mask_center_x,
            mask_center_y,
            mask_inner_x,
            mask_inner_y,
            angle,
        }))
    }
}

/// Splits a logical filename into tokens.
///
/// Underscores become spaces first; empty pieces between delimiters are dropped.
fn tokenize(filename: &str) -> Vec<String> {
    filename
        .replace('_', " ")
        .split(TOKEN_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_ASSET_SUFFIX, DEFAULT_MASK_SUFFIX};

    fn parser() -> EntryParser {
        EntryParser::with_suffixes(DEFAULT_MASK_SUFFIX, DEFAULT_ASSET_SUFFIX)
    }

    #[test]
    fn test_parse_valid_entry() {
        let record = parser()
            .parse("Animals_Farm+Pigs+1+10+20+13+25+0.imageset")
            .unwrap()
            .unwrap();

        assert_eq!(record.category_name, "Animals Farm");
        assert_eq!(record.pack_name, "Pigs");
        assert_eq!(record.pack_number, 1);
        assert_eq!(record.filename, "Animals_Farm+Pigs+1+10+20+13+25+0");
        assert_eq!(record.mask_center(), (10, 20));
        assert_eq!((record.mask_inner_x, record.mask_inner_y), (13, 25));
        assert_eq!(record.angle, 0);
    }

    #[test]
    fn test_parse_signed_values() {
        let record = parser()
            .parse("Space+Rockets_And_Stars+-3+-10+20+5+-25+-90.imageset")
            .unwrap()
            .unwrap();

        assert_eq!(record.pack_name, "Rockets And Stars");
        assert_eq!(record.pack_number, -3);
        assert_eq!(record.mask_center(), (-10, 20));
        assert_eq!((record.mask_inner_x, record.mask_inner_y), (5, -25));
        assert_eq!(record.angle, -90);
    }

    #[test]
    fn test_mask_entry_is_skipped() {
        let parser = parser();
        let entry = "Animals_Farm+Pigs+1+10+20+13+25+0+mask.imageset";

        assert!(parser.is_mask_entry(entry));
        assert_eq!(parser.parse(entry).unwrap(), None);
    }

    #[test]
    fn test_wrong_token_count() {
        let parser = parser();

        let err = parser.parse("Animals+Pigs+1+10+20.imageset").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedEntryName { tokens: 5, .. }
        ));

        let err = parser
            .parse("Animals+Pigs+1+10+20+13+25+0+7.imageset")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedEntryName { tokens: 9, .. }
        ));
    }

    #[test]
    fn test_empty_pieces_are_not_tokens() {
        let record = parser()
            .parse("Animals++Pigs+1+10+20+13+25+0+.imageset")
            .unwrap()
            .unwrap();

        assert_eq!(record.pack_name, "Pigs");
        assert_eq!(record.angle, 0);
    }

    #[test]
    fn test_non_numeric_field_reports_filename() {
        let err = parser()
            .parse("Animals+Pigs+1+10+twenty+13+25+0.imageset")
            .unwrap_err();

        match err {
            Error::UnparsableNumericField {
                filename,
                field,
                value,
            } => {
                assert_eq!(filename, "Animals+Pigs+1+10+twenty+13+25+0");
                assert_eq!(field, "maskCenterY");
                assert_eq!(value, "twenty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_underscore_in_numeric_field_fails() {
        let err = parser()
            .parse("Animals+Pigs+1_0+10+20+13+25+0.imageset")
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnparsableNumericField { field: "packNumber", .. }
        ));
    }

    #[test]
    fn test_logical_filename_drops_suffix_length() {
        let parser = parser();

        assert_eq!(parser.logical_filename("Émoji+Pack.imageset"), "Émoji+Pack");
        assert_eq!(parser.logical_filename(".DS_Store"), "");
        assert_eq!(parser.logical_filename("short"), "");
    }

    #[test]
    fn test_custom_suffixes() {
        let parser = EntryParser::with_suffixes("+mask.png", ".png");

        assert!(parser.parse("A+B+1+2+3+4+5+6+mask.png").unwrap().is_none());

        let record = parser.parse("A+B+1+2+3+4+5+6.png").unwrap().unwrap();
        assert_eq!(record.filename, "A+B+1+2+3+4+5+6");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a_b+c++d"), vec!["a b", "c", "d"]);
        assert!(tokenize("").is_empty());
    }
}
