use crate::sticker::StickerRecord;
use std::collections::BTreeMap;

type Packs = BTreeMap<String, Vec<StickerRecord>>;

/// Stickers grouped by category name, then by pack name.
///
/// Category and pack iteration is in ascending name order. Stickers are kept
/// in insertion order and sorted on access by [`Pack::stickers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: BTreeMap<String, Packs>,
}

impl Catalog {
    /// Groups records by category and pack.
    #[must_use]
    pub fn group(records: impl IntoIterator<Item = StickerRecord>) -> Self {
        let mut categories: BTreeMap<String, Packs> = BTreeMap::new();

        for record in records {
            categories
                .entry(record.category_name.clone())
                .or_default()
                .entry(record.pack_name.clone())
                .or_default()
                .push(record);
        }

        Self { categories }
    }

    /// Iterates categories in ascending name order.
    pub fn categories(&self) -> impl Iterator<Item = Category<'_>> {
        self.categories
            .iter()
            .map(|(name, packs)| Category { name, packs })
    }

    /// Returns true if no sticker was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of distinct (category, pack) pairs.
    #[must_use]
    pub fn pack_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Total number of stickers.
    #[must_use]
    pub fn sticker_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }
}

/// A category view borrowed from a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Category<'a> {
    name: &'a str,
    packs: &'a Packs,
}

impl<'a> Category<'a> {
    /// Category name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Iterates packs in ascending name order.
    pub fn packs(self) -> impl Iterator<Item = Pack<'a>> {
        self.packs
            .iter()
            .map(|(name, stickers)| Pack { name, stickers })
    }
}

/// A pack view borrowed from a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Pack<'a> {
    name: &'a str,
    stickers: &'a [StickerRecord],
}

impl<'a> Pack<'a> {
    /// Pack name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the pack's stickers sorted by filename.
    ///
    /// The sort is stable, so duplicate filenames keep their listing order.
    #[must_use]
    pub fn stickers(&self) -> Vec<&'a StickerRecord> {
        let mut stickers: Vec<_> = self.stickers.iter().collect();
        stickers.sort_by(|a, b| a.filename.cmp(&b.filename));
        stickers
    }
}
