/// Suffix appended to a sticker's image name to form its mask image name.
const MASK_IMAGE_SUFFIX: &str = "_mask";

/// A sticker decoded from one asset folder name.
///
/// Records are immutable once built by [`crate::EntryParser`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerRecord {
    /// Category name (underscores replaced by spaces)
    pub category_name: String,

    /// Pack name (underscores replaced by spaces)
    pub pack_name: String,

    /// Sticker number within its pack
    pub pack_number: i64,

    /// Entry name without the asset suffix, underscores kept
    pub filename: String,

    /// Mask anchor, x coordinate
    pub mask_center_x: i64,

    /// Mask anchor, y coordinate
    pub mask_center_y: i64,

    /// Raw inner mask coordinate, x
    pub mask_inner_x: i64,

    /// Raw inner mask coordinate, y
    pub mask_inner_y: i64,

    /// Rotation angle in degrees
    pub angle: i64,
}

impl StickerRecord {
    /// Returns the mask center as an `(x, y)` pair.
    #[must_use]
    pub const fn mask_center(&self) -> (i64, i64) {
        (self.mask_center_x, self.mask_center_y)
    }

    /// Returns the inner coordinate relative to the mask center.
    ///
    /// Widened to `i128` so the difference of any two `i64` coordinates is exact.
    #[must_use]
    pub fn mask_inner_offset(&self) -> (i128, i128) {
        (
            i128::from(self.mask_inner_x) - i128::from(self.mask_center_x),
            i128::from(self.mask_inner_y) - i128::from(self.mask_center_y),
        )
    }

    /// Returns the image name of the companion mask asset.
    #[must_use]
    pub fn mask_image_name(&self) -> String {
        format!("{}{MASK_IMAGE_SUFFIX}", self.filename)
    }
}

#[cfg(test)]
pub(crate) fn record(category: &str, pack: &str, filename: &str) -> StickerRecord {
    StickerRecord {
        category_name: category.to_string(),
        pack_name: pack.to_string(),
        pack_number: 1,
        filename: filename.to_string(),
        mask_center_x: 0,
        mask_center_y: 0,
        mask_inner_x: 0,
        mask_inner_y: 0,
        angle: 0,
    }
}
