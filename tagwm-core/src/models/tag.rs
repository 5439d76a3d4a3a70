use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use crate::errors::{Result, TagError};

/// Highest number of user tags. One more bit is kept for the scratchpad.
pub const MAX_TAGS: usize = 31;

/// A set of tags, one bit per tag. Tag `0` is the lowest bit.
///
/// The value with every bit set ([`TagMask::ALL`]) is the reserved "all tags" mask. It is only
/// ever passed around as a request; tag-set registers store it masked down to the configured
/// tags.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TagMask(pub u32);

impl TagMask {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(!0);

    /// Mask holding only the tag at `index` (0 based).
    #[must_use]
    pub const fn tag(index: usize) -> Self {
        Self(1 << index)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the lowest tag in the set.
    #[must_use]
    pub const fn first_tag(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Index of the tag when exactly one is set.
    #[must_use]
    pub const fn single_tag(self) -> Option<usize> {
        if self.0.count_ones() == 1 {
            self.first_tag()
        } else {
            None
        }
    }

    /// Indices of every set tag, lowest first.
    pub fn tags(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |i| self.0 & (1 << i) != 0)
    }

    /// Shift every tag one position towards tag `0`.
    #[must_use]
    pub const fn shifted_left(self) -> Self {
        Self(self.0 >> 1)
    }

    /// Shift every tag one position away from tag `0`.
    #[must_use]
    pub const fn shifted_right(self) -> Self {
        Self(self.0 << 1)
    }
}

impl BitAnd for TagMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for TagMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for TagMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TagMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for TagMask {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for TagMask {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0)
    }
}

/// The configured tag labels. Their count fixes the width of every [`TagMask`] in use.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tags {
    labels: Vec<String>,
}

impl Tags {
    /// # Errors
    ///
    /// Fails when no label is given or when the labels do not fit a mask with the scratchpad
    /// bit reserved.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(TagError::NoTags);
        }
        if labels.len() > MAX_TAGS {
            return Err(TagError::TooManyTags {
                count: labels.len(),
                max: MAX_TAGS,
            });
        }
        Ok(Self { labels })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Every user tag.
    #[must_use]
    pub fn mask(&self) -> TagMask {
        TagMask((1 << self.labels.len()) - 1)
    }

    /// The bit right above the user tags, owned by the scratchpad.
    #[must_use]
    pub fn scratch(&self) -> TagMask {
        TagMask(1 << self.labels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(count: usize) -> Vec<String> {
        (1..=count).map(|i| i.to_string()).collect()
    }

    #[test]
    fn masks_follow_the_number_of_labels() {
        let tags = Tags::new(labels(9)).unwrap();
        assert_eq!(tags.mask(), TagMask(0x1ff));
        assert_eq!(tags.scratch(), TagMask(0x200));
        assert!(!tags.mask().intersects(tags.scratch()));
    }

    #[test]
    fn the_widest_tag_list_still_leaves_room_for_the_scratchpad() {
        let tags = Tags::new(labels(MAX_TAGS)).unwrap();
        assert_eq!(tags.scratch(), TagMask(1 << 31));
        assert_eq!(tags.mask().count(), 31);
    }

    #[test]
    fn too_many_labels_are_rejected() {
        assert!(matches!(
            Tags::new(labels(MAX_TAGS + 1)),
            Err(TagError::TooManyTags { count: 32, .. })
        ));
        assert!(matches!(Tags::new(vec![]), Err(TagError::NoTags)));
    }

    #[test]
    fn single_tag_only_resolves_exact_masks() {
        assert_eq!(TagMask::tag(4).single_tag(), Some(4));
        assert_eq!(TagMask(0b101).single_tag(), None);
        assert_eq!(TagMask(0b101).first_tag(), Some(0));
        assert_eq!(TagMask::EMPTY.first_tag(), None);
    }

    #[test]
    fn tags_iterates_lowest_first() {
        let set: Vec<usize> = TagMask(0b1010_0001).tags().collect();
        assert_eq!(set, vec![0, 5, 7]);
    }
}
