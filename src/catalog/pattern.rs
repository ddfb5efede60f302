//! Pattern records, categories and image references

use crate::io::configuration::{
    F2L_PATTERN_COUNT, IMAGE_EXTENSION, MOVE_IMAGE_ROOT, OLL_PATTERN_COUNT, PATTERN_IMAGE_ROOT,
    PATTERN_NUMBER_WIDTH, PLL_PATTERN_COUNT,
};
use crate::io::error::{DrillError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Algorithm family a pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// First two layers
    F2l,
    /// Orientation of the last layer
    Oll,
    /// Permutation of the last layer
    Pll,
}

impl Category {
    /// Every category in catalog order
    pub const ALL: [Self; 3] = [Self::F2l, Self::Oll, Self::Pll];

    /// Number of patterns in the category
    pub const fn pattern_count(self) -> usize {
        match self {
            Self::F2l => F2L_PATTERN_COUNT,
            Self::Oll => OLL_PATTERN_COUNT,
            Self::Pll => PLL_PATTERN_COUNT,
        }
    }

    /// Lower-case prefix used in pattern ids and document fields
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::F2l => "f2l",
            Self::Oll => "oll",
            Self::Pll => "pll",
        }
    }

    /// Upper-case label shown to the user
    pub const fn label(self) -> &'static str {
        match self {
            Self::F2l => "F2L",
            Self::Oll => "OLL",
            Self::Pll => "PLL",
        }
    }

    /// Format the id of the `number`-th pattern (1-based)
    pub fn pattern_id(self, number: usize) -> String {
        format!(
            "{}_{number:0width$}",
            self.prefix(),
            width = PATTERN_NUMBER_WIDTH
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.prefix().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("category", &s, &"expected one of f2l, oll, pll"))
    }
}

/// Opaque image references for one pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRefs {
    /// Image showing only the cube state
    pub pattern: String,
    /// Image showing the cube state together with its move sequence
    pub with_moves: String,
}

impl ImageRefs {
    /// Build both references for a pattern id
    pub fn for_id(id: &str) -> Self {
        Self {
            pattern: format!("{PATTERN_IMAGE_ROOT}/{id}.{IMAGE_EXTENSION}"),
            with_moves: format!("{MOVE_IMAGE_ROOT}/{id}.{IMAGE_EXTENSION}"),
        }
    }
}

/// Single flashcard in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternRecord {
    /// Unique id, `<category>_<NN>`
    pub id: String,
    /// Category the pattern belongs to
    pub category: Category,
    /// Where the presentation layer finds the images
    pub image_refs: ImageRefs,
}

impl PatternRecord {
    /// Create the `number`-th pattern (1-based) of a category
    pub fn new(category: Category, number: usize) -> Self {
        let id = category.pattern_id(number);
        let image_refs = ImageRefs::for_id(&id);
        Self {
            id,
            category,
            image_refs,
        }
    }
}
