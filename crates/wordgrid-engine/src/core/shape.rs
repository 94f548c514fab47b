use serde::{Deserialize, Serialize};

/// Shape mask of a block template, row by row. `true` marks a filled cell.
pub type ShapeMask = &'static [&'static [bool]];

/// The closed catalog of block templates.
///
/// Each kind carries a fixed mask in its spawn orientation. Letters are
/// assigned per instance when a [`Block`](super::block::Block) is generated.
///
/// # Example
///
/// ```
/// use wordgrid_engine::ShapeKind;
///
/// assert_eq!(ShapeKind::Triple.mask().len(), 3);
/// assert_eq!(ShapeKind::LFour.cell_count(), 4);
/// assert_eq!(ShapeKind::from_id("Square_shape"), Some(ShapeKind::Square));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// One cell.
    #[serde(rename = "Single_shape")]
    Single,
    /// Two cells side by side.
    #[serde(rename = "Double_shape")]
    Double,
    /// Three cells stacked vertically.
    #[serde(rename = "Triple_shape")]
    Triple,
    /// 2×2 square.
    #[serde(rename = "Square_shape")]
    Square,
    /// Three-cell L.
    #[serde(rename = "L_shape_3_letter")]
    LThree,
    /// Four-cell L.
    #[serde(rename = "L_shape_4_letter")]
    LFour,
}

const SINGLE_MASK: ShapeMask = &[&[true]];
const DOUBLE_MASK: ShapeMask = &[&[true, true]];
const TRIPLE_MASK: ShapeMask = &[&[true], &[true], &[true]];
const SQUARE_MASK: ShapeMask = &[&[true, true], &[true, true]];
const L_THREE_MASK: ShapeMask = &[&[true, false], &[true, true]];
const L_FOUR_MASK: ShapeMask = &[&[true, false], &[true, false], &[true, true]];

impl ShapeKind {
    /// Number of shape kinds (6).
    pub const LEN: usize = 6;

    pub const ALL: [ShapeKind; Self::LEN] = [
        ShapeKind::Single,
        ShapeKind::Double,
        ShapeKind::Triple,
        ShapeKind::Square,
        ShapeKind::LThree,
        ShapeKind::LFour,
    ];

    #[must_use]
    pub const fn mask(self) -> ShapeMask {
        match self {
            ShapeKind::Single => SINGLE_MASK,
            ShapeKind::Double => DOUBLE_MASK,
            ShapeKind::Triple => TRIPLE_MASK,
            ShapeKind::Square => SQUARE_MASK,
            ShapeKind::LThree => L_THREE_MASK,
            ShapeKind::LFour => L_FOUR_MASK,
        }
    }

    /// Human-readable name shown by the presentation layer.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Single => "Single",
            ShapeKind::Double => "Double",
            ShapeKind::Triple => "Triple",
            ShapeKind::Square => "Square",
            ShapeKind::LThree => "L-Shape (3)",
            ShapeKind::LFour => "L-Shape (4)",
        }
    }

    /// Stable template identifier, also used as the serialized form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ShapeKind::Single => "Single_shape",
            ShapeKind::Double => "Double_shape",
            ShapeKind::Triple => "Triple_shape",
            ShapeKind::Square => "Square_shape",
            ShapeKind::LThree => "L_shape_3_letter",
            ShapeKind::LFour => "L_shape_4_letter",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Number of filled cells in the mask.
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.mask()
            .iter()
            .map(|row| row.iter().filter(|&&filled| filled).count())
            .sum()
    }
}
