//! Strip pattern: the cell-code source every strip is generated from
//!
//! Codes are read bottom row first, left to right, then upward: cell `i`
//! lands at grid `(i % width, height - 1 - i / width)`.

use serde::{Deserialize, Serialize};

use super::tile::CellCode;
use crate::error::PatternError;

/// A validated, re-readable pattern of cell codes
///
/// Deserialization goes through [`StripPattern::from_codes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPattern")]
pub struct StripPattern {
    codes: Vec<i32>,
    width: usize,
    anchor_index: usize,
}

impl StripPattern {
    /// Validate raw codes. Length must be a non-zero multiple of `width`.
    pub fn from_codes(
        codes: Vec<i32>,
        width: usize,
        anchor_index: usize,
    ) -> Result<Self, PatternError> {
        if width == 0 {
            return Err(PatternError::ZeroWidth);
        }
        if codes.is_empty() {
            return Err(PatternError::Empty);
        }
        if codes.len() % width != 0 {
            return Err(PatternError::NotMultipleOfWidth {
                len: codes.len(),
                width,
            });
        }
        if anchor_index >= codes.len() {
            return Err(PatternError::AnchorOutOfRange {
                index: anchor_index,
                len: codes.len(),
            });
        }
        let pattern = Self {
            codes,
            width,
            anchor_index,
        };
        if !pattern.has_tile_anchor() {
            return Err(PatternError::AnchorNotTile {
                index: anchor_index,
            });
        }
        Ok(pattern)
    }

    /// Build from rows drawn top to bottom.
    ///
    /// `#` wall, `^` hazard, `*` collectible, `~` gravity flip,
    /// `e` enemy spawn, `.` or space empty.
    pub fn from_rows(rows: &[&str], anchor_index: usize) -> Result<Self, PatternError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let codes = layout_codes(rows)?;
        Self::from_codes(codes, width, anchor_index)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.codes.len() / self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    pub fn anchor_index(&self) -> usize {
        self.anchor_index
    }

    pub fn codes(&self) -> &[i32] {
        &self.codes
    }

    /// Grid cell for pattern index `i`
    #[inline]
    pub fn cell_position(&self, i: usize) -> (i32, i32) {
        let x = i % self.width;
        let y = self.height() - 1 - i / self.width;
        (x as i32, y as i32)
    }

    /// Iterate `(index, grid_x, grid_y, cell)` in pattern order
    pub fn cells(&self) -> impl Iterator<Item = (usize, i32, i32, CellCode)> + '_ {
        self.codes.iter().enumerate().map(|(i, &code)| {
            let (x, y) = self.cell_position(i);
            (i, x, y, CellCode::from_code(code))
        })
    }

    /// Whether the anchor cell produces a tile
    pub fn has_tile_anchor(&self) -> bool {
        matches!(
            CellCode::from_code(self.codes[self.anchor_index]),
            CellCode::Tile(_)
        )
    }
}

/// Unchecked serialized form of [`StripPattern`]
#[derive(Deserialize)]
struct RawPattern {
    codes: Vec<i32>,
    width: usize,
    anchor_index: usize,
}

impl TryFrom<RawPattern> for StripPattern {
    type Error = PatternError;

    fn try_from(raw: RawPattern) -> Result<Self, Self::Error> {
        Self::from_codes(raw.codes, raw.width, raw.anchor_index)
    }
}

/// Convert layout rows (top to bottom) into bottom-first codes
pub fn layout_codes(rows: &[&str]) -> Result<Vec<i32>, PatternError> {
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    let mut codes = Vec::with_capacity(width * rows.len());

    for (row, line) in rows.iter().enumerate().rev() {
        let actual = line.chars().count();
        if actual != width {
            return Err(PatternError::RaggedRow {
                row,
                expected: width,
                actual,
            });
        }
        for glyph in line.chars() {
            let code = match glyph {
                '#' => CellCode::WALL,
                '^' => CellCode::HAZARD,
                '*' => CellCode::COLLECTIBLE,
                '~' => CellCode::GRAVITY_FLIP,
                'e' => CellCode::ENEMY_SPAWN,
                '.' | ' ' => CellCode::EMPTY,
                _ => return Err(PatternError::UnknownGlyph { glyph, row }),
            };
            codes.push(code);
        }
    }

    Ok(codes)
}

/// Built-in 40 x 15 layout: ceiling and ground with gaps, coins, one flip tile
pub const DEFAULT_LAYOUT: [&str; 15] = [
    "##############....############....######",
    ".........^^^............................",
    "........................................",
    "........................................",
    "..............*.*.*.....................",
    "...........#########....................",
    "..........................######........",
    "..........*.*.*.........................",
    "......................~.................",
    "........................................",
    "...................######...............",
    ".............e..........................",
    "..*.*.*.............................*.*.",
    ".........................e..............",
    "##########..#######^^###############.###",
];

/// Default pattern codes (bottom row first)
pub fn default_codes() -> Vec<i32> {
    // DEFAULT_LAYOUT is rectangular and uses known glyphs only
    layout_codes(&DEFAULT_LAYOUT).unwrap_or_default()
}
