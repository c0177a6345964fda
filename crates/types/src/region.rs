//! Retained map regions
//!
//! A region is a pair of half-open `[start, end)` ranges, one per axis.
//! Cell regions bound `map_<x>_<y>` files; chunk regions bound
//! `chunkdata_<x>_<y>` and `zpop_<x>_<y>` files.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU16;
use std::ops::Range;

/// Number of cells along one side of a chunk
pub const DEFAULT_CHUNK_SIZE: NonZeroU16 = match NonZeroU16::new(300) {
    Some(size) => size,
    None => unreachable!(),
};

/// A rectangular area of the world, half-open on both axes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: Range<i32>,
    pub y: Range<i32>,
}

impl Region {
    #[must_use]
    pub fn new(x: Range<i32>, y: Range<i32>) -> Self {
        Self { x, y }
    }

    /// Whether `(x, y)` lies inside both axis ranges
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }

    /// [`Region::contains`] for coordinates that may not fit in `i32`
    #[must_use]
    pub fn contains_wide(&self, x: i64, y: i64) -> bool {
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => self.contains(x, y),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Smallest chunk region covering every cell of this region
    ///
    /// Negative coordinates round towards negative infinity, so a cell at
    /// `-1` lands in chunk `-1`.
    #[must_use]
    pub fn containing_chunk_region(&self, chunk_size: NonZeroU16) -> Region {
        let size = i32::from(chunk_size.get());
        Region::new(
            cells_to_chunks(&self.x, size),
            cells_to_chunks(&self.y, size),
        )
    }
}

fn cells_to_chunks(cells: &Range<i32>, size: i32) -> Range<i32> {
    if cells.is_empty() {
        let start = cells.start.div_euclid(size);
        return start..start;
    }
    let start = cells.start.div_euclid(size);
    let end = (cells.end - 1).div_euclid(size) + 1;
    start..end
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x {}..{}, y {}..{}",
            self.x.start, self.x.end, self.y.start, self.y.end
        )
    }
}
