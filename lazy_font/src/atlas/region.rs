// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas regions and the shelf packing cursor.

/// Location of a glyph bitmap within the atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasRegion {
    /// X position in the atlas (pixels).
    pub x: u16,

    /// Y position in the atlas (pixels).
    pub y: u16,

    /// Width of the glyph bitmap (pixels).
    pub width: u16,

    /// Height of the glyph bitmap (pixels).
    pub height: u16,
}

/// Transient shelf packing state: position of the next placement and the
/// tallest glyph seen in the current row.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ShelfCursor {
    pub(crate) x: u16,
    pub(crate) y: u16,
    pub(crate) row_height: u16,
}

impl ShelfCursor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reserves a `width` x `height` rectangle, wrapping to a new row when
    /// the current one cannot take the glyph.
    ///
    /// A glyph that would reach the right edge wraps rather than sitting
    /// flush, and a glyph that opens a new row seeds that row's height with
    /// its own. Returns the placement position, or `None` when the glyph
    /// exceeds the remaining vertical space (or the atlas width outright);
    /// on `None` the cursor is left untouched.
    pub(crate) fn reserve(
        &mut self,
        width: u16,
        height: u16,
        atlas_width: u16,
        atlas_height: u16,
    ) -> Option<(u16, u16)> {
        if width > atlas_width {
            return None;
        }

        let (mut x, mut y) = (self.x, self.y);
        let mut row_height = self.row_height;
        if u32::from(x) + u32::from(width) >= u32::from(atlas_width) && x != 0 {
            x = 0;
            y = u16::try_from(u32::from(y) + u32::from(row_height)).ok()?;
            row_height = 0;
        }
        if u32::from(y) + u32::from(height) > u32::from(atlas_height) {
            return None;
        }

        let position = (x, y);
        self.x = x.saturating_add(width);
        self.y = y;
        self.row_height = row_height.max(height);
        Some(position)
    }
}
