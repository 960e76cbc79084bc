// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rasterizer contract.
//!
//! A [`LazyFont`](crate::LazyFont) never touches font files itself; it drives
//! a [`FontRasterizer`] that has a face loaded at the requested pixel size.
//! The trait is the seam between atlas bookkeeping (this crate) and the
//! rasterization engine (the embedder's choice — the `swash` feature ships
//! one such backend).

use alloc::vec::Vec;

use crate::pixmap::Rgba8;

/// Face-level metrics, in scaled pixel units.
///
/// Reported once per face/size combination. `descender` follows the usual
/// convention of being negative below the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceMetrics {
    /// Distance from baseline to the top of the face, positive upward.
    pub ascender: i32,
    /// Distance from baseline to the bottom of the face, typically negative.
    pub descender: i32,
    /// Distance between consecutive baselines.
    pub height: i32,
    /// Advance width of the space character.
    ///
    /// Used to synthesize a space glyph when the face has none.
    pub space_advance: i32,
}

/// Per-glyph metrics as reported by the rasterizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Horizontal advance to the next glyph origin.
    pub advance: i32,
    /// Width of the glyph bitmap in pixels.
    pub width: u16,
    /// Height of the glyph bitmap in pixels.
    pub height: u16,
    /// Offset from the origin to the left edge of the bitmap.
    pub bearing_x: i16,
    /// Offset from the origin to the top edge of the bitmap.
    pub bearing_y: i16,
}

/// Alpha coverage mask produced by rasterizing one glyph.
///
/// One byte per pixel in row-major order, `0` fully transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageMask {
    width: u16,
    height: u16,
    data: Vec<u8>,
}

impl CoverageMask {
    /// Creates a mask from raw coverage bytes.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `width * height`.
    pub fn new(width: u16, height: u16, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            usize::from(width) * usize::from(height),
            "coverage data length must be width * height"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw coverage bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the mask covers zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Converts coverage to atlas texels: white tint, coverage as straight
    /// (non-premultiplied) alpha.
    pub(crate) fn to_texels(&self) -> Vec<Rgba8> {
        self.data.iter().map(|&a| Rgba8::from_coverage(a)).collect()
    }
}

/// A rasterized glyph: metrics plus its coverage mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterizedGlyph {
    /// Metrics describing the bitmap and its advance.
    pub metrics: GlyphMetrics,
    /// The alpha coverage of the bitmap.
    pub coverage: CoverageMask,
}

/// A rasterization engine bound to a loaded font face.
///
/// Implementations must already have the face loaded at the pixel size the
/// owning [`LazyFont`](crate::LazyFont) was configured with; enforcing that
/// pairing is the constructor caller's responsibility.
pub trait FontRasterizer {
    /// Face-level metrics for the loaded face at its current size.
    fn face_metrics(&mut self) -> FaceMetrics;

    /// Loads the metrics of a single character without rasterizing it.
    ///
    /// Returns `None` when the face has no glyph for `ch`. Used for metric
    /// probing and for the synthetic space glyph.
    fn glyph_metrics(&mut self, ch: char) -> Option<GlyphMetrics>;

    /// Rasterizes a single character at the given pixel size.
    ///
    /// Returns `None` when the face cannot produce a bitmap for `ch`; the
    /// caller treats that as an absent glyph, never as an error.
    fn rasterize(&mut self, ch: char, pixel_size: u32, hinted: bool) -> Option<RasterizedGlyph>;
}
