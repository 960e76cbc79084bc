// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lazily populated font: rasterizer, metrics, and atlas in one place.

use smallvec::SmallVec;

use crate::atlas::{AtlasRegion, AtlasTexture, CpuTexture, GlyphAtlas};
use crate::error::Error;
use crate::glyph::Glyph;
use crate::metrics::{self, FontMetrics};
use crate::pixmap::Pixmap;
use crate::raster::FontRasterizer;

/// Default lowercase probes for measuring x-height.
const X_PROBES: &[char] = &[
    'x', 'e', 'a', 'o', 'n', 's', 'r', 'c', 'u', 'm', 'v', 'w', 'z',
];

/// Default uppercase probes for measuring cap height.
const CAP_PROBES: &[char] = &[
    'M', 'N', 'B', 'D', 'C', 'E', 'F', 'K', 'A', 'G', 'H', 'I', 'J', 'L', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Construction options for [`LazyFont`].
#[derive(Clone, Debug)]
pub struct LazyFontConfig {
    /// Pixel size passed to the rasterizer for every generated glyph.
    ///
    /// The rasterizer must already have its face loaded at this size.
    pub font_size: u32,

    /// Whether the consumer's y axis grows downward.
    ///
    /// Negates the derived ascent and down metrics.
    pub flip: bool,

    /// Atlas width in pixels.
    pub atlas_width: u16,

    /// Atlas height in pixels.
    pub atlas_height: u16,

    /// Padding added to a zero-width space glyph's width, on top of its
    /// advance.
    pub pad_right: i32,

    /// Characters tried in order to measure x-height.
    pub x_probes: SmallVec<[char; 16]>,

    /// Characters tried in order to measure cap height.
    pub cap_probes: SmallVec<[char; 26]>,
}

impl LazyFontConfig {
    /// Options for the given pixel size, defaults everywhere else.
    pub fn new(font_size: u32) -> Self {
        Self {
            font_size,
            flip: false,
            atlas_width: 4096,
            atlas_height: 4096,
            pad_right: 0,
            x_probes: SmallVec::from_slice(X_PROBES),
            cap_probes: SmallVec::from_slice(CAP_PROBES),
        }
    }
}

impl Default for LazyFontConfig {
    fn default() -> Self {
        Self::new(16)
    }
}

/// A font whose glyphs are rasterized and packed on first use.
///
/// Construction measures the face (see [`FontMetrics`]) and seeds the cache
/// with a usable space glyph; afterwards [`glyph`](Self::glyph) fills the
/// atlas one character at a time as the consumer requests them.
///
/// Not internally synchronized: every lookup may mutate the atlas, so a
/// `LazyFont` must be driven from one thread (or behind one lock), which the
/// `&mut self` receivers already enforce for a single instance.
pub struct LazyFont<R, T = CpuTexture> {
    rasterizer: R,
    font_size: u32,
    metrics: FontMetrics,
    atlas: GlyphAtlas<T>,
    disposed: bool,
}

impl<R: FontRasterizer> LazyFont<R> {
    /// Builds a font with no GPU texture behind the atlas.
    pub fn new(rasterizer: R, config: &LazyFontConfig) -> Result<Self, Error> {
        Self::with_texture(rasterizer, CpuTexture, config)
    }
}

impl<R: FontRasterizer, T: AtlasTexture> LazyFont<R, T> {
    /// Builds a font whose atlas placements are mirrored to `texture`.
    ///
    /// Fails with [`ErrorKind::MissingProbeGlyph`](crate::ErrorKind::MissingProbeGlyph)
    /// when the face supports no character from one of the probe lists.
    pub fn with_texture(
        mut rasterizer: R,
        texture: T,
        config: &LazyFontConfig,
    ) -> Result<Self, Error> {
        let (metrics, space) = metrics::initialize(&mut rasterizer, config)?;
        let mut atlas = GlyphAtlas::new(config.atlas_width, config.atlas_height, texture);
        atlas.seed(space);
        Ok(Self {
            rasterizer,
            font_size: config.font_size,
            metrics,
            atlas,
            disposed: false,
        })
    }

    /// Returns the glyph for `ch`, rasterizing and placing it on first use.
    ///
    /// Repeated calls for the same character return the identical cached
    /// glyph without touching the rasterizer or the atlas. `Ok(None)` means
    /// the face has no glyph for `ch` (or `ch` is the `'\0'` no-glyph
    /// sentinel); the caller substitutes a fallback or skips the character.
    pub fn glyph(&mut self, ch: char) -> Result<Option<&Glyph>, Error> {
        if self.disposed {
            return Err(Error::disposed());
        }
        if self.atlas.contains(ch) {
            return Ok(self.atlas.get(ch));
        }
        self.atlas.note_miss();
        if ch == '\0' {
            return Ok(None);
        }
        let Some(rasterized) = self.rasterizer.rasterize(ch, self.font_size, false) else {
            return Ok(None);
        };
        self.atlas.insert(ch, rasterized).map(Some)
    }

    /// Rasterizes every character of `text` that is not yet cached.
    ///
    /// Characters the face does not support are skipped; capacity and
    /// disposal errors propagate.
    pub fn precache(&mut self, text: &str) -> Result<(), Error> {
        for ch in text.chars() {
            self.glyph(ch)?;
        }
        Ok(())
    }

    /// Releases the atlas pixmap and texture.
    ///
    /// Terminal and idempotent: every later [`glyph`](Self::glyph) or
    /// [`precache`](Self::precache) call fails with
    /// [`ErrorKind::Disposed`](crate::ErrorKind::Disposed).
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.atlas.dispose();
    }
}

impl<R, T> LazyFont<R, T> {
    /// The face-wide vertical metrics.
    #[inline]
    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// The pixel size glyphs are generated at.
    #[inline]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// The atlas bookkeeping: cache size, pixmap, statistics.
    #[inline]
    pub fn atlas(&self) -> &GlyphAtlas<T> {
        &self.atlas
    }

    /// Every placed region, in placement order.
    #[inline]
    pub fn regions(&self) -> &[AtlasRegion] {
        self.atlas.regions()
    }

    /// The CPU copy of the atlas surface.
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        self.atlas.pixmap()
    }

    /// Clears the atlas hit/miss statistics.
    pub fn clear_stats(&mut self) {
        self.atlas.clear_stats();
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Dumps the atlas pixmap to a PNG file, for inspecting packing behavior.
    #[cfg(feature = "png")]
    pub fn write_atlas_png(&self, path: &std::path::Path) -> std::io::Result<()> {
        crate::pixmap::save_pixmap_to_png(self.atlas.pixmap(), path)
    }
}

impl<R, T> core::fmt::Debug for LazyFont<R, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyFont")
            .field("font_size", &self.font_size)
            .field("metrics", &self.metrics)
            .field("atlas", &self.atlas)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
