// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph cache with shelf-packed atlas storage.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use hashbrown::HashMap;
use log::{debug, warn};

use crate::atlas::texture::AtlasTexture;
use crate::atlas::{AtlasRegion, ShelfCursor};
use crate::error::{Error, PlacementInfo};
use crate::glyph::Glyph;
use crate::pixmap::Pixmap;
use crate::raster::RasterizedGlyph;

/// Glyph storage shared by every lookup: the cache map, the packed pixmap,
/// its texture mirror, and the packing cursor.
///
/// Owned exclusively by one [`LazyFont`](crate::LazyFont); all mutation goes
/// through it. Grows monotonically — glyphs are never evicted individually,
/// only dropped wholesale on disposal.
pub struct GlyphAtlas<T> {
    /// Cached glyphs keyed by character.
    glyphs: HashMap<char, Glyph>,
    /// Where the next bitmap goes.
    cursor: ShelfCursor,
    /// CPU copy of the atlas.
    pixmap: Pixmap,
    /// Live texture mirror.
    texture: T,
    /// Every placed region, in placement order, for renderers that iterate
    /// the atlas.
    regions: Vec<AtlasRegion>,
    /// Next value of the vestigial per-glyph page counter.
    next_page: u32,
    /// Number of cache hits since last `clear_stats()`.
    cache_hits: u64,
    /// Number of cache misses since last `clear_stats()`.
    cache_misses: u64,
}

impl<T: AtlasTexture> GlyphAtlas<T> {
    pub(crate) fn new(width: u16, height: u16, texture: T) -> Self {
        Self {
            glyphs: HashMap::new(),
            cursor: ShelfCursor::new(),
            pixmap: Pixmap::new(width, height),
            texture,
            regions: Vec::new(),
            next_page: 1,
            cache_hits: 0,
            cache_misses: 0,
        }
    }

    /// Whether a glyph for `ch` is cached.
    pub(crate) fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Looks up a cached glyph, updating the hit/miss statistics.
    pub(crate) fn get(&mut self, ch: char) -> Option<&Glyph> {
        match self.glyphs.get(&ch) {
            Some(glyph) => {
                self.cache_hits += 1;
                Some(glyph)
            }
            None => {
                self.cache_misses += 1;
                None
            }
        }
    }

    /// Records a lookup that bypassed [`get`](Self::get) and found nothing.
    pub(crate) fn note_miss(&mut self) {
        self.cache_misses += 1;
    }

    /// Seeds the cache with a glyph that has no pixel data (the synthetic
    /// space). No atlas space is consumed.
    pub(crate) fn seed(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.ch, glyph);
    }

    /// Places a rasterized glyph: reserves atlas space, blits the pixels,
    /// mirrors them to the texture, and caches the result.
    ///
    /// Fails with [`ErrorKind::AtlasFull`](crate::ErrorKind::AtlasFull) when
    /// the bitmap cannot fit; the cache, cursor, and pixmap are untouched in
    /// that case.
    pub(crate) fn insert(&mut self, ch: char, rasterized: RasterizedGlyph) -> Result<&Glyph, Error> {
        let metrics = rasterized.metrics;
        let (width, height) = (rasterized.coverage.width(), rasterized.coverage.height());

        let Some((x, y)) = self
            .cursor
            .reserve(width, height, self.pixmap.width(), self.pixmap.height())
        else {
            warn!("atlas full: cannot place {width}x{height} glyph for {ch:?}");
            return Err(Error::atlas_full(PlacementInfo {
                width,
                height,
                cursor_x: self.cursor.x,
                cursor_y: self.cursor.y,
                atlas_width: self.pixmap.width(),
                atlas_height: self.pixmap.height(),
            }));
        };

        let region = AtlasRegion {
            x,
            y,
            width,
            height,
        };
        let texels = rasterized.coverage.to_texels();
        self.pixmap.blit(x, y, width, height, &texels);
        self.texture.upload(region, &texels);
        self.regions.push(region);

        let page = self.next_page;
        self.next_page += 1;
        debug!("placed {ch:?} at ({x}, {y}) {width}x{height}");

        let glyph = Glyph {
            ch,
            advance: metrics.advance,
            width,
            height,
            bearing_x: metrics.bearing_x,
            bearing_y: metrics.bearing_y,
            page,
            region: Some(region),
        };
        let cached = self.glyphs.entry(ch).or_insert(glyph);
        Ok(&*cached)
    }

    /// Releases the pixmap and the texture and clears all bookkeeping.
    pub(crate) fn dispose(&mut self) {
        self.texture.dispose();
        self.pixmap.release();
        self.glyphs.clear();
        self.regions.clear();
        self.cursor = ShelfCursor::new();
    }
}

impl<T> GlyphAtlas<T> {
    /// The number of cached glyphs.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the cache is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Every placed region, in placement order.
    #[inline]
    pub fn regions(&self) -> &[AtlasRegion] {
        &self.regions
    }

    /// The CPU copy of the atlas.
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// The number of cache hits since last [`clear_stats`](Self::clear_stats).
    #[inline]
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// The number of cache misses since last [`clear_stats`](Self::clear_stats).
    #[inline]
    pub fn cache_misses(&self) -> u64 {
        self.cache_misses
    }

    /// Clears hit/miss statistics without touching the cache itself.
    pub fn clear_stats(&mut self) {
        self.cache_hits = 0;
        self.cache_misses = 0;
    }
}

impl<T> Debug for GlyphAtlas<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphAtlas")
            .field("glyphs", &self.glyphs.len())
            .field("regions", &self.regions.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
