// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mock rasterizer and recording texture shared by the test modules.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use lazy_font::{
    AtlasRegion, AtlasTexture, CoverageMask, FaceMetrics, FontRasterizer, GlyphMetrics,
    LazyFontConfig, RasterizedGlyph, Rgba8,
};

/// Call counters observable after the rasterizer has been moved into a font.
#[derive(Debug, Default)]
pub struct RasterizerCalls {
    pub glyph_metrics: Cell<usize>,
    pub rasterize: Cell<usize>,
}

#[derive(Clone, Copy, Debug)]
struct MockGlyph {
    metrics: GlyphMetrics,
    coverage: u8,
}

/// A scriptable rasterizer: a face metrics block plus a set of characters it
/// can produce, each with fixed dimensions and a solid coverage value.
#[derive(Debug)]
pub struct MockRasterizer {
    face: FaceMetrics,
    glyphs: HashMap<char, MockGlyph>,
    calls: Rc<RasterizerCalls>,
}

impl MockRasterizer {
    /// A face with ascender 20, descender -5, line height 30, space advance 8.
    pub fn new() -> Self {
        Self::with_face(FaceMetrics {
            ascender: 20,
            descender: -5,
            height: 30,
            space_advance: 8,
        })
    }

    pub fn with_face(face: FaceMetrics) -> Self {
        Self {
            face,
            glyphs: HashMap::new(),
            calls: Rc::default(),
        }
    }

    /// Adds a character the face supports, with solid coverage.
    pub fn glyph(self, ch: char, width: u16, height: u16) -> Self {
        self.glyph_with_coverage(ch, width, height, 0xFF)
    }

    pub fn glyph_with_coverage(mut self, ch: char, width: u16, height: u16, coverage: u8) -> Self {
        self.glyphs.insert(
            ch,
            MockGlyph {
                metrics: GlyphMetrics {
                    advance: i32::from(width) + 1,
                    width,
                    height,
                    bearing_x: 0,
                    bearing_y: 0,
                },
                coverage,
            },
        );
        self
    }

    /// Adds the probe characters construction needs: 'x' (height 10) and
    /// 'M' (height 14).
    pub fn probe_defaults(self) -> Self {
        self.glyph('x', 6, 10).glyph('M', 8, 14)
    }

    /// A handle to the call counters, kept alive across the move into a font.
    pub fn calls(&self) -> Rc<RasterizerCalls> {
        Rc::clone(&self.calls)
    }
}

impl Default for MockRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRasterizer for MockRasterizer {
    fn face_metrics(&mut self) -> FaceMetrics {
        self.face
    }

    fn glyph_metrics(&mut self, ch: char) -> Option<GlyphMetrics> {
        self.calls.glyph_metrics.set(self.calls.glyph_metrics.get() + 1);
        self.glyphs.get(&ch).map(|g| g.metrics)
    }

    fn rasterize(&mut self, ch: char, _pixel_size: u32, _hinted: bool) -> Option<RasterizedGlyph> {
        self.calls.rasterize.set(self.calls.rasterize.get() + 1);
        let glyph = self.glyphs.get(&ch)?;
        let len = usize::from(glyph.metrics.width) * usize::from(glyph.metrics.height);
        Some(RasterizedGlyph {
            metrics: glyph.metrics,
            coverage: CoverageMask::new(
                glyph.metrics.width,
                glyph.metrics.height,
                vec![glyph.coverage; len],
            ),
        })
    }
}

/// An [`AtlasTexture`] that records every upload and disposal.
#[derive(Clone, Debug, Default)]
pub struct RecordingTexture {
    pub uploads: Rc<RefCell<Vec<AtlasRegion>>>,
    pub dispose_count: Rc<Cell<usize>>,
}

impl AtlasTexture for RecordingTexture {
    fn upload(&mut self, region: AtlasRegion, texels: &[Rgba8]) {
        assert_eq!(
            texels.len(),
            usize::from(region.width) * usize::from(region.height),
            "upload tile must match its region"
        );
        self.uploads.borrow_mut().push(region);
    }

    fn dispose(&mut self) {
        self.dispose_count.set(self.dispose_count.get() + 1);
    }
}

/// A config with a small atlas so packing edges are easy to reach.
pub fn config(atlas_width: u16, atlas_height: u16) -> LazyFontConfig {
    LazyFontConfig {
        atlas_width,
        atlas_height,
        ..LazyFontConfig::new(16)
    }
}
