// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ready-made rasterizer backed by the `swash` scaler.

use alloc::vec::Vec;

use swash::scale::image::{Content, Image};
use swash::scale::{Render, ScaleContext, Source};
use swash::{CacheKey, FontRef, GlyphId};

use crate::raster::{CoverageMask, FaceMetrics, FontRasterizer, GlyphMetrics, RasterizedGlyph};

/// A [`FontRasterizer`] over an in-memory font file, scaled with `swash`.
///
/// Owns the font bytes and a scale context; glyph outlines are rendered to
/// alpha masks. Color sources are flattened to their alpha channel, since
/// the atlas stores white-tinted coverage.
pub struct SwashRasterizer {
    data: Vec<u8>,
    offset: u32,
    key: CacheKey,
    context: ScaleContext,
    size: f32,
}

impl SwashRasterizer {
    /// Wraps a font file already loaded into memory.
    ///
    /// `index` selects a face within a collection (0 for single-face files).
    /// Returns `None` when the bytes do not parse as a font.
    pub fn from_bytes(data: Vec<u8>, index: usize, size: f32) -> Option<Self> {
        let font = FontRef::from_index(&data, index)?;
        let (offset, key) = (font.offset, font.key);
        Some(Self {
            data,
            offset,
            key,
            context: ScaleContext::new(),
            size,
        })
    }

    /// The pixel size the face is scaled to.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    fn font(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn render_glyph(&mut self, glyph_id: GlyphId, size: f32, hinted: bool) -> Option<Image> {
        let font = FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        };
        let mut scaler = self.context.builder(font).size(size).hint(hinted).build();
        Render::new(&[Source::Outline]).render(&mut scaler, glyph_id)
    }
}

impl FontRasterizer for SwashRasterizer {
    fn face_metrics(&mut self) -> FaceMetrics {
        let font = self.font();
        let metrics = font.metrics(&[]).scale(self.size);
        let space = font.charmap().map(' ');
        let space_advance = font.glyph_metrics(&[]).scale(self.size).advance_width(space);
        FaceMetrics {
            ascender: px(metrics.ascent),
            descender: px(-metrics.descent),
            height: px(metrics.ascent + metrics.descent + metrics.leading),
            space_advance: px(space_advance),
        }
    }

    fn glyph_metrics(&mut self, ch: char) -> Option<GlyphMetrics> {
        let glyph_id = self.font().charmap().map(ch);
        if glyph_id == 0 {
            return None;
        }
        let advance = self.font().glyph_metrics(&[]).scale(self.size).advance_width(glyph_id);
        let image = self.render_glyph(glyph_id, self.size, false)?;
        Some(metrics_from_image(&image, px(advance)))
    }

    fn rasterize(&mut self, ch: char, pixel_size: u32, hinted: bool) -> Option<RasterizedGlyph> {
        let glyph_id = self.font().charmap().map(ch);
        if glyph_id == 0 {
            return None;
        }
        let size = pixel_size as f32;
        let advance = self.font().glyph_metrics(&[]).scale(size).advance_width(glyph_id);
        let image = self.render_glyph(glyph_id, size, hinted)?;
        let metrics = metrics_from_image(&image, px(advance));

        let coverage = match image.content {
            Content::Mask => image.data,
            // Keep only the alpha channel of color sources.
            Content::Color => image.data.iter().skip(3).step_by(4).copied().collect(),
            Content::SubpixelMask => return None,
        };
        Some(RasterizedGlyph {
            metrics,
            coverage: CoverageMask::new(metrics.width, metrics.height, coverage),
        })
    }
}

impl core::fmt::Debug for SwashRasterizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwashRasterizer")
            .field("size", &self.size)
            .field("data_len", &self.data.len())
            .finish_non_exhaustive()
    }
}

fn metrics_from_image(image: &Image, advance: i32) -> GlyphMetrics {
    GlyphMetrics {
        advance,
        width: u16::try_from(image.placement.width).unwrap_or(u16::MAX),
        height: u16::try_from(image.placement.height).unwrap_or(u16::MAX),
        bearing_x: clamp_i16(image.placement.left),
        bearing_y: clamp_i16(image.placement.top),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded pixel metrics fit in i32 at any realistic font size"
)]
fn px(value: f32) -> i32 {
    value.round() as i32
}

fn clamp_i16(value: i32) -> i16 {
    i16::try_from(value).unwrap_or_else(|_| if value < 0 { i16::MIN } else { i16::MAX })
}
