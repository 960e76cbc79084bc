// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face-wide vertical metrics, measured once at construction.

use crate::error::{Error, ProbeKind};
use crate::font::LazyFontConfig;
use crate::glyph::Glyph;
use crate::raster::FontRasterizer;

/// Vertical metrics a layout consumer needs to place lines of text.
///
/// Computed by [`LazyFont`](crate::LazyFont) during construction and
/// read-only afterward. All values are in scaled pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the cap line to the top of the face.
    ///
    /// Derived as face ascender minus cap height; negated when
    /// [`flipped`](Self::flipped) is set.
    pub ascent: i32,

    /// Distance from baseline to the bottom of the face, typically negative.
    pub descent: i32,

    /// Distance between consecutive baselines.
    pub line_height: i32,

    /// Height of the lowercase probe glyph.
    pub x_height: i32,

    /// Height of the uppercase probe glyph.
    pub cap_height: i32,

    /// Baseline-to-baseline step when walking down a block of text.
    ///
    /// `-line_height`, negated when [`flipped`](Self::flipped) is set, so a
    /// consumer can add it to a y position regardless of axis direction.
    pub down: i32,

    /// Whether the y axis grows downward.
    pub flipped: bool,
}

/// Measures the face and builds the synthetic space glyph.
///
/// Fails with [`ErrorKind::MissingProbeGlyph`](crate::ErrorKind::MissingProbeGlyph)
/// when a probe list has no character the face can load; in that case nothing
/// partially initialized is observable.
pub(crate) fn initialize<R: FontRasterizer>(
    rasterizer: &mut R,
    config: &LazyFontConfig,
) -> Result<(FontMetrics, Glyph), Error> {
    let face = rasterizer.face_metrics();

    let space = space_glyph(rasterizer, face.space_advance, config.pad_right);

    let x_height = probe_height(rasterizer, &config.x_probes)
        .ok_or_else(|| Error::missing_probe(ProbeKind::XHeight))?;
    let cap_height = probe_height(rasterizer, &config.cap_probes)
        .ok_or_else(|| Error::missing_probe(ProbeKind::CapHeight))?;

    let mut ascent = face.ascender - cap_height;
    let mut down = -face.height;
    if config.flip {
        ascent = -ascent;
        down = -down;
    }

    let metrics = FontMetrics {
        ascent,
        descent: face.descender,
        line_height: face.height,
        x_height,
        cap_height,
        down,
        flipped: config.flip,
    };
    Ok((metrics, space))
}

/// Builds the space glyph, synthesizing one when the face has no entry.
///
/// A zero-width space (reported or synthesized) gets `advance + pad_right`
/// as its width so line-width calculations never special-case spaces.
fn space_glyph<R: FontRasterizer>(rasterizer: &mut R, space_advance: i32, pad_right: i32) -> Glyph {
    let mut space = match rasterizer.glyph_metrics(' ') {
        Some(m) => Glyph {
            ch: ' ',
            advance: m.advance,
            width: m.width,
            height: m.height,
            bearing_x: m.bearing_x,
            bearing_y: m.bearing_y,
            page: 0,
            region: None,
        },
        None => Glyph {
            ch: ' ',
            advance: space_advance,
            width: 0,
            height: 0,
            bearing_x: 0,
            bearing_y: 0,
            page: 0,
            region: None,
        },
    };
    if space.width == 0 {
        let padded = space.advance + pad_right;
        space.width = u16::try_from(padded.max(0)).unwrap_or(u16::MAX);
    }
    space
}

/// First probe character the face can load yields the metric.
///
/// The accumulator stays `None` until a probe loads, so a legitimately tiny
/// measurement is never mistaken for "not found".
fn probe_height<R: FontRasterizer>(rasterizer: &mut R, probes: &[char]) -> Option<i32> {
    probes
        .iter()
        .find_map(|&ch| rasterizer.glyph_metrics(ch).map(|m| i32::from(m.height)))
}
