// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On-demand glyph rasterization into a shared texture atlas.
//!
//! Instead of pre-generating a complete bitmap font for every size and
//! character set an application uses, [`LazyFont`] rasterizes each glyph the
//! first time it is requested, shelf-packs the bitmap into one large RGBA
//! pixmap, and mirrors the placement to a texture backend so a renderer can
//! draw from the live atlas. Face-wide vertical metrics (ascent, descent,
//! line height, x-height, cap height) are measured once at construction and
//! exposed through [`FontMetrics`] for a text-layout consumer.
//!
//! The font rasterization engine itself is a collaborator, not part of this
//! crate: anything implementing [`FontRasterizer`] can drive a `LazyFont`.
//! The same goes for the GPU side — implement [`AtlasTexture`] to receive
//! incremental sub-region uploads, or use [`CpuTexture`] when the atlas
//! pixmap itself is the surface being sampled.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library. Without it the
//!   crate is `no_std` + `alloc`. Required by the optional backends below.
//! - `png`: Enables [`LazyFont::write_atlas_png`] for dumping the atlas to a
//!   PNG file when debugging packing behavior.
//! - `swash`: Enables [`SwashRasterizer`], a ready-made [`FontRasterizer`]
//!   backed by the `swash` scaler.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod atlas;
mod error;
mod font;
mod glyph;
mod metrics;
mod pixmap;
mod raster;

#[cfg(feature = "swash")]
mod swash;

pub use atlas::{AtlasRegion, AtlasTexture, CpuTexture, GlyphAtlas};
pub use error::{Error, ErrorKind, PlacementInfo, ProbeKind};
pub use font::{LazyFont, LazyFontConfig};
pub use glyph::Glyph;
pub use metrics::FontMetrics;
pub use pixmap::{Pixmap, Rgba8};
pub use raster::{CoverageMask, FaceMetrics, FontRasterizer, GlyphMetrics, RasterizedGlyph};

#[cfg(feature = "swash")]
pub use crate::swash::SwashRasterizer;
