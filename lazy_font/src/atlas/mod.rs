// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shelf-packed glyph atlas.
//!
//! This module provides the atlas side of lazy font generation:
//! - Packs glyph bitmaps left-to-right into rows of a single shared pixmap
//! - Mirrors every placement to an [`AtlasTexture`] as an incremental
//!   sub-region upload
//! - Caches placed glyphs so repeated lookups are map hits
//! - Enforces capacity: a bitmap that cannot fit fails loudly instead of
//!   writing past the packed area

pub(crate) mod cache;
mod region;
mod texture;

pub use cache::GlyphAtlas;
pub use region::AtlasRegion;
pub use texture::{AtlasTexture, CpuTexture};

pub(crate) use region::ShelfCursor;
