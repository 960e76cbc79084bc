// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live texture behind the atlas pixmap.

use crate::atlas::AtlasRegion;
use crate::pixmap::Rgba8;

/// The GPU-side counterpart of the atlas pixmap.
///
/// The packer keeps the texture current by pushing each placed glyph as a
/// sub-region upload rather than re-uploading the whole surface. Upload is
/// assumed synchronous relative to the embedder's command stream: a region
/// is safe to sample from the next draw call onward.
pub trait AtlasTexture {
    /// Uploads one glyph's texels into `region` of the texture.
    ///
    /// `texels` is a tight `region.width` x `region.height` tile in row-major
    /// order.
    fn upload(&mut self, region: AtlasRegion, texels: &[Rgba8]);

    /// Releases the texture. Called exactly once, on disposal.
    fn dispose(&mut self);
}

/// Texture stand-in for atlases without a GPU counterpart.
///
/// Uploads are dropped; the atlas pixmap itself is the live surface. Useful
/// for CPU rendering and for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuTexture;

impl AtlasTexture for CpuTexture {
    fn upload(&mut self, _region: AtlasRegion, _texels: &[Rgba8]) {}

    fn dispose(&mut self) {}
}
