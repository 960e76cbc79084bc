// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RGBA pixel storage for the atlas.

use alloc::vec;
use alloc::vec::Vec;

use bytemuck::{Pod, Zeroable};

/// A single RGBA texel with straight (non-premultiplied) alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, the initial atlas fill.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// White tinted by a coverage value.
    #[inline]
    pub const fn from_coverage(alpha: u8) -> Self {
        Self {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
            a: alpha,
        }
    }
}

/// A fixed-size RGBA pixel surface.
///
/// This is the CPU side of the atlas: every placed glyph is blitted here,
/// and the same texels are handed to the
/// [`AtlasTexture`](crate::AtlasTexture) for the live GPU copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u16,
    height: u16,
    data: Vec<Rgba8>,
}

impl Pixmap {
    /// Allocates a surface filled with [`Rgba8::TRANSPARENT`].
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            data: vec![Rgba8::TRANSPARENT; usize::from(width) * usize::from(height)],
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

    /// All texels in row-major order.
    #[inline]
    pub fn data(&self) -> &[Rgba8] {
        &self.data
    }

    /// The texel data viewed as raw bytes (RGBA order).
    #[inline]
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// The texel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the surface.
    pub fn texel(&self, x: u16, y: u16) -> Rgba8 {
        assert!(
            x < self.width && y < self.height,
            "texel position out of bounds"
        );
        self.data[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    /// Copies a `width` x `height` tile of texels to position `(x, y)`.
    ///
    /// The caller guarantees the destination rectangle lies within the
    /// surface; the packer's capacity checks uphold this.
    pub(crate) fn blit(&mut self, x: u16, y: u16, width: u16, height: u16, texels: &[Rgba8]) {
        debug_assert_eq!(
            texels.len(),
            usize::from(width) * usize::from(height),
            "tile length must match its dimensions"
        );
        let stride = usize::from(self.width);
        let w = usize::from(width);
        for row in 0..usize::from(height) {
            let src = &texels[row * w..(row + 1) * w];
            let dst_start = (usize::from(y) + row) * stride + usize::from(x);
            self.data[dst_start..dst_start + w].copy_from_slice(src);
        }
    }

    /// Drops the pixel storage, leaving a zero-size surface.
    pub(crate) fn release(&mut self) {
        self.width = 0;
        self.height = 0;
        self.data = Vec::new();
    }
}

/// Saves the pixmap to a PNG file at the specified path.
#[cfg(feature = "png")]
pub(crate) fn save_pixmap_to_png(pixmap: &Pixmap, path: &std::path::Path) -> std::io::Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, u32::from(pixmap.width()), u32::from(pixmap.height()));
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    writer
        .write_image_data(pixmap.data_as_u8_slice())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_tint_is_white_with_straight_alpha() {
        let texel = Rgba8::from_coverage(0x80);
        assert_eq!(
            texel,
            Rgba8 {
                r: 0xFF,
                g: 0xFF,
                b: 0xFF,
                a: 0x80
            }
        );
    }

    #[test]
    fn blit_writes_only_the_target_rectangle() {
        let mut pixmap = Pixmap::new(4, 4);
        let tile = vec![Rgba8::from_coverage(0xFF); 4];
        pixmap.blit(1, 2, 2, 2, &tile);

        assert_eq!(pixmap.texel(1, 2), Rgba8::from_coverage(0xFF));
        assert_eq!(pixmap.texel(2, 3), Rgba8::from_coverage(0xFF));
        assert_eq!(pixmap.texel(0, 0), Rgba8::TRANSPARENT);
        assert_eq!(pixmap.texel(3, 2), Rgba8::TRANSPARENT);
        assert_eq!(pixmap.texel(1, 1), Rgba8::TRANSPARENT);
    }

    #[test]
    fn byte_view_is_four_bytes_per_texel() {
        let pixmap = Pixmap::new(3, 2);
        assert_eq!(pixmap.data_as_u8_slice().len(), 3 * 2 * 4);
    }
}
