// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for atlas construction and glyph placement.

/// Error produced by [`LazyFont`](crate::LazyFont) construction or glyph
/// placement.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information: the
/// probe list that failed for initialization errors, or the attempted
/// placement for capacity errors.
///
/// A character the rasterizer cannot produce is *not* an error — lookups for
/// such characters return `Ok(None)` and the caller picks a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Which probe list came up empty, for initialization failures.
    probe: Option<ProbeKind>,

    /// The rejected placement, for capacity failures.
    placement: Option<PlacementInfo>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The probe list that had no usable character, if this is an
    /// initialization failure.
    pub fn probe(&self) -> Option<ProbeKind> {
        self.probe
    }

    /// Details of the rejected placement, if this is a capacity failure.
    pub fn placement(&self) -> Option<PlacementInfo> {
        self.placement
    }

    pub(crate) fn missing_probe(probe: ProbeKind) -> Self {
        Self {
            kind: ErrorKind::MissingProbeGlyph,
            probe: Some(probe),
            placement: None,
        }
    }

    pub(crate) fn atlas_full(placement: PlacementInfo) -> Self {
        Self {
            kind: ErrorKind::AtlasFull,
            probe: None,
            placement: Some(placement),
        }
    }

    pub(crate) fn disposed() -> Self {
        Self {
            kind: ErrorKind::Disposed,
            probe: None,
            placement: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::MissingProbeGlyph => {
                let which = match self.probe {
                    Some(ProbeKind::XHeight) => "x-height",
                    Some(ProbeKind::CapHeight) => "cap-height",
                    None => "metric",
                };
                write!(f, "no usable {which} probe character in font face")
            }
            ErrorKind::AtlasFull => {
                if let Some(p) = self.placement {
                    write!(
                        f,
                        "atlas full: {}x{} glyph does not fit at cursor ({}, {}) in {}x{} atlas",
                        p.width, p.height, p.cursor_x, p.cursor_y, p.atlas_width, p.atlas_height
                    )
                } else {
                    f.write_str("atlas full")
                }
            }
            ErrorKind::Disposed => f.write_str("font atlas used after disposal"),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No character from a metric probe list was available in the face.
    ///
    /// Fatal at construction: without x-height and cap height the derived
    /// layout metrics would be meaningless.
    MissingProbeGlyph,

    /// A glyph bitmap did not fit into the remaining atlas space.
    AtlasFull,

    /// An operation was attempted after [`LazyFont::dispose`](crate::LazyFont::dispose).
    Disposed,
}

/// Identifies which metric probe list failed during initialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProbeKind {
    /// The lowercase probe list used to measure x-height.
    XHeight,

    /// The uppercase probe list used to measure cap height.
    CapHeight,
}

/// Details about a glyph placement rejected for lack of atlas space.
///
/// Attached to [`Error`] when the kind is [`ErrorKind::AtlasFull`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacementInfo {
    /// Width of the rejected glyph bitmap in pixels.
    pub width: u16,

    /// Height of the rejected glyph bitmap in pixels.
    pub height: u16,

    /// Packing cursor x position at the time of the failure.
    pub cursor_x: u16,

    /// Packing cursor y position at the time of the failure.
    pub cursor_y: u16,

    /// Total atlas width in pixels.
    pub atlas_width: u16,

    /// Total atlas height in pixels.
    pub atlas_height: u16,
}
