//! Plain geometry values produced by the resolvers.
//!
//! Nothing here validates or clamps. Zero, negative, and non-finite values
//! flow through untouched; the draw primitive owns rejection.

use num_traits::AsPrimitive;

/// Width × height dimensions in whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Default source dimensions of a drawable source, in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SourceSize {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
}

impl SourceSize {
    /// Create a new source size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert any primitive numeric width/height pair.
    ///
    /// Integer attribute reflections (`u32`) and animated SVG lengths (`f32`)
    /// both go through here.
    pub fn from_dims<T: AsPrimitive<f32>>(width: T, height: T) -> Self {
        Self {
            width: width.as_(),
            height: height.as_(),
        }
    }
}

impl From<Size> for SourceSize {
    fn from(size: Size) -> Self {
        Self::from_dims(size.width, size.height)
    }
}

/// Axis-aligned rectangle in floating-point canvas or image coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DrawRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width; may be zero or negative.
    pub width: f32,
    /// Height; may be zero or negative.
    pub height: f32,
}

impl DrawRect {
    /// Create a new rect.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at `(x, y)` with the given size.
    pub const fn at(x: f32, y: f32, size: SourceSize) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    /// Rect at the origin covering `size`.
    pub const fn from_origin(size: SourceSize) -> Self {
        Self::at(0.0, 0.0, size)
    }

    /// The `(width, height)` of this rect.
    pub const fn size(&self) -> SourceSize {
        SourceSize::new(self.width, self.height)
    }
}
