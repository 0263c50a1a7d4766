//! `drawImage` argument canonicalization.
//!
//! The three call shapes reduce to one [`CanonicalDraw`] via
//! [`DrawImageArgs::canonicalize`], then go to a [`DrawPrimitive`] together
//! with the source's [`OrientationTag`].
//!
//! # Example
//!
//! ```
//! use zendraw::{
//!     Bitmap, CanonicalDraw, CanvasDrawImage, ComputedStyle, DrawPrimitive, DrawRect,
//!     DrawableSource, ImageElement, OrientationTag,
//! };
//!
//! struct Decoded;
//! impl Bitmap for Decoded {
//!     fn width(&self) -> u32 { 100 }
//!     fn height(&self) -> u32 { 50 }
//! }
//!
//! struct Img(Decoded);
//! impl ImageElement for Img {
//!     fn decoded_bitmap(&self) -> Option<&dyn Bitmap> { Some(&self.0) }
//!     fn width(&self) -> u32 { 0 }
//!     fn height(&self) -> u32 { 0 }
//!     fn computed_style(&self) -> Option<&dyn ComputedStyle> { None }
//! }
//!
//! #[derive(Default)]
//! struct Record(Vec<CanonicalDraw>);
//! impl DrawPrimitive for Record {
//!     type Error = core::convert::Infallible;
//!     fn draw_image(
//!         &mut self,
//!         _: DrawableSource<'_>,
//!         call: &CanonicalDraw,
//!         _: OrientationTag,
//!     ) -> Result<(), Self::Error> {
//!         self.0.push(*call);
//!         Ok(())
//!     }
//! }
//!
//! let img = Img(Decoded);
//! let mut ctx = CanvasDrawImage::new(Record::default());
//! ctx.draw_image(DrawableSource::Image(&img), 5.0, 5.0).unwrap();
//!
//! let call = ctx.primitive().0[0];
//! assert_eq!(call.source, DrawRect::new(0.0, 0.0, 100.0, 50.0));
//! assert_eq!(call.destination, DrawRect::new(5.0, 5.0, 100.0, 50.0));
//! ```

use crate::geometry::DrawRect;
use crate::orientation::{OrientationTag, resolve_orientation};
use crate::size::resolve_size;
use crate::source::DrawableSource;

/// Fully specified `drawImage` geometry: `(sx, sy, sw, sh, dx, dy, dw, dh)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CanonicalDraw {
    /// Region of the source image to read.
    pub source: DrawRect,
    /// Region of the canvas to write.
    pub destination: DrawRect,
}

impl CanonicalDraw {
    /// Build from the eight positional values, in call order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        sx: f32,
        sy: f32,
        sw: f32,
        sh: f32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) -> Self {
        Self {
            source: DrawRect::new(sx, sy, sw, sh),
            destination: DrawRect::new(dx, dy, dw, dh),
        }
    }

    /// The eight values in call order.
    pub const fn to_array(&self) -> [f32; 8] {
        let (s, d) = (self.source, self.destination);
        [s.x, s.y, s.width, s.height, d.x, d.y, d.width, d.height]
    }
}

/// Geometry arguments of a `drawImage` call, in one of its three shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawImageArgs {
    /// `drawImage(image, dx, dy)`.
    At { dx: f32, dy: f32 },
    /// `drawImage(image, dx, dy, dw, dh)`.
    Scaled { dx: f32, dy: f32, dw: f32, dh: f32 },
    /// `drawImage(image, sx, sy, sw, sh, dx, dy, dw, dh)`.
    Subrect(CanonicalDraw),
}

impl DrawImageArgs {
    /// Fill in omitted values from `source`.
    ///
    /// The short shapes read the source's default size even when the
    /// destination size is given, so an entity that does work on size
    /// queries sees the same sequence of queries for both. The nine-argument
    /// shape never consults the source.
    pub fn canonicalize(self, source: DrawableSource<'_>) -> CanonicalDraw {
        match self {
            Self::At { dx, dy } => {
                let size = resolve_size(source);
                CanonicalDraw {
                    source: DrawRect::from_origin(size),
                    destination: DrawRect::at(dx, dy, size),
                }
            }
            Self::Scaled { dx, dy, dw, dh } => {
                let size = resolve_size(source);
                CanonicalDraw {
                    source: DrawRect::from_origin(size),
                    destination: DrawRect::new(dx, dy, dw, dh),
                }
            }
            Self::Subrect(call) => call,
        }
    }
}

/// The operation that actually reads pixels from a source and composites
/// them. Owns all validation.
pub trait DrawPrimitive {
    /// Failure reported to the caller of `drawImage`.
    type Error;

    /// Draw `call.source` of `source` into `call.destination`.
    fn draw_image(
        &mut self,
        source: DrawableSource<'_>,
        call: &CanonicalDraw,
        orientation: OrientationTag,
    ) -> Result<(), Self::Error>;
}

impl<P: DrawPrimitive + ?Sized> DrawPrimitive for &mut P {
    type Error = P::Error;

    fn draw_image(
        &mut self,
        source: DrawableSource<'_>,
        call: &CanonicalDraw,
        orientation: OrientationTag,
    ) -> Result<(), Self::Error> {
        (**self).draw_image(source, call, orientation)
    }
}

/// The `drawImage` entry points of a 2D context, over a draw primitive.
#[derive(Debug, Default)]
pub struct CanvasDrawImage<P> {
    primitive: P,
}

impl<P: DrawPrimitive> CanvasDrawImage<P> {
    /// Wrap a draw primitive.
    pub fn new(primitive: P) -> Self {
        Self { primitive }
    }

    /// Borrow the wrapped primitive.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Mutably borrow the wrapped primitive.
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    /// Unwrap into the primitive.
    pub fn into_primitive(self) -> P {
        self.primitive
    }

    /// `drawImage(image, dx, dy)`: draw at 1:1 scale.
    pub fn draw_image(
        &mut self,
        source: DrawableSource<'_>,
        dx: f32,
        dy: f32,
    ) -> Result<(), P::Error> {
        self.draw(source, DrawImageArgs::At { dx, dy })
    }

    /// `drawImage(image, dx, dy, dw, dh)`: draw the whole image into a rect.
    pub fn draw_image_scaled(
        &mut self,
        source: DrawableSource<'_>,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) -> Result<(), P::Error> {
        self.draw(source, DrawImageArgs::Scaled { dx, dy, dw, dh })
    }

    /// `drawImage(image, sx, sy, sw, sh, dx, dy, dw, dh)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image_subrect(
        &mut self,
        source: DrawableSource<'_>,
        sx: f32,
        sy: f32,
        sw: f32,
        sh: f32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) -> Result<(), P::Error> {
        let call = CanonicalDraw::new(sx, sy, sw, sh, dx, dy, dw, dh);
        self.draw(source, DrawImageArgs::Subrect(call))
    }

    /// Canonicalize `args` and forward to the primitive. Values are passed
    /// verbatim, degenerate or not.
    pub fn draw(&mut self, source: DrawableSource<'_>, args: DrawImageArgs) -> Result<(), P::Error> {
        let call = args.canonicalize(source);
        let orientation = resolve_orientation(source);
        log::debug!(
            "drawImage {} {args:?} -> {:?} ({orientation:?})",
            source.kind(),
            call.to_array()
        );
        self.primitive.draw_image(source, &call, orientation)
    }
}
