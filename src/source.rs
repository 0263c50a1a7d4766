//! Drawable image sources and the collaborator traits they are read through.
//!
//! A [`DrawableSource`] is a short-lived bundle of shared borrows into
//! entities owned by the host (DOM elements, bitmap objects). Every accessor
//! takes `&self` and hands out fresh borrows, so each resolution observes the
//! entity's state at the moment of the call.

use crate::geometry::Size;
use crate::orientation::ImageOrientation;

/// A decoded pixel buffer.
///
/// Dimensions are reported "as decoded": already normalized for display
/// orientation by whoever produced the bitmap.
pub trait Bitmap {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
}

/// The backing render surface of a canvas.
pub trait Surface {
    /// Pixel size of the surface.
    fn size(&self) -> Size;
}

/// Computed style of an element.
pub trait ComputedStyle {
    /// Computed value of the `image-orientation` property.
    fn image_orientation(&self) -> ImageOrientation;
}

/// A raster `<img>` element.
pub trait ImageElement {
    /// Decoded bitmap, once the image has loaded.
    fn decoded_bitmap(&self) -> Option<&dyn Bitmap>;
    /// Reflected `width` attribute. Zero when unset.
    fn width(&self) -> u32;
    /// Reflected `height` attribute. Zero when unset.
    fn height(&self) -> u32;
    /// Computed style, if the element is being rendered.
    fn computed_style(&self) -> Option<&dyn ComputedStyle>;
}

/// An SVG `<image>` element.
pub trait SvgImageElement {
    /// Bitmap of the referenced image, once it has loaded.
    fn current_image_bitmap(&self) -> Option<&dyn Bitmap>;
    /// Animated value of the `width` length, in user units.
    fn animated_width(&self) -> f32;
    /// Animated value of the `height` length, in user units.
    fn animated_height(&self) -> f32;
    /// Computed style, if the element is being rendered.
    fn computed_style(&self) -> Option<&dyn ComputedStyle>;
}

/// A `<video>` element.
pub trait VideoElement {
    /// Bitmap of the frame currently being presented, if any.
    fn current_frame(&self) -> Option<&dyn Bitmap>;
    /// Intrinsic width of the media resource. Zero before metadata is known.
    fn video_width(&self) -> u32;
    /// Intrinsic height of the media resource. Zero before metadata is known.
    fn video_height(&self) -> u32;
    /// Computed style, if the element is being rendered.
    fn computed_style(&self) -> Option<&dyn ComputedStyle>;
}

/// A `<canvas>` element, on-screen or offscreen.
pub trait CanvasElement {
    /// Backing surface, once one has been allocated.
    fn surface(&self) -> Option<&dyn Surface>;
    /// Reflected `width` attribute.
    fn width(&self) -> u32;
    /// Reflected `height` attribute.
    fn height(&self) -> u32;
    /// Computed style, if the element is being rendered.
    fn computed_style(&self) -> Option<&dyn ComputedStyle>;
}

/// A generic bitmap-backed source such as `ImageBitmap`. Carries no style.
pub trait BitmapSource {
    /// Associated bitmap, unless the source has been closed or detached.
    fn bitmap(&self) -> Option<&dyn Bitmap>;
    /// Width the source reports for itself.
    fn width(&self) -> u32;
    /// Height the source reports for itself.
    fn height(&self) -> u32;
}

/// Anything a `drawImage` call accepts as its image argument.
///
/// The set is closed. Every consumer matches it exhaustively without a
/// wildcard arm, so a new variant is a compile error until each consumer
/// handles it.
#[derive(Copy, Clone)]
pub enum DrawableSource<'a> {
    /// Raster image element.
    Image(&'a dyn ImageElement),
    /// SVG image element.
    SvgImage(&'a dyn SvgImageElement),
    /// Video element.
    Video(&'a dyn VideoElement),
    /// Canvas element.
    Canvas(&'a dyn CanvasElement),
    /// Generic bitmap-backed source.
    Bitmap(&'a dyn BitmapSource),
}

impl<'a> DrawableSource<'a> {
    /// Which kind of entity this source borrows.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Image(_) => SourceKind::Image,
            Self::SvgImage(_) => SourceKind::SvgImage,
            Self::Video(_) => SourceKind::Video,
            Self::Canvas(_) => SourceKind::Canvas,
            Self::Bitmap(_) => SourceKind::Bitmap,
        }
    }

    /// Borrow the entity's computed style, for the variants that have one.
    pub fn computed_style(&self) -> Option<&'a dyn ComputedStyle> {
        match *self {
            Self::Image(e) => e.computed_style(),
            Self::SvgImage(e) => e.computed_style(),
            Self::Video(e) => e.computed_style(),
            Self::Canvas(e) => e.computed_style(),
            Self::Bitmap(_) => None,
        }
    }
}

impl core::fmt::Debug for DrawableSource<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("DrawableSource").field(&self.kind()).finish()
    }
}

/// Fieldless mirror of [`DrawableSource`]'s variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Raster image element.
    Image,
    /// SVG image element.
    SvgImage,
    /// Video element.
    Video,
    /// Canvas element.
    Canvas,
    /// Generic bitmap-backed source.
    Bitmap,
}

impl SourceKind {
    /// All five kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Image,
        Self::SvgImage,
        Self::Video,
        Self::Canvas,
        Self::Bitmap,
    ];

    /// Short name used in log records.
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::SvgImage => "svg-image",
            Self::Video => "video",
            Self::Canvas => "canvas",
            Self::Bitmap => "bitmap",
        }
    }
}

impl core::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let img = Img::default();
        let svg = SvgImg::default();
        let video = Video::default();
        let canvas = Canvas::default();
        let bitmap = ImageBitmap::default();
        let sources = [
            DrawableSource::Image(&img),
            DrawableSource::SvgImage(&svg),
            DrawableSource::Video(&video),
            DrawableSource::Canvas(&canvas),
            DrawableSource::Bitmap(&bitmap),
        ];
        for (source, kind) in sources.iter().zip(SourceKind::ALL) {
            assert_eq!(source.kind(), kind);
        }
    }

    #[test]
    fn bitmap_source_has_no_style() {
        let bitmap = ImageBitmap::default();
        assert!(DrawableSource::Bitmap(&bitmap).computed_style().is_none());
    }

    #[test]
    fn computed_style_is_borrowed_through() {
        let img = Img {
            style: Some(Style(ImageOrientation::None)),
            ..Img::default()
        };
        let style = DrawableSource::Image(&img).computed_style();
        assert_eq!(
            style.map(|s| s.image_orientation()),
            Some(ImageOrientation::None)
        );
    }

    #[test]
    fn debug_names_kind() {
        let canvas = Canvas::default();
        let s = format!("{:?}", DrawableSource::Canvas(&canvas));
        assert_eq!(s, "DrawableSource(Canvas)");
    }
}
