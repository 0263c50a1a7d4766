//! Default source size of a drawable source.
//!
//! Used when a `drawImage` call omits the source rectangle. Each kind of
//! source has its own notion of "bitmap" and of "fallback size", so every
//! variant gets its own arm even where the shape of the check repeats.

use crate::geometry::SourceSize;
use crate::source::DrawableSource;

/// Default `(width, height)` of `source`.
///
/// | Source      | Bitmap present           | Otherwise                      |
/// |-------------|--------------------------|--------------------------------|
/// | image       | decoded bitmap           | `width`/`height` attributes    |
/// | SVG image   | current image bitmap     | animated `width`/`height`      |
/// | video       | current frame            | intrinsic video size           |
/// | canvas      | backing surface          | `width`/`height` attributes    |
/// | bitmap      | associated bitmap        | the source's own size          |
///
/// The image and SVG image fallbacks stand in for CSS concrete object size
/// resolution, which this crate does not perform. Unset attributes yield
/// zero; nothing is clamped.
pub fn resolve_size(source: DrawableSource<'_>) -> SourceSize {
    let kind = source.kind();
    match source {
        DrawableSource::Image(image) => {
            if let Some(bitmap) = image.decoded_bitmap() {
                SourceSize::from_dims(bitmap.width(), bitmap.height())
            } else {
                // Not the concrete object size; attributes may be unset.
                log::trace!("{kind} has no decoded bitmap; using attribute size");
                SourceSize::from_dims(image.width(), image.height())
            }
        }
        DrawableSource::SvgImage(image) => {
            if let Some(bitmap) = image.current_image_bitmap() {
                SourceSize::from_dims(bitmap.width(), bitmap.height())
            } else {
                // Percentages are not resolved against a viewport.
                log::trace!("{kind} has no current bitmap; using animated lengths");
                SourceSize::from_dims(image.animated_width(), image.animated_height())
            }
        }
        DrawableSource::Video(video) => {
            if let Some(frame) = video.current_frame() {
                SourceSize::from_dims(frame.width(), frame.height())
            } else {
                log::trace!("{kind} has no current frame; using intrinsic size");
                SourceSize::from_dims(video.video_width(), video.video_height())
            }
        }
        DrawableSource::Canvas(canvas) => {
            if let Some(surface) = canvas.surface() {
                surface.size().into()
            } else {
                log::trace!("{kind} has no surface; using attribute size");
                SourceSize::from_dims(canvas.width(), canvas.height())
            }
        }
        DrawableSource::Bitmap(source) => {
            if let Some(bitmap) = source.bitmap() {
                SourceSize::from_dims(bitmap.width(), bitmap.height())
            } else {
                log::trace!("{kind} has no bitmap; using its own size");
                SourceSize::from_dims(source.width(), source.height())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::*;

    fn size(w: f32, h: f32) -> SourceSize {
        SourceSize::new(w, h)
    }

    // ── image ───────────────────────────────────────────────────────────

    #[test]
    fn image_without_bitmap_uses_attributes() {
        let img = Img {
            width: 10,
            height: 20,
            ..Img::default()
        };
        assert_eq!(resolve_size(DrawableSource::Image(&img)), size(10.0, 20.0));
    }

    #[test]
    fn image_bitmap_wins_over_attributes() {
        let img = Img {
            bitmap: Some(Pixels(100, 50)),
            width: 10,
            height: 20,
            ..Img::default()
        };
        assert_eq!(resolve_size(DrawableSource::Image(&img)), size(100.0, 50.0));
    }

    #[test]
    fn image_unset_attributes_are_zero() {
        let img = Img::default();
        assert_eq!(resolve_size(DrawableSource::Image(&img)), size(0.0, 0.0));
    }

    // ── SVG image ───────────────────────────────────────────────────────

    #[test]
    fn svg_without_bitmap_uses_animated_lengths() {
        let svg = SvgImg {
            width: 12.5,
            height: 7.25,
            ..SvgImg::default()
        };
        assert_eq!(resolve_size(DrawableSource::SvgImage(&svg)), size(12.5, 7.25));
    }

    #[test]
    fn svg_bitmap_wins() {
        let svg = SvgImg {
            bitmap: Some(Pixels(64, 32)),
            width: 12.5,
            height: 7.25,
            ..SvgImg::default()
        };
        assert_eq!(resolve_size(DrawableSource::SvgImage(&svg)), size(64.0, 32.0));
    }

    #[test]
    fn svg_negative_length_passes_through() {
        let svg = SvgImg {
            width: -4.0,
            height: f32::INFINITY,
            ..SvgImg::default()
        };
        let s = resolve_size(DrawableSource::SvgImage(&svg));
        assert_eq!(s.width, -4.0);
        assert_eq!(s.height, f32::INFINITY);
    }

    // ── video ───────────────────────────────────────────────────────────

    #[test]
    fn video_without_frame_uses_intrinsic_size() {
        let video = Video {
            video_width: 640,
            video_height: 480,
            ..Video::default()
        };
        assert_eq!(resolve_size(DrawableSource::Video(&video)), size(640.0, 480.0));
    }

    #[test]
    fn video_frame_wins() {
        let video = Video {
            frame: Some(Pixels(320, 240)),
            video_width: 640,
            video_height: 480,
            ..Video::default()
        };
        assert_eq!(resolve_size(DrawableSource::Video(&video)), size(320.0, 240.0));
    }

    // ── canvas ──────────────────────────────────────────────────────────

    #[test]
    fn canvas_surface_size() {
        let canvas = Canvas {
            surface: Some(Pixels(300, 150)),
            width: 1,
            height: 1,
            ..Canvas::default()
        };
        assert_eq!(resolve_size(DrawableSource::Canvas(&canvas)), size(300.0, 150.0));
    }

    #[test]
    fn canvas_without_surface_uses_attributes() {
        let canvas = Canvas {
            width: 300,
            height: 150,
            ..Canvas::default()
        };
        assert_eq!(resolve_size(DrawableSource::Canvas(&canvas)), size(300.0, 150.0));
    }

    // ── bitmap ──────────────────────────────────────────────────────────

    #[test]
    fn bitmap_source_prefers_bitmap() {
        let source = ImageBitmap {
            bitmap: Some(Pixels(8, 9)),
            width: 1,
            height: 2,
        };
        assert_eq!(resolve_size(DrawableSource::Bitmap(&source)), size(8.0, 9.0));
    }

    #[test]
    fn bitmap_source_without_bitmap_uses_own_size() {
        let source = ImageBitmap {
            bitmap: None,
            width: 1,
            height: 2,
        };
        assert_eq!(resolve_size(DrawableSource::Bitmap(&source)), size(1.0, 2.0));
    }

    // ── properties ──────────────────────────────────────────────────────

    #[test]
    fn repeated_resolution_is_identical() {
        let img = Img {
            bitmap: Some(Pixels(100, 50)),
            ..Img::default()
        };
        let svg = SvgImg {
            width: 12.5,
            height: 7.25,
            ..SvgImg::default()
        };
        let video = Video {
            video_width: 640,
            video_height: 480,
            ..Video::default()
        };
        let canvas = Canvas {
            surface: Some(Pixels(300, 150)),
            ..Canvas::default()
        };
        let bitmap = ImageBitmap {
            width: 3,
            height: 4,
            ..ImageBitmap::default()
        };
        for source in [
            DrawableSource::Image(&img),
            DrawableSource::SvgImage(&svg),
            DrawableSource::Video(&video),
            DrawableSource::Canvas(&canvas),
            DrawableSource::Bitmap(&bitmap),
        ] {
            assert_eq!(resolve_size(source), resolve_size(source), "{source:?}");
        }
    }

    #[test]
    fn resolution_tracks_entity_changes() {
        // No memoization: a bitmap that appears between calls is picked up.
        let mut img = Img {
            width: 10,
            height: 20,
            ..Img::default()
        };
        assert_eq!(resolve_size(DrawableSource::Image(&img)), size(10.0, 20.0));
        img.bitmap = Some(Pixels(100, 50));
        assert_eq!(resolve_size(DrawableSource::Image(&img)), size(100.0, 50.0));
    }
}
