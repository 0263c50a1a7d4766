//! Orientation: the renderer's native orientation, the CSS `image-orientation`
//! computed value, and the resolver that maps one onto the other.

use num_traits::Float;

use crate::source::DrawableSource;

/// Native orientation: a clockwise rotation in quarter turns, then an
/// optional horizontal flip.
///
/// Every CSS `image-orientation` value other than `from-image` maps to one
/// of these. Applying it is the draw primitive's job.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Rotation in 90-degree increments (0-3). 0=0°, 1=90°, 2=180°, 3=270°.
    pub rotation: u8,
    /// Horizontal flip applied after rotation.
    pub flip: bool,
}

impl Orientation {
    /// No transformation.
    pub const IDENTITY: Self = Self::new(0, false);
    /// Horizontal flip.
    pub const FLIP_H: Self = Self::new(0, true);

    /// Quarter-turn rotation (masked to 0-3) followed by an optional flip.
    pub const fn new(quarter_turns: u8, flip: bool) -> Self {
        Self {
            rotation: quarter_turns & 3,
            flip,
        }
    }
}

/// Computed value of the CSS `image-orientation` property.
///
/// This is the closed vocabulary the style system hands over. Angles are
/// already normalized to quarter turns; see [`ImageOrientation::from_angle`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageOrientation {
    /// `from-image`: honor the image's own orientation metadata.
    #[default]
    FromImage,
    /// `none`: ignore orientation metadata.
    None,
    /// `flip`: equivalent to `0deg flip`.
    Flip,
    /// `<angle> [flip]`, as clockwise quarter turns (0-3).
    Rotate { quarter_turns: u8, flip: bool },
}

impl ImageOrientation {
    /// Compute the value of `<angle> [flip]`.
    ///
    /// The angle is rounded to the nearest quarter turn, half away from zero
    /// (`45deg` becomes `90deg`, `-45deg` becomes `-90deg`), then reduced
    /// modulo one full turn. A non-finite angle computes to zero turns.
    pub fn from_angle(degrees: f32, flip: bool) -> Self {
        let turns = if degrees.is_finite() {
            Float::round(degrees / 90.0) as i64
        } else {
            0
        };
        Self::Rotate {
            quarter_turns: turns.rem_euclid(4) as u8,
            flip,
        }
    }
}

/// Orientation instruction handed to the draw primitive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrientationTag {
    /// Apply whatever orientation the image's metadata carries.
    #[default]
    FromImage,
    /// Apply exactly this orientation, ignoring metadata.
    Explicit(Orientation),
}

impl OrientationTag {
    /// Map a CSS computed value to the renderer's native tag.
    pub fn from_css(value: ImageOrientation) -> Self {
        match value {
            ImageOrientation::FromImage => Self::FromImage,
            ImageOrientation::None => Self::Explicit(Orientation::IDENTITY),
            ImageOrientation::Flip => Self::Explicit(Orientation::FLIP_H),
            ImageOrientation::Rotate {
                quarter_turns,
                flip,
            } => Self::Explicit(Orientation::new(quarter_turns, flip)),
        }
    }

    /// The orientation actually applied to an image whose own metadata
    /// says `metadata`.
    pub fn effective(self, metadata: Orientation) -> Orientation {
        match self {
            Self::FromImage => metadata,
            Self::Explicit(o) => o,
        }
    }
}

impl From<ImageOrientation> for OrientationTag {
    fn from(value: ImageOrientation) -> Self {
        Self::from_css(value)
    }
}

/// Orientation to apply when reading pixels from `source`.
///
/// Sources with a computed style use its `image-orientation`; sources
/// without one (and generic bitmaps, which have no style at all) default to
/// [`OrientationTag::FromImage`].
pub fn resolve_orientation(source: DrawableSource<'_>) -> OrientationTag {
    let Some(style) = source.computed_style() else {
        log::trace!("{} source has no computed style; orientation from image", source.kind());
        return OrientationTag::FromImage;
    };
    let value = style.image_orientation();
    let tag = OrientationTag::from_css(value);
    log::trace!("{} source image-orientation {value:?} -> {tag:?}", source.kind());
    tag
}
