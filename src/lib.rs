//! Source sizing, orientation, and argument canonicalization for canvas
//! `drawImage`.
//!
//! Pure geometry over borrowed source entities — no pixel operations, no
//! caching, `no_std` compatible.
//!
//! # Modules
//!
//! - [`source`] — The closed set of drawable sources and the traits hosts implement
//! - [`size`] — Default source size per source kind
//! - [`orientation`] — Native orientation, CSS `image-orientation`, and the resolver between them
//! - [`draw`] — The three `drawImage` call shapes reduced to one canonical call
//! - [`geometry`] — Size and rect value types
//! - [`error`] — Failures a draw primitive reports

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod draw;
pub mod error;
pub mod geometry;
pub mod orientation;
pub mod size;
pub mod source;

pub use draw::{CanonicalDraw, CanvasDrawImage, DrawImageArgs, DrawPrimitive};
pub use error::DrawImageError;
pub use geometry::{DrawRect, Size, SourceSize};
pub use orientation::{ImageOrientation, Orientation, OrientationTag, resolve_orientation};
pub use size::resolve_size;
pub use source::{
    Bitmap, BitmapSource, CanvasElement, ComputedStyle, DrawableSource, ImageElement, SourceKind,
    Surface, SvgImageElement, VideoElement,
};
