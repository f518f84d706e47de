//! A 2D scene-graph canvas unit: shape primitives that keep a generic
//! bounding box in sync with their geometry, render onto immediate-mode
//! drawing surfaces, and round-trip through object records and SVG
//! markup.
//!
//! The one shape shipped today is the straight [`Line`] segment. Its
//! endpoints are independently settable through a tagged property setter;
//! every endpoint mutation re-derives `width`/`height`/`left`/`top`, and a
//! zero-length axis still spans a unit-thick box:
//!
//! ```
//! use easel::{Line, ObjectConfig, Prop};
//!
//! let mut line = Line::new([10.0, 20.0, 110.0, 20.0], ObjectConfig::default());
//! assert_eq!(line.bounds().width, 100.0);
//! assert_eq!(line.bounds().left, 60.0);
//!
//! line.set(Prop::X2, 10.0);
//! assert_eq!(line.bounds().width, 1.0);
//!
//! let svg = line.to_svg();
//! assert!(svg.starts_with("<line "));
//! ```
//!
//! Rendering goes through the [`DrawSurface`] trait; the crate ships a
//! tiny-skia raster surface ([`PixmapSurface`]) and a
//! [`RecordingSurface`] for inspection and tests.

pub mod errors;
pub mod log;
pub mod object;
pub mod parse;
pub mod registry;
pub mod shapes;
pub mod style;
pub mod surface;
pub mod types;

pub use errors::ParseError;
pub use object::{ObjectBase, ObjectConfig, Prop};
pub use parse::{AttrValue, SvgElement, parse_attributes, parse_element};
pub use shapes::{CanvasObject, Line, LineRecord};
pub use style::{Color, SvgStyle};
pub use surface::{DrawSurface, PixmapSurface, RecordingSurface, StrokeColorScope, SurfaceOp};
pub use types::{Bounds, Point};
