//! Shape primitives and the seam they share.

pub mod line;

pub use line::{Line, LineRecord};

use crate::surface::DrawSurface;
use crate::types::Bounds;

/// Common behavior every canvas shape exposes to heterogeneous callers
/// (scene containers, cost estimators, serializers).
pub trait CanvasObject {
    /// Stable kind identifier, e.g. `"line"`.
    fn kind(&self) -> &'static str;

    /// The current bounding box.
    fn bounds(&self) -> Bounds;

    /// Relative rendering cost, for callers estimating work across a
    /// heterogeneous scene.
    fn complexity(&self) -> u32;

    /// Draw onto a surface, in a frame centered on the shape's anchor.
    fn render(&self, surface: &mut dyn DrawSurface);

    /// SVG markup for this shape.
    fn to_svg(&self) -> String;
}
