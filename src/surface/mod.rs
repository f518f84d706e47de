//! Immediate-mode drawing surfaces.
//!
//! Shapes render through the [`DrawSurface`] trait: path construction plus
//! a stroke pass driven by the surface's current stroke color and line
//! width. Two implementations ship with the crate: a
//! [`PixmapSurface`](pixmap::PixmapSurface) that rasterizes via tiny-skia,
//! and a [`RecordingSurface`](recording::RecordingSurface) that captures
//! ops for inspection.

pub mod pixmap;
pub mod recording;

pub use pixmap::PixmapSurface;
pub use recording::{RecordingSurface, SurfaceOp};

use glam::DVec2;

use crate::style::Color;

/// A 2D immediate-mode drawing surface.
///
/// The path accumulates from `begin_path` until the next `begin_path`;
/// `stroke` draws the current path with the current stroke color and line
/// width without clearing it.
pub trait DrawSurface {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn stroke(&mut self);

    fn stroke_color(&self) -> Color;
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
}

/// Scoped override of a surface's stroke color.
///
/// Saves the current color on entry and restores it when the scope drops,
/// so restoration also happens on unwind.
pub struct StrokeColorScope<'a> {
    surface: &'a mut dyn DrawSurface,
    saved: Color,
}

impl<'a> StrokeColorScope<'a> {
    pub fn new(surface: &'a mut dyn DrawSurface, temporary: Color) -> Self {
        let saved = surface.stroke_color();
        surface.set_stroke_color(temporary);
        StrokeColorScope { surface, saved }
    }

    /// Stroke the current path with the temporary color.
    pub fn stroke(&mut self) {
        self.surface.stroke();
    }
}

impl Drop for StrokeColorScope<'_> {
    fn drop(&mut self) {
        self.surface.set_stroke_color(self.saved.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_restores_stroke_color() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_color(Color::parse("blue"));

        {
            let mut scope = StrokeColorScope::new(&mut surface, Color::parse("red"));
            scope.stroke();
        }

        assert_eq!(surface.stroke_color(), Color::Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn scope_strokes_with_temporary_color() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(DVec2::new(0.0, 0.0));
        surface.line_to(DVec2::new(1.0, 1.0));

        {
            let mut scope = StrokeColorScope::new(&mut surface, Color::parse("red"));
            scope.stroke();
        }

        let stroke = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                SurfaceOp::Stroke { color, .. } => Some(color.clone()),
                _ => None,
            })
            .expect("stroke op recorded");
        assert_eq!(stroke, Color::Rgb { r: 255, g: 0, b: 0 });
    }
}
