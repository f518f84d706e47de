//! A drawing surface that records every operation.
//!
//! Used by the test suite to assert on the exact path a shape emits, and
//! handy for debugging render output without rasterizing.

use glam::DVec2;

use super::DrawSurface;
use crate::style::Color;

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    /// A stroke pass, with the color and line width in effect at the time.
    Stroke { color: Color, line_width: f64 },
}

/// Surface that appends every call to an op log.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    stroke_color: Color,
    line_width: f64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface {
            ops: Vec::new(),
            // canvas surfaces start with an opaque black stroke
            stroke_color: Color::BLACK,
            line_width: 1.0,
        }
    }

    /// Everything recorded so far, in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, p: DVec2) {
        self.ops.push(SurfaceOp::MoveTo(p));
    }

    fn line_to(&mut self, p: DVec2) {
        self.ops.push(SurfaceOp::LineTo(p));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke {
            color: self.stroke_color.clone(),
            line_width: self.line_width,
        });
    }

    fn stroke_color(&self) -> Color {
        self.stroke_color.clone()
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ops_in_call_order() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.move_to(DVec2::new(1.0, 2.0));
        surface.line_to(DVec2::new(3.0, 4.0));
        surface.set_line_width(2.0);
        surface.stroke();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::BeginPath,
                SurfaceOp::MoveTo(DVec2::new(1.0, 2.0)),
                SurfaceOp::LineTo(DVec2::new(3.0, 4.0)),
                SurfaceOp::Stroke {
                    color: Color::BLACK,
                    line_width: 2.0
                },
            ]
        );
    }

    #[test]
    fn stroke_captures_current_state() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_color(Color::parse("red"));
        surface.set_line_width(3.5);
        surface.stroke();

        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Stroke {
                color: Color::Rgb { r: 255, g: 0, b: 0 },
                line_width: 3.5
            }]
        );
    }
}
