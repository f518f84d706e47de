//! A raster drawing surface backed by a tiny-skia pixmap.

use glam::DVec2;
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::DrawSurface;
use crate::style::Color;

/// Surface that strokes paths into a [`Pixmap`].
///
/// Shapes draw in a frame centered on their own anchor; callers place that
/// frame on the pixmap with [`set_origin`](PixmapSurface::set_origin)
/// before rendering.
pub struct PixmapSurface {
    pixmap: Pixmap,
    builder: PathBuilder,
    origin: DVec2,
    stroke_color: Color,
    line_width: f64,
}

impl PixmapSurface {
    /// A surface of the given pixel dimensions, or `None` when either
    /// dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(PixmapSurface {
            pixmap: Pixmap::new(width, height)?,
            builder: PathBuilder::new(),
            origin: DVec2::ZERO,
            stroke_color: Color::BLACK,
            line_width: 1.0,
        })
    }

    /// Translate subsequent path coordinates by `origin`.
    pub fn set_origin(&mut self, origin: DVec2) {
        self.origin = origin;
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

impl DrawSurface for PixmapSurface {
    fn begin_path(&mut self) {
        self.builder = PathBuilder::new();
    }

    fn move_to(&mut self, p: DVec2) {
        let p = p + self.origin;
        self.builder.move_to(p.x as f32, p.y as f32);
    }

    fn line_to(&mut self, p: DVec2) {
        let p = p + self.origin;
        self.builder.line_to(p.x as f32, p.y as f32);
    }

    fn stroke(&mut self) {
        // The builder stays intact so the path survives repeated strokes.
        let Some(path) = self.builder.clone().finish() else {
            return;
        };
        let Some([r, g, b, a]) = self.stroke_color.to_rgba8() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: self.line_width as f32,
            ..Stroke::default()
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
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
