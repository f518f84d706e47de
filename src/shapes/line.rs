//! The straight line segment primitive.
//!
//! A line is defined by two endpoints and keeps its generic bounding box
//! (`left`, `top`, `width`, `height` on the embedded [`ObjectBase`]) in
//! sync with them: every endpoint mutation through [`Line::set`]
//! re-derives the box, so stale derived values are never observable. A
//! perfectly horizontal or vertical line still gets a unit extent on the
//! degenerate axis.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::object::{ObjectBase, ObjectConfig, Prop};
use crate::parse::{AttrValue, SvgElement, parse_attributes};
use crate::style::fmt_num;
use crate::surface::{DrawSurface, StrokeColorScope};
use crate::types::{Bounds, Point};

use super::CanvasObject;

/// A straight line segment between two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    base: ObjectBase,
}

/// Serialized representation of a [`Line`]: the endpoint coordinates plus
/// the generic object record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(flatten)]
    pub config: ObjectConfig,
}

impl Line {
    /// Kind identifier used in records and registries.
    pub const KIND: &'static str = "line";

    /// Attribute names recognized when parsing a `<line>` element.
    ///
    /// See <http://www.w3.org/TR/SVG/shapes.html#LineElement>.
    pub const ATTRIBUTE_NAMES: [&'static str; 7] =
        ["x1", "y1", "x2", "y2", "stroke", "stroke-width", "transform"];

    /// Build a line from `[x1, y1, x2, y2]` and construction options.
    ///
    /// The coordinates go through [`Line::set`] in order, so the bounding
    /// box is consistent after every single assignment; a final derivation
    /// honors a caller-supplied `left`/`top` override from `options`.
    /// The override applies at construction time only and is forgotten on
    /// the first later endpoint edit.
    pub fn new(points: [f64; 4], options: ObjectConfig) -> Self {
        let mut line = Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            base: ObjectBase::new(&options),
        };
        line.set(Prop::X1, points[0]);
        line.set(Prop::Y1, points[1]);
        line.set(Prop::X2, points[2]);
        line.set(Prop::Y2, points[3]);
        line.derive_bounds(&options);
        line
    }

    /// Set a property. Endpoint properties re-derive the bounding box
    /// after the value lands; everything else is a plain assignment.
    pub fn set(&mut self, prop: Prop, value: f64) -> &mut Self {
        self.apply(prop, value);
        if prop.is_endpoint() {
            self.derive_bounds(&ObjectConfig::default());
        }
        self
    }

    /// Read a property.
    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::X1 => self.x1,
            Prop::Y1 => self.y1,
            Prop::X2 => self.x2,
            Prop::Y2 => self.y2,
            _ => self.base.value(prop),
        }
    }

    /// Apply a value without triggering derivation.
    fn apply(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::X1 => self.x1 = value,
            Prop::Y1 => self.y1 = value,
            Prop::X2 => self.x2 = value,
            Prop::Y2 => self.y2 = value,
            _ => self.base.apply(prop, value),
        }
    }

    /// Recompute `width`, `height`, `left`, `top` from the current
    /// endpoints.
    fn derive_bounds(&mut self, config: &ObjectConfig) {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;

        // a zero-length axis still spans a unit-thick box
        self.apply(Prop::Width, if dx == 0.0 { 1.0 } else { dx });
        self.apply(Prop::Height, if dy == 0.0 { 1.0 } else { dy });

        // the anchor sits on the endpoint midpoint; the coerced unit
        // extent does not shift it
        self.apply(Prop::Left, config.left.unwrap_or(self.x1 + dx / 2.0));
        self.apply(Prop::Top, config.top.unwrap_or(self.y1 + dy / 2.0));
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// First endpoint.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Second endpoint.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Midpoint of the endpoints; coincides with the bounding-box anchor
    /// unless the anchor was overridden at construction.
    pub fn center(&self) -> Point {
        self.start().midpoint(self.end())
    }

    /// The current bounding box.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.base.left,
            self.base.top,
            self.base.width,
            self.base.height,
        )
    }

    /// Generic state and style of this object.
    pub fn base(&self) -> &ObjectBase {
        &self.base
    }

    /// Draw the segment onto `surface`, in a frame centered on the
    /// shape's anchor.
    ///
    /// A line is stroked, not filled, so the object's *fill* color drives
    /// the stroke; the surface's own stroke color is restored before this
    /// returns, on every path.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        surface.begin_path();

        // local frame spans -w/2..w/2 x -h/2..h/2; a unit (degenerate)
        // extent draws on the axis itself, not at a half-unit offset
        let half_w = if self.base.width == 1.0 {
            0.0
        } else {
            self.base.width / 2.0
        };
        let half_h = if self.base.height == 1.0 {
            0.0
        } else {
            self.base.height / 2.0
        };
        surface.move_to(DVec2::new(-half_w, -half_h));
        surface.line_to(DVec2::new(half_w, half_h));

        surface.set_line_width(self.base.stroke_width);

        let mut scope = StrokeColorScope::new(surface, self.base.fill.clone());
        scope.stroke();
    }

    /// Relative rendering cost of this shape.
    pub fn complexity(&self) -> u32 {
        1
    }

    /// Serialize to an object record.
    pub fn to_record(&self) -> LineRecord {
        LineRecord {
            kind: Self::KIND.to_string(),
            x1: self.get(Prop::X1),
            y1: self.get(Prop::Y1),
            x2: self.get(Prop::X2),
            y2: self.get(Prop::Y2),
            config: self.base.to_config(),
        }
    }

    /// Rebuild a line from an object record. The endpoints come straight
    /// off the record; the full record doubles as the construction
    /// configuration so generic properties round-trip too.
    pub fn from_record(record: &LineRecord) -> Self {
        Line::new(
            [record.x1, record.y1, record.x2, record.y2],
            record.config.clone(),
        )
    }

    /// SVG markup for this line.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" style="{}" />"#,
            fmt_num(self.get(Prop::X1)),
            fmt_num(self.get(Prop::Y1)),
            fmt_num(self.get(Prop::X2)),
            fmt_num(self.get(Prop::Y2)),
            self.base.svg_styles(),
        )
    }

    /// Build a line from a parsed SVG element.
    ///
    /// Missing coordinates default to zero. Parsed presentation
    /// attributes merge with `options`, and `options` wins on collision.
    pub fn from_element(element: &SvgElement, options: ObjectConfig) -> Self {
        let attrs = parse_attributes(element, &Self::ATTRIBUTE_NAMES);
        let coord = |name: &str| {
            attrs
                .get(name)
                .and_then(AttrValue::as_number)
                .unwrap_or(0.0)
        };
        let points = [coord("x1"), coord("y1"), coord("x2"), coord("y2")];

        let parsed = ObjectConfig {
            stroke: attrs.get("stroke").and_then(AttrValue::as_color),
            stroke_width: attrs.get("stroke-width").and_then(AttrValue::as_number),
            transform: attrs
                .get("transform")
                .and_then(AttrValue::as_str)
                .map(str::to_string),
            ..ObjectConfig::default()
        };

        Line::new(points, parsed.merged_with(options))
    }

    /// Parse a `<line>` markup fragment.
    pub fn from_svg_markup(markup: &str) -> Result<Self, crate::errors::ParseError> {
        let element = crate::parse::parse_element(markup)?;
        Ok(Line::from_element(&element, ObjectConfig::default()))
    }
}

impl Default for Line {
    fn default() -> Self {
        Line::new([0.0; 4], ObjectConfig::default())
    }
}

impl CanvasObject for Line {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn bounds(&self) -> Bounds {
        Line::bounds(self)
    }

    fn complexity(&self) -> u32 {
        Line::complexity(self)
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        Line::render(self, surface)
    }

    fn to_svg(&self) -> String {
        Line::to_svg(self)
    }
}
