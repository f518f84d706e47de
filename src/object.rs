//! The generic object model shared by every shape.
//!
//! Shapes embed an [`ObjectBase`] for their positional and style state and
//! expose mutation through a tagged setter keyed on [`Prop`]. There is no
//! stringly-typed property bag: the settable surface is a closed enum, and
//! shape-specific derivation hooks dispatch on membership tests like
//! [`Prop::is_endpoint`].

use serde::{Deserialize, Serialize};

use crate::style::{Color, SvgStyle};

/// Identifier for every numerically settable property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prop {
    X1,
    Y1,
    X2,
    Y2,
    Left,
    Top,
    Width,
    Height,
    StrokeWidth,
    Angle,
    ScaleX,
    ScaleY,
    Opacity,
}

impl Prop {
    /// Whether this property is one of the line endpoint coordinates.
    ///
    /// Setting an endpoint re-derives the bounding box; setting anything
    /// else does not.
    pub fn is_endpoint(self) -> bool {
        matches!(self, Prop::X1 | Prop::Y1 | Prop::X2 | Prop::Y2)
    }
}

/// Construction options and the generic half of an object record.
///
/// Every field is optional; `None` means "use the default" at construction
/// and "absent" in a serialized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl ObjectConfig {
    /// Overlay `overrides` on top of `self`; a `Some` in `overrides` wins.
    pub fn merged_with(self, overrides: ObjectConfig) -> ObjectConfig {
        ObjectConfig {
            left: overrides.left.or(self.left),
            top: overrides.top.or(self.top),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            fill: overrides.fill.or(self.fill),
            stroke: overrides.stroke.or(self.stroke),
            stroke_width: overrides.stroke_width.or(self.stroke_width),
            angle: overrides.angle.or(self.angle),
            scale_x: overrides.scale_x.or(self.scale_x),
            scale_y: overrides.scale_y.or(self.scale_y),
            opacity: overrides.opacity.or(self.opacity),
            transform: overrides.transform.or(self.transform),
        }
    }
}

/// Generic positional and style state embedded in every shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBase {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub angle: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
    /// Raw SVG `transform` attribute, carried opaquely. Transform
    /// composition is out of scope for this unit.
    pub transform: Option<String>,
}

impl Default for ObjectBase {
    fn default() -> Self {
        ObjectBase {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            fill: Color::BLACK,
            stroke: Color::None,
            stroke_width: 1.0,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            transform: None,
        }
    }
}

impl ObjectBase {
    /// Defaults overlaid with a construction config.
    pub fn new(config: &ObjectConfig) -> Self {
        let mut base = ObjectBase::default();
        if let Some(left) = config.left {
            base.left = left;
        }
        if let Some(top) = config.top {
            base.top = top;
        }
        if let Some(width) = config.width {
            base.width = width;
        }
        if let Some(height) = config.height {
            base.height = height;
        }
        if let Some(ref fill) = config.fill {
            base.fill = fill.clone();
        }
        if let Some(ref stroke) = config.stroke {
            base.stroke = stroke.clone();
        }
        if let Some(stroke_width) = config.stroke_width {
            base.stroke_width = stroke_width;
        }
        if let Some(angle) = config.angle {
            base.angle = angle;
        }
        if let Some(scale_x) = config.scale_x {
            base.scale_x = scale_x;
        }
        if let Some(scale_y) = config.scale_y {
            base.scale_y = scale_y;
        }
        if let Some(opacity) = config.opacity {
            base.opacity = opacity;
        }
        if let Some(ref transform) = config.transform {
            base.transform = Some(transform.clone());
        }
        base
    }

    /// Apply a generic property value. Endpoint properties are not stored
    /// here; the owning shape routes them before delegating.
    pub fn apply(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Left => self.left = value,
            Prop::Top => self.top = value,
            Prop::Width => self.width = value,
            Prop::Height => self.height = value,
            Prop::StrokeWidth => self.stroke_width = value,
            Prop::Angle => self.angle = value,
            Prop::ScaleX => self.scale_x = value,
            Prop::ScaleY => self.scale_y = value,
            Prop::Opacity => self.opacity = value,
            Prop::X1 | Prop::Y1 | Prop::X2 | Prop::Y2 => {}
        }
    }

    /// Read a generic property value. Endpoint properties read as zero;
    /// the owning shape answers those itself.
    pub fn value(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Left => self.left,
            Prop::Top => self.top,
            Prop::Width => self.width,
            Prop::Height => self.height,
            Prop::StrokeWidth => self.stroke_width,
            Prop::Angle => self.angle,
            Prop::ScaleX => self.scale_x,
            Prop::ScaleY => self.scale_y,
            Prop::Opacity => self.opacity,
            Prop::X1 | Prop::Y1 | Prop::X2 | Prop::Y2 => 0.0,
        }
    }

    /// Snapshot the current generic state as a record half.
    pub fn to_config(&self) -> ObjectConfig {
        ObjectConfig {
            left: Some(self.left),
            top: Some(self.top),
            width: Some(self.width),
            height: Some(self.height),
            fill: Some(self.fill.clone()),
            stroke: Some(self.stroke.clone()),
            stroke_width: Some(self.stroke_width),
            angle: Some(self.angle),
            scale_x: Some(self.scale_x),
            scale_y: Some(self.scale_y),
            opacity: Some(self.opacity),
            transform: self.transform.clone(),
        }
    }

    /// The resolved SVG style string for this object.
    pub fn svg_styles(&self) -> String {
        SvgStyle {
            fill: Some(self.fill.clone()),
            stroke: Some(self.stroke.clone()),
            stroke_width: Some(self.stroke_width),
            opacity: (self.opacity != 1.0).then_some(self.opacity),
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_membership() {
        assert!(Prop::X1.is_endpoint());
        assert!(Prop::Y2.is_endpoint());
        assert!(!Prop::Left.is_endpoint());
        assert!(!Prop::Width.is_endpoint());
    }

    #[test]
    fn config_merge_prefers_overrides() {
        let parsed = ObjectConfig {
            stroke: Some(Color::parse("red")),
            stroke_width: Some(2.0),
            ..ObjectConfig::default()
        };
        let caller = ObjectConfig {
            stroke_width: Some(5.0),
            top: Some(7.0),
            ..ObjectConfig::default()
        };

        let merged = parsed.merged_with(caller);
        assert_eq!(merged.stroke_width, Some(5.0));
        assert_eq!(merged.top, Some(7.0));
        // fields absent from the overrides fall through
        assert_eq!(merged.stroke, Some(Color::Rgb { r: 255, g: 0, b: 0 }));
    }

    #[test]
    fn base_from_config() {
        let base = ObjectBase::new(&ObjectConfig {
            left: Some(3.0),
            fill: Some(Color::parse("blue")),
            ..ObjectConfig::default()
        });
        assert_eq!(base.left, 3.0);
        assert_eq!(base.fill, Color::Rgb { r: 0, g: 0, b: 255 });
        // untouched fields keep their defaults
        assert_eq!(base.stroke_width, 1.0);
        assert_eq!(base.stroke, Color::None);
    }

    #[test]
    fn base_default_svg_styles() {
        let base = ObjectBase::default();
        assert_eq!(
            base.svg_styles(),
            "fill:rgb(0,0,0);stroke-width:1;stroke:none;"
        );
    }

    #[test]
    fn svg_styles_include_non_unit_opacity() {
        let base = ObjectBase {
            opacity: 0.5,
            ..ObjectBase::default()
        };
        assert_eq!(
            base.svg_styles(),
            "fill:rgb(0,0,0);stroke-width:1;stroke:none;opacity:0.5;"
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = ObjectConfig {
            left: Some(5.0),
            stroke: Some(Color::None),
            transform: Some("translate(10 20)".into()),
            ..ObjectConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ObjectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
