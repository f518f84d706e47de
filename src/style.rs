//! Paint colors and SVG style-attribute emission.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A paint color.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// No paint (transparent)
    None,
    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
    /// Named color the parser did not recognize; carried verbatim
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

    /// Parse a color from a string.
    ///
    /// Accepts `none`, `rgb(r,g,b)`, 3- and 6-digit hex, and common color
    /// names. Anything else is carried as [`Color::Named`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Color::None;
        }

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() == 3 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    parts[0].trim().parse::<u8>(),
                    parts[1].trim().parse::<u8>(),
                    parts[2].trim().parse::<u8>(),
                ) {
                    return Color::Rgb { r, g, b };
                }
            }
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return Color::Rgb { r, g, b };
                }
            } else if hex.len() == 3 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..1], 16),
                    u8::from_str_radix(&hex[1..2], 16),
                    u8::from_str_radix(&hex[2..3], 16),
                ) {
                    // Expand 3-digit hex: #abc -> #aabbcc
                    return Color::Rgb {
                        r: r * 17,
                        g: g * 17,
                        b: b * 17,
                    };
                }
            }
        }

        match s.to_lowercase().as_str() {
            "black" => Color::Rgb { r: 0, g: 0, b: 0 },
            "white" => Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            "red" => Color::Rgb { r: 255, g: 0, b: 0 },
            "green" => Color::Rgb { r: 0, g: 128, b: 0 },
            "blue" => Color::Rgb { r: 0, g: 0, b: 255 },
            "yellow" => Color::Rgb {
                r: 255,
                g: 255,
                b: 0,
            },
            "cyan" => Color::Rgb {
                r: 0,
                g: 255,
                b: 255,
            },
            "magenta" => Color::Rgb {
                r: 255,
                g: 0,
                b: 255,
            },
            "gray" | "grey" => Color::Rgb {
                r: 128,
                g: 128,
                b: 128,
            },
            _ => Color::Named(s.to_string()),
        }
    }

    /// Raster representation. `None` paints nothing; unrecognized named
    /// colors rasterize as opaque black.
    pub fn to_rgba8(&self) -> Option<[u8; 4]> {
        match self {
            Color::None => None,
            Color::Rgb { r, g, b } => Some([*r, *g, *b, 255]),
            Color::Named(_) => Some([0, 0, 0, 255]),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Rgb { r, g, b } => write!(f, "rgb({},{},{})", r, g, b),
            Color::Named(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Color::parse(&s))
    }
}

/// Structured SVG style attribute, emitted as a CSS-like string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl SvgStyle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for SvgStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(ref fill) = self.fill {
            parts.push(format!("fill:{}", fill));
        }
        if let Some(stroke_width) = self.stroke_width {
            parts.push(format!("stroke-width:{}", fmt_num(stroke_width)));
        }
        if let Some(ref stroke) = self.stroke {
            parts.push(format!("stroke:{}", stroke));
        }
        if let Some(opacity) = self.opacity {
            parts.push(format!("opacity:{}", fmt_num(opacity)));
        }

        if parts.is_empty() {
            Ok(())
        } else {
            write!(f, "{};", parts.join(";"))
        }
    }
}

/// Format a number like %.10g, with trailing zeros trimmed.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.10}", v);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_rgb() {
        assert_eq!(Color::parse("rgb(0,0,0)"), Color::Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            Color::parse("rgb(255, 128, 64)"),
            Color::Rgb {
                r: 255,
                g: 128,
                b: 64
            }
        );
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(
            Color::parse("#ff0080"),
            Color::Rgb {
                r: 255,
                g: 0,
                b: 128
            }
        );
        assert_eq!(
            Color::parse("#abc"),
            Color::Rgb {
                r: 0xaa,
                g: 0xbb,
                b: 0xcc
            }
        );
    }

    #[test]
    fn parse_color_named() {
        assert_eq!(Color::parse("black"), Color::Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(Color::parse("none"), Color::None);
        assert_eq!(
            Color::parse("papayawhip"),
            Color::Named("papayawhip".to_string())
        );
    }

    #[test]
    fn color_normalization() {
        // "black" and "rgb(0,0,0)" compare equal
        assert_eq!(Color::parse("black"), Color::parse("rgb(0,0,0)"));
    }

    #[test]
    fn color_rasterization() {
        assert_eq!(Color::None.to_rgba8(), None);
        assert_eq!(
            Color::Rgb { r: 1, g: 2, b: 3 }.to_rgba8(),
            Some([1, 2, 3, 255])
        );
        assert_eq!(
            Color::Named("papayawhip".into()).to_rgba8(),
            Some([0, 0, 0, 255])
        );
    }

    #[test]
    fn color_serde_roundtrip() {
        let color = Color::Rgb { r: 10, g: 20, b: 30 };
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"rgb(10,20,30)\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }

    #[test]
    fn style_emission() {
        let style = SvgStyle {
            fill: Some(Color::BLACK),
            stroke: Some(Color::None),
            stroke_width: Some(1.0),
            opacity: None,
        };
        assert_eq!(style.to_string(), "fill:rgb(0,0,0);stroke-width:1;stroke:none;");
    }

    #[test]
    fn style_empty_emission() {
        assert_eq!(SvgStyle::new().to_string(), "");
    }

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(2.16), "2.16");
        assert_eq!(fmt_num(-60.0), "-60");
    }
}
