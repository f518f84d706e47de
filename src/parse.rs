//! Parse SVG markup fragments into elements and typed attribute values.
//!
//! The grammar (`svg.pest`) accepts a single element with attributes,
//! self-closing or paired. Attribute *values* never fail to parse here:
//! per the element parsing contract, a malformed numeric value passes
//! through as `NaN` instead of being rejected.

use std::collections::BTreeMap;

use miette::NamedSource;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::ParseError;
use crate::style::Color;

#[derive(Parser)]
#[grammar = "svg.pest"]
struct SvgFragmentParser;

/// A parsed SVG element: a name plus its attributes in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    name: String,
    attributes: Vec<(String, String)>,
}

impl SvgElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

/// A recognized attribute value, coerced by attribute kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Color(Color),
    Raw(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            AttrValue::Color(c) => Some(c.clone()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Raw(s) => Some(s),
            _ => None,
        }
    }
}

/// Parse one SVG markup fragment into an element.
pub fn parse_element(markup: &str) -> Result<SvgElement, ParseError> {
    let pairs = SvgFragmentParser::parse(Rule::fragment, markup)
        .map_err(|e| ParseError::syntax(markup, e))?;

    for pair in pairs {
        if pair.as_rule() == Rule::fragment {
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::element {
                    let element = element_from_pair(markup, inner)?;
                    crate::log::debug!("parsed svg element: {}", element.name());
                    return Ok(element);
                }
            }
        }
    }
    unreachable!("grammar guarantees one element per fragment")
}

fn element_from_pair(markup: &str, pair: Pair<Rule>) -> Result<SvgElement, ParseError> {
    let mut name = String::new();
    let mut attributes = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::name => name = inner.as_str().to_string(),
            Rule::attribute => {
                let mut parts = inner.into_inner();
                let attr_name = parts.next().unwrap().as_str().to_string();
                let attr_value = parts
                    .next()
                    .and_then(|value| value.into_inner().next())
                    .map(|quoted| quoted.as_str().to_string())
                    .unwrap_or_default();
                attributes.push((attr_name, attr_value));
            }
            Rule::open_close => {
                for part in inner.into_inner() {
                    if part.as_rule() == Rule::close_tag {
                        let span = part.as_span();
                        let close_name = part.into_inner().next().unwrap().as_str();
                        if close_name != name {
                            return Err(ParseError::MismatchedClosingTag {
                                expected: name,
                                found: close_name.to_string(),
                                src: NamedSource::new("<markup>", markup.to_string()),
                                span: (span.start()..span.end()).into(),
                            });
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(SvgElement { name, attributes })
}

/// Attributes whose values are numeric.
const NUMERIC_ATTRIBUTES: &[&str] = &[
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "width",
    "height",
    "stroke-width",
    "opacity",
];

/// Attributes whose values are paints.
const PAINT_ATTRIBUTES: &[&str] = &["stroke", "fill"];

/// Extract the recognized attributes of `element`.
///
/// Only names listed in `names` appear in the result. Numeric attributes
/// coerce to [`AttrValue::Number`] (malformed input becomes `NaN`), paint
/// attributes to [`AttrValue::Color`], everything else stays raw.
pub fn parse_attributes(element: &SvgElement, names: &[&str]) -> BTreeMap<String, AttrValue> {
    let mut parsed = BTreeMap::new();

    for name in names {
        let Some(raw) = element.attribute(name) else {
            continue;
        };
        let value = if NUMERIC_ATTRIBUTES.contains(name) {
            AttrValue::Number(raw.trim().parse().unwrap_or(f64::NAN))
        } else if PAINT_ATTRIBUTES.contains(name) {
            AttrValue::Color(Color::parse(raw))
        } else {
            AttrValue::Raw(raw.to_string())
        };
        parsed.insert((*name).to_string(), value);
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_self_closing_element() {
        let element = parse_element(r#"<line x1="10" y1="20" x2="110" y2="20" />"#).unwrap();
        assert_eq!(element.name(), "line");
        assert_eq!(element.attribute("x1"), Some("10"));
        assert_eq!(element.attribute("y2"), Some("20"));
        assert_eq!(element.attribute("missing"), None);
    }

    #[test]
    fn parse_paired_element_ignores_content() {
        let element = parse_element(r#"<line x1="1">ignored</line>"#).unwrap();
        assert_eq!(element.name(), "line");
        assert_eq!(element.attribute("x1"), Some("1"));
    }

    #[test]
    fn parse_single_quoted_attributes() {
        let element = parse_element(r#"<line stroke='red' x1='3' />"#).unwrap();
        assert_eq!(element.attribute("stroke"), Some("red"));
        assert_eq!(element.attribute("x1"), Some("3"));
    }

    #[test]
    fn parse_empty_attribute_value() {
        let element = parse_element(r#"<line transform="" />"#).unwrap();
        assert_eq!(element.attribute("transform"), Some(""));
    }

    #[test]
    fn mismatched_closing_tag_is_an_error() {
        let err = parse_element(r#"<line x1="1"></rect>"#).unwrap_err();
        assert!(matches!(err, ParseError::MismatchedClosingTag { .. }));
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(parse_element("<line x1=10 />").is_err());
        assert!(parse_element("not markup").is_err());
        assert!(parse_element(r#"<line x1="1""#).is_err());
    }

    #[test]
    fn attributes_coerce_by_kind() {
        let element =
            parse_element(r#"<line x1="42" stroke="red" transform="rotate(45)" />"#).unwrap();
        let attrs = parse_attributes(&element, &["x1", "stroke", "transform"]);

        assert_eq!(attrs["x1"], AttrValue::Number(42.0));
        assert_eq!(attrs["stroke"], AttrValue::Color(Color::Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(attrs["transform"], AttrValue::Raw("rotate(45)".to_string()));
    }

    #[test]
    fn unrecognized_attributes_are_dropped() {
        let element = parse_element(r#"<line x1="1" data-id="7" />"#).unwrap();
        let attrs = parse_attributes(&element, &["x1", "y1"]);

        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains_key("x1"));
    }

    #[test]
    fn malformed_numeric_value_passes_through_as_nan() {
        let element = parse_element(r#"<line x1="wide" />"#).unwrap();
        let attrs = parse_attributes(&element, &["x1"]);

        let x1 = attrs["x1"].as_number().unwrap();
        assert!(x1.is_nan());
    }
}
