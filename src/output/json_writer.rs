//! JSON output for rectangle sets

use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::Rectangle;

/// Layout of the JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[{"x":0, "y":0, "width":4, "height":2} ]`, the level pipeline format
    #[default]
    Legacy,
    /// Compact serde_json output
    Json,
    /// Indented serde_json output
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(OutputFormat::Legacy),
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            other => Err(ExtractError::InvalidArguments(format!(
                "Unknown output format: {} (expected legacy, json or pretty)",
                other
            ))),
        }
    }
}

/// Render rectangles as a JSON array in the requested layout
pub fn render(rectangles: &[Rectangle], format: OutputFormat) -> ExtractResult<String> {
    match format {
        OutputFormat::Legacy => Ok(render_legacy(rectangles)),
        OutputFormat::Json => Ok(serde_json::to_string(rectangles)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(rectangles)?),
    }
}

/// Render and write to `writer` without a trailing newline
///
/// The document is rendered in full before the first byte is written.
pub fn write_to<W: Write>(
    writer: &mut W,
    rectangles: &[Rectangle],
    format: OutputFormat,
) -> ExtractResult<()> {
    let document = render(rectangles, format)?;
    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Objects are comma-terminated and the final comma becomes a space
fn render_legacy(rectangles: &[Rectangle]) -> String {
    let mut body = String::new();
    for rect in rectangles {
        // Writing into a String cannot fail
        let _ = write!(
            body,
            "{{\"x\":{}, \"y\":{}, \"width\":{}, \"height\":{}}},",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    if body.len() > 1 {
        body.pop();
        body.push(' ');
    }

    format!("[{}]", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_empty() {
        assert_eq!(render(&[], OutputFormat::Legacy).unwrap(), "[]");
    }

    #[test]
    fn test_legacy_single() {
        let rects = [Rectangle::new(0, 0, 4, 2)];
        assert_eq!(
            render(&rects, OutputFormat::Legacy).unwrap(),
            "[{\"x\":0, \"y\":0, \"width\":4, \"height\":2} ]"
        );
    }

    #[test]
    fn test_legacy_multiple() {
        let rects = [Rectangle::new(0, 0, 2, 2), Rectangle::new(3, 0, 2, 2)];
        assert_eq!(
            render(&rects, OutputFormat::Legacy).unwrap(),
            "[{\"x\":0, \"y\":0, \"width\":2, \"height\":2},{\"x\":3, \"y\":0, \"width\":2, \"height\":2} ]"
        );
    }

    #[test]
    fn test_legacy_parses_as_json() {
        let rects = [Rectangle::new(1, 2, 3, 4), Rectangle::new(5, 6, 7, 8)];
        let text = render(&rects, OutputFormat::Legacy).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["height"], 8);
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_compact_json() {
        let rects = [Rectangle::new(1, 2, 3, 4)];
        assert_eq!(
            render(&rects, OutputFormat::Json).unwrap(),
            "[{\"x\":1,\"y\":2,\"width\":3,\"height\":4}]"
        );
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("PRETTY".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buffer = Vec::new();
        write_to(&mut buffer, &[], OutputFormat::Legacy).unwrap();
        assert_eq!(buffer, b"[]");
    }
}
