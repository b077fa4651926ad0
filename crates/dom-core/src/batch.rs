//! # Value Lists
//!
//! Parses a batch of raw values for bulk checking. Two layouts are
//! accepted: a JSON array of strings, or plain text with one value per
//! line. In the line layout, surrounding whitespace is trimmed, blank
//! lines are skipped and lines starting with `#` are comments.
//!
//! Callers do the reading; this module only parses text already in memory.

use crate::error::DomError;

/// Split `text` into raw values.
///
/// Text whose first non-whitespace character is `[` is parsed as a JSON
/// array of strings, and a malformed array is a [`DomError::Json`].
pub fn parse_value_list(text: &str) -> Result<Vec<String>, DomError> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_layout() {
        let text = "# employees\n111.444.777-35\n\n  52998224725  \n#done\n";
        assert_eq!(
            parse_value_list(text).unwrap(),
            vec!["111.444.777-35", "52998224725"]
        );
    }

    #[test]
    fn json_layout() {
        let text = "  [\"SP\", \" rj \", \"\"]";
        assert_eq!(parse_value_list(text).unwrap(), vec!["SP", " rj ", ""]);
    }

    #[test]
    fn empty_text_has_no_values() {
        assert!(parse_value_list("").unwrap().is_empty());
        assert!(parse_value_list("\n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_value_list("[\"SP\", 12]").unwrap_err();
        assert!(matches!(err, DomError::Json(_)));
        assert!(parse_value_list("[\"SP\"").is_err());
    }
}
