//! Front matter parsing for article headers.

use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing opening front matter delimiter")]
    MissingDelimiter,

    #[error("failed to read article header: {0}")]
    Io(#[from] std::io::Error),
}

/// Opens and closes the header block.
const DELIMITER: &str = "---";

/// Parse the leading `key: value` header block from a reader.
///
/// The first line must be the `---` delimiter. Each following line is split
/// on its first colon (values may contain further colons); key and value are
/// trimmed of surrounding whitespace, and a repeated key overwrites the
/// earlier value. Lines without a colon are skipped. Consumption stops at
/// the closing delimiter, leaving the rest of the stream in the reader for
/// the caller to treat as the article body. A header that runs to
/// end-of-stream without a closing delimiter is accepted as-is.
///
/// # Example
///
/// ```
/// use quill_core::frontmatter::parse_front_matter;
/// use std::io::BufReader;
///
/// let mut input = BufReader::new("---\ntitle: Hello\n---\nbody".as_bytes());
/// let fields = parse_front_matter(&mut input).unwrap();
/// assert_eq!(fields["title"], "Hello");
/// ```
pub fn parse_front_matter<R: BufRead>(
    reader: &mut R,
) -> Result<HashMap<String, String>, FrontMatterError> {
    let mut fields = HashMap::new();
    let mut line = String::new();

    reader.read_line(&mut line)?;
    if !line.starts_with(DELIMITER) {
        return Err(FrontMatterError::MissingDelimiter);
    }

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // End-of-stream closes the header too.
            break;
        }

        if line.starts_with(DELIMITER) {
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        fields.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Read};

    fn parse(input: &str) -> Result<HashMap<String, String>, FrontMatterError> {
        parse_front_matter(&mut BufReader::new(input.as_bytes()))
    }

    #[test]
    fn test_parse_well_formed_header() {
        let fields = parse("---\ntitle: Hello World\nauthor: Jane\n---\nbody\n").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["title"], "Hello World");
        assert_eq!(fields["author"], "Jane");
    }

    #[test]
    fn test_value_may_contain_colons() {
        let fields = parse("---\nlink: https://example.com/a:b\n---\n").unwrap();
        assert_eq!(fields["link"], "https://example.com/a:b");
    }

    #[test]
    fn test_keys_and_values_are_trimmed() {
        let fields = parse("---\n  title \t:   spaced out \t\n---\n").unwrap();
        assert_eq!(fields["title"], "spaced out");
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let fields = parse("---\nnot a field\ntitle: ok\n---\n").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["title"], "ok");
    }

    #[test]
    fn test_last_write_wins_for_repeated_keys() {
        let fields = parse("---\ntitle: first\ntitle: second\n---\n").unwrap();
        assert_eq!(fields["title"], "second");
    }

    #[test]
    fn test_missing_opening_delimiter() {
        let result = parse("title: Hello\n---\n");
        assert!(matches!(result, Err(FrontMatterError::MissingDelimiter)));
    }

    #[test]
    fn test_unterminated_header_ends_at_eof() {
        let fields = parse("---\ntitle: Hello\nauthor: Jane\n").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["author"], "Jane");
    }

    #[test]
    fn test_body_is_left_in_the_reader() {
        let mut reader = BufReader::new("---\ntitle: t\n---\n# Hi\nSome markdown.\n".as_bytes());
        parse_front_matter(&mut reader).unwrap();

        let mut body = String::new();
        reader.read_to_string(&mut body).unwrap();
        assert_eq!(body, "# Hi\nSome markdown.\n");
    }

    #[test]
    fn test_empty_header() {
        let fields = parse("---\n---\nbody\n").unwrap();
        assert!(fields.is_empty());
    }
}
