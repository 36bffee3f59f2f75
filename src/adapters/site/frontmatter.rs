//! Front matter parser
//!
//! Splits a `---` delimited YAML block off the top of a file and
//! deserializes it into [`FrontMatter`].

use crate::core::models::FrontMatter;

use super::SourceError;

/// Split a file into its raw front matter and body
///
/// The file must open with a `---` line. The block ends at the next line
/// that is exactly `---` or `...`; everything after it is body.
pub fn split(content: &str) -> Result<(&str, &str), SplitError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(SplitError::Missing)?;
    if first.trim_end() != "---" {
        return Err(SplitError::Missing);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        let marker = line.trim_end();
        if marker == "---" || marker == "..." {
            return Ok((&content[start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(SplitError::Unterminated)
}

/// Why a file could not be split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The file does not start with `---`
    Missing,
    /// No closing `---` line
    Unterminated,
}

/// Deserialize a raw YAML block
///
/// An empty or comment-only block yields default front matter.
pub fn parse(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    let meaningful = yaml
        .lines()
        .any(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'));
    if !meaningful {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}

/// Split and parse a whole file, attributing failures to `path`
pub fn read(path: &std::path::Path, content: &str) -> Result<(FrontMatter, String), SourceError> {
    let (yaml, body) = split(content).map_err(|e| match e {
        SplitError::Missing => SourceError::MissingFrontMatter(path.to_path_buf()),
        SplitError::Unterminated => SourceError::UnterminatedFrontMatter(path.to_path_buf()),
    })?;
    let metadata = parse(yaml).map_err(|source| SourceError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((metadata, body.to_string()))
}
