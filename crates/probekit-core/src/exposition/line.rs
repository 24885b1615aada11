//! Line classification and sample tokenizing.
//!
//! A sample is `name{labels}<ws>value`. The label set is taken greedily: it
//! runs from the first `{` to the last `}` that is followed by whitespace, so
//! label values may themselves contain braces.

/// One trimmed line of script output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricLine<'a> {
    /// Empty after trimming.
    Blank,
    /// `#`-prefixed HELP/TYPE/comment line, passed through verbatim.
    Directive(&'a str),
    /// Anything else; a sample candidate (not yet prefixed or validated).
    Candidate(&'a str),
}

/// A tokenized sample: the `name{labels}<ws>` segment and the raw value text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<'a> {
    /// Name, label set, and the whitespace run that follows it.
    pub segment: &'a str,
    /// Everything after the segment (value and optional timestamp).
    pub value: &'a str,
}

/// Classify one raw line (trims surrounding whitespace first).
pub fn classify(raw: &str) -> MetricLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        MetricLine::Blank
    } else if line.starts_with('#') {
        MetricLine::Directive(line)
    } else {
        MetricLine::Candidate(line)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split a (prefixed) sample line into segment and value.
///
/// Returns `None` when the name is empty, the label set is missing, or no
/// `}` is followed by whitespace.
pub fn split_sample(line: &str) -> Option<Sample<'_>> {
    let name_end = line
        .char_indices()
        .find(|(_, c)| !is_name_char(*c))
        .map(|(i, _)| i)?;
    if name_end == 0 {
        return None;
    }

    let rest = &line[name_end..];
    if !rest.starts_with('{') {
        return None;
    }

    // greedy: last '}' that is followed by whitespace
    let close = rest
        .char_indices()
        .rev()
        .filter(|(_, c)| *c == '}')
        .map(|(i, _)| i)
        .find(|&i| {
            rest[i + 1..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace)
        })?;

    let after_close = &rest[close + 1..];
    let ws_len = after_close.len() - after_close.trim_start().len();
    let seg_end = name_end + close + 1 + ws_len;

    Some(Sample {
        segment: &line[..seg_end],
        value: &line[seg_end..],
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn classify_trims_and_tags() {
        assert_eq!(classify("   "), MetricLine::Blank);
        assert_eq!(
            classify("  # HELP x y "),
            MetricLine::Directive("# HELP x y")
        );
        assert_eq!(classify(" a{} 1\r"), MetricLine::Candidate("a{} 1"));
    }

    #[test]
    fn split_keeps_whitespace_run_in_segment() {
        let s = split_sample("foo{a=\"b\"}  \t42").unwrap();
        assert_eq!(s.segment, "foo{a=\"b\"}  \t");
        assert_eq!(s.value, "42");
    }

    #[test]
    fn split_takes_last_closing_brace() {
        let s = split_sample("foo{a=\"} x\"} 1").unwrap();
        assert_eq!(s.segment, "foo{a=\"} x\"} ");
        assert_eq!(s.value, "1");
    }

    #[test]
    fn split_rejects_missing_parts() {
        assert!(split_sample("foo 1").is_none());
        assert!(split_sample("{a=\"b\"} 1").is_none());
        assert!(split_sample("foo{a=\"b\"}1").is_none());
        assert!(split_sample("foo-bar{} 1").is_none());
        assert!(split_sample("foo").is_none());
    }
}
