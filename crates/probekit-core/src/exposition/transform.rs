//! Script stdout -> exposition text.
//!
//! Order-preserving filter/map: directives pass through untouched, samples
//! get the prefix and are re-validated, everything malformed is dropped.

use super::line::{classify, split_sample, MetricLine};
use super::value;

/// Output of one transformation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Newline-terminated exposition lines.
    pub text: String,
    /// Lines written to `text`.
    pub emitted: usize,
    /// Sample candidates that failed tokenizing or value validation.
    pub dropped: usize,
}

/// Applies an optional metric-name prefix to script output.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    prefix: String,
}

impl Transformer {
    /// `prefix` is used as-is; callers add any `_` separator.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Transform one candidate sample line. `None` means drop.
    pub fn sample(&self, line: &str) -> Option<String> {
        let candidate = format!("{}{}", self.prefix, line);
        let sample = split_sample(&candidate)?;

        let normalized = value::normalize(sample.value);
        if !value::is_numeric(&normalized) {
            return None;
        }

        Some(format!("{}{}", sample.segment, normalized))
    }

    /// Transform a whole capture.
    pub fn transform(&self, raw: &str) -> Transformed {
        let mut out = Transformed::default();

        for raw_line in raw.lines() {
            let emitted = match classify(raw_line) {
                MetricLine::Blank => continue,
                MetricLine::Directive(d) => d.to_string(),
                MetricLine::Candidate(c) => match self.sample(c) {
                    Some(s) => s,
                    None => {
                        out.dropped += 1;
                        continue;
                    }
                },
            };
            out.text.push_str(&emitted);
            out.text.push('\n');
            out.emitted += 1;
        }

        if out.dropped > 0 {
            tracing::debug!(dropped = out.dropped, prefix = %self.prefix, "dropped malformed sample lines");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_samples_only() {
        let t = Transformer::new("p_");
        let out = t.transform("# HELP m help\n# TYPE m gauge\nm{l=\"v\"} 123.45\n");
        assert_eq!(
            out.text,
            "# HELP m help\n# TYPE m gauge\np_m{l=\"v\"} 123.45\n"
        );
        assert_eq!(out.emitted, 3);
        assert_eq!(out.dropped, 0);
    }

    #[test]
    fn normalizes_decimal_comma() {
        let t = Transformer::default();
        assert_eq!(t.sample("m{} 123,45").as_deref(), Some("m{} 123.45"));
    }

    #[test]
    fn drops_malformed_and_keeps_order() {
        let t = Transformer::default();
        let raw = "a{} 1\nno_labels 2\n\n  \nb{} nope\nc{x=\"y\"} 3\n";
        let out = t.transform(raw);
        assert_eq!(out.text, "a{} 1\nc{x=\"y\"} 3\n");
        assert_eq!(out.emitted, 2);
        assert_eq!(out.dropped, 2);
    }

    #[test]
    fn invalid_prefix_drops_every_sample() {
        let t = Transformer::new("bad-prefix_");
        let out = t.transform("# TYPE m gauge\nm{} 1\n");
        assert_eq!(out.text, "# TYPE m gauge\n");
        assert_eq!(out.dropped, 1);
    }
}
