use axum::extract::Query;
use axum::http::Uri;

use probekit_core::error::{ProbeError, Result};

/// Decoded query string, in order, duplicates kept.
#[derive(Debug, Default, Clone)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Undecodable query strings yield no pairs.
    pub fn from_uri(uri: &Uri) -> Self {
        Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| Self(pairs))
            .unwrap_or_default()
    }

    /// First value for `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Full,
    /// `output=ignore`: only the synthetic success/duration lines.
    Ignore,
}

/// Per-request probe parameters.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub script: String,
    /// Empty, or the `prefix` parameter plus a trailing `_`.
    pub prefix: String,
    /// Values of the parameters named in `params`, in listed order.
    pub extra_args: Vec<String>,
    pub output: OutputMode,
}

impl ProbeRequest {
    pub fn from_query(q: &QueryPairs) -> Result<Self> {
        let script = q.get("script");
        if script.is_empty() {
            return Err(ProbeError::BadRequest("Script parameter is missing".into()));
        }

        let prefix = match q.get("prefix") {
            "" => String::new(),
            p => format!("{p}_"),
        };

        let extra_args = match q.get("params") {
            "" => Vec::new(),
            names => names.split(',').map(|name| q.get(name).to_string()).collect(),
        };

        let output = if q.get("output") == "ignore" {
            OutputMode::Ignore
        } else {
            OutputMode::Full
        };

        Ok(Self {
            script: script.to_string(),
            prefix,
            extra_args,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn query(s: &str) -> QueryPairs {
        QueryPairs::from_uri(&format!("/probe?{s}").parse::<Uri>().unwrap())
    }

    #[test]
    fn script_is_required() {
        let err = ProbeRequest::from_query(&query("prefix=x")).unwrap_err();
        assert_eq!(err.to_string(), "bad request: Script parameter is missing");
        assert!(ProbeRequest::from_query(&query("script=")).is_err());
    }

    #[test]
    fn params_resolve_in_listed_order() {
        let req = ProbeRequest::from_query(&query(
            "script=s&params=b,a,missing&a=1&b=two%20words&prefix=node&output=ignore",
        ))
        .unwrap();
        assert_eq!(req.script, "s");
        assert_eq!(req.prefix, "node_");
        assert_eq!(req.extra_args, vec!["two words", "1", ""]);
        assert_eq!(req.output, OutputMode::Ignore);
    }

    #[test]
    fn first_value_wins() {
        let q = query("script=a&script=b");
        assert_eq!(q.get("script"), "a");
        assert_eq!(q.get("nope"), "");
    }
}
