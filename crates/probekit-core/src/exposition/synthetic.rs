//! Synthetic probe metrics that head every probe response.

use std::fmt::Write;
use std::time::Duration;

/// Fixed namespace of the synthetic metrics; independent of the user prefix.
pub const SCRIPT_NAMESPACE: &str = "script";

const SUCCESS_HELP: &str = "# HELP script_success Script exit status (0 = error, 1 = success).";
const SUCCESS_TYPE: &str = "# TYPE script_success gauge";
const DURATION_HELP: &str = "# HELP script_duration_seconds Script execution time, in seconds.";
const DURATION_TYPE: &str = "# TYPE script_duration_seconds gauge";

/// Render a full probe body: synthetic header plus optional transformed output.
///
/// `output` is expected to be newline-terminated exposition text.
pub fn render_probe(success: bool, duration: Duration, output: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{SUCCESS_HELP}");
    let _ = writeln!(out, "{SUCCESS_TYPE}");
    let _ = writeln!(out, "{SCRIPT_NAMESPACE}_success{{}} {}", u8::from(success));
    let _ = writeln!(out, "{DURATION_HELP}");
    let _ = writeln!(out, "{DURATION_TYPE}");
    let _ = writeln!(
        out,
        "{SCRIPT_NAMESPACE}_duration_seconds{{}} {:.6}",
        duration.as_secs_f64()
    );
    if let Some(body) = output {
        out.push_str(body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_body_has_six_lines() {
        let body = render_probe(false, Duration::from_millis(1500), None);
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "script_success{} 0");
        assert_eq!(lines[5], "script_duration_seconds{} 1.500000");
    }

    #[test]
    fn output_is_appended_after_header() {
        let body = render_probe(true, Duration::ZERO, Some("x{} 1\n"));
        assert!(body.contains("script_success{} 1\n"));
        assert!(body.ends_with("script_duration_seconds{} 0.000000\nx{} 1\n"));
    }
}
