//! Metrics registry for the exporter's own telemetry.
//!
//! Counter/gauge/summary types with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors to keep deterministic
//! ordering. Summaries keep a bounded window of recent observations and
//! compute quantiles at render time.

use dashmap::DashMap;
use std::collections::VecDeque;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::build_info::BuildInfo;

type LabelKey = Vec<(String, String)>;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_str(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self.map.entry(label_key(labels)).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value, 0 for an unseen label set.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        header(out, name, help, "counter");
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str(r.key()), val);
        }
    }
}

#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<LabelKey, AtomicI64>,
}

impl GaugeVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) { self.add(labels, 1); }
    /// Decrement by 1.
    pub fn dec(&self, labels: &[(&str, &str)]) { self.add(labels, -1); }

    /// Add an arbitrary signed delta.
    pub fn add(&self, labels: &[(&str, &str)], v: i64) {
        let gauge = self.map.entry(label_key(labels)).or_insert_with(|| AtomicI64::new(0));
        gauge.fetch_add(v, Ordering::Relaxed);
    }

    /// Overwrite the value.
    pub fn set(&self, labels: &[(&str, &str)], v: i64) {
        let gauge = self.map.entry(label_key(labels)).or_insert_with(|| AtomicI64::new(0));
        gauge.store(v, Ordering::Relaxed);
    }

    /// Current value, 0 for an unseen label set.
    pub fn get(&self, labels: &[(&str, &str)]) -> i64 {
        self.map
            .get(&label_key(labels))
            .map(|g| g.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        header(out, name, help, "gauge");
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str(r.key()), val);
        }
    }
}

/// Quantiles reported by every summary.
pub const OBJECTIVES: [f64; 6] = [0.25, 0.5, 0.75, 0.9, 0.99, 1.0];

/// Observations kept per series for quantile estimation.
const WINDOW: usize = 512;

#[derive(Default)]
struct SummarySeries {
    count: u64,
    sum: f64,
    window: VecDeque<f64>,
}

impl SummarySeries {
    fn observe(&mut self, v: f64) {
        self.count += 1;
        self.sum += v;
        if self.window.len() == WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(v);
    }

    fn quantiles(&self) -> Vec<(f64, f64)> {
        let mut sorted: Vec<f64> = self.window.iter().copied().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        OBJECTIVES
            .iter()
            .map(|&q| {
                if sorted.is_empty() {
                    return (q, f64::NAN);
                }
                let rank = (q * (sorted.len() - 1) as f64).round() as usize;
                (q, sorted[rank.min(sorted.len() - 1)])
            })
            .collect()
    }
}

#[derive(Default)]
pub struct SummaryVec {
    map: DashMap<LabelKey, Mutex<SummarySeries>>,
}

impl SummaryVec {
    /// Observe a duration in seconds.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let series = self.map.entry(label_key(labels)).or_default();
        // Poisoned mutex means a panic mid-observe; skip the sample instead of panicking again.
        if let Ok(mut s) = series.lock() {
            s.observe(duration.as_secs_f64());
        };
    }

    /// Observation count, 0 for an unseen label set.
    pub fn count(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .and_then(|s| s.lock().ok().map(|s| s.count))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        header(out, name, help, "summary");
        for r in self.map.iter() {
            let Ok(series) = r.value().lock() else { continue };
            let labels = label_str(r.key());
            let prefix = if labels.is_empty() { String::new() } else { format!("{},", labels) };

            for (q, v) in series.quantiles() {
                let _ = writeln!(out, "{}{{{}quantile=\"{}\"}} {}", name, prefix, q, v);
            }
            let _ = writeln!(out, "{}_sum{{{}}} {}", name, labels, series.sum);
            let _ = writeln!(out, "{}_count{{{}}} {}", name, labels, series.count);
        }
    }
}

/// Exporter-level metrics. `/probe` traffic feeds the `http_*` series,
/// probes that name a script feed the `scripts_*` series.
#[derive(Default)]
pub struct ProbeMetrics {
    pub http_requests: CounterVec,
    pub http_duration: SummaryVec,
    pub script_requests: CounterVec,
    pub script_inflight: GaugeVec,
    pub script_duration: SummaryVec,
    pub script_dropped_lines: CounterVec,
    pub build_info: GaugeVec,
}

impl ProbeMetrics {
    pub fn new(build: &BuildInfo) -> Self {
        let m = Self::default();
        m.build_info.set(
            &[
                ("version", build.version),
                ("revision", build.revision),
                ("branch", build.branch),
                ("rustversion", build.rust_version),
                ("builddate", build.build_date),
                ("builduser", build.build_user),
            ],
            1,
        );
        m
    }

    /// Mark a probe of `script` as in flight until the guard drops.
    pub fn track_inflight(self: &Arc<Self>, script: &str) -> InflightGuard {
        self.script_inflight.inc(&[("script", script)]);
        InflightGuard {
            metrics: Arc::clone(self),
            script: script.to_string(),
        }
    }

    /// Render all series in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render(
            "http_requests_total",
            "Total requests for scripts by HTTP result code and method.",
            &mut out,
        );
        self.http_duration.render(
            "http_requests_duration_seconds",
            "A summary of request durations by HTTP result code and method.",
            &mut out,
        );
        self.script_requests.render("scripts_requests_total", "Total requests to a script", &mut out);
        self.script_inflight.render(
            "scripts_requests_inflight",
            "Number of requests in flight to a script",
            &mut out,
        );
        self.script_duration.render(
            "scripts_duration_seconds",
            "A summary of request durations to a script",
            &mut out,
        );
        self.script_dropped_lines.render(
            "scripts_dropped_lines_total",
            "Malformed script output lines dropped from probe responses",
            &mut out,
        );
        self.build_info.render(
            "scripts_build_info",
            "A metric with a constant '1' value labeled by build information.",
            &mut out,
        );
        out
    }
}

/// Decrements the in-flight gauge on drop, including unwinding and
/// cancelled request futures.
pub struct InflightGuard {
    metrics: Arc<ProbeMetrics>,
    script: String,
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.metrics.script_inflight.dec(&[("script", &self.script)]);
    }
}
