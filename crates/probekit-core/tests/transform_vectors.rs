//! Transformer vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

use probekit_core::exposition::Transformer;

#[derive(Debug, Deserialize)]
struct TestVector {
    description: String,
    prefix: String,
    input: String,
    expect: String,
    #[serde(default)]
    dropped: usize,
}

fn load(name: &str) -> Vec<TestVector> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).expect("invalid test vector file")
}

#[test]
fn transform_vectors() {
    for v in load("transform.json") {
        let out = Transformer::new(v.prefix.as_str()).transform(&v.input);
        assert_eq!(out.text, v.expect, "{}", v.description);
        assert_eq!(out.dropped, v.dropped, "{}", v.description);
    }
}

#[test]
fn dropped_lines_shrink_output() {
    let input = "good{} 1\nbad 2\nworse{} x\n";
    let out = Transformer::default().transform(input);
    assert!(out.text.lines().count() < input.lines().count());
    assert_eq!(out.emitted + out.dropped, 3);
}
