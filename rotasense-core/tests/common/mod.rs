//! Common test utilities for integration tests
//!
//! This module provides:
//! - Edge train generators for constant-speed and bouncing encoders
//! - A reference debounce model to check the counter against
//! - Float comparison helpers

#![allow(dead_code)]

use rotasense_core::{EdgeInput, PulseRateEstimator, RateReport, Timestamp};

/// Evenly spaced edges, `count` of them, starting at `start`
pub fn edge_train(start: Timestamp, interval_ms: u64, count: usize) -> Vec<Timestamp> {
    (0..count as u64).map(|i| start + i * interval_ms).collect()
}

/// Edges a disc of `pulses_per_rev` slots produces at a steady `rpm` over
/// `[start, end)`
pub fn constant_speed_edges(
    start: Timestamp,
    end: Timestamp,
    rpm: f64,
    pulses_per_rev: u32,
) -> Vec<Timestamp> {
    let interval_ms = 60_000.0 / (rpm * pulses_per_rev as f64);
    let mut edges = Vec::new();
    let mut n = 0u64;
    loop {
        let t = start + (n as f64 * interval_ms) as u64;
        if t >= end {
            break;
        }
        edges.push(t);
        n += 1;
    }
    edges
}

/// Add `bounces` spurious edges `spacing_ms` apart after every real edge
pub fn with_contact_bounce(edges: &[Timestamp], bounces: u32, spacing_ms: u64) -> Vec<Timestamp> {
    let mut out = Vec::with_capacity(edges.len() * (bounces as usize + 1));
    for &edge in edges {
        out.push(edge);
        for b in 1..=bounces as u64 {
            out.push(edge + b * spacing_ms);
        }
    }
    out
}

/// Count how many edges a refractory filter should accept
///
/// Straight-line model: keep an edge when no period is set, when it is the
/// first one, or when it is strictly more than `period` after the last kept.
pub fn expected_accepted(edges: &[Timestamp], period: Option<u32>) -> u32 {
    let mut last: Option<Timestamp> = None;
    let mut kept = 0;
    for &t in edges {
        let keep = match (period, last) {
            (Some(p), Some(l)) => t.saturating_sub(l) > p as u64,
            _ => true,
        };
        if keep {
            last = Some(t);
            kept += 1;
        }
    }
    kept
}

/// Feed edges through an interrupt-side handle
pub fn fire_all(edges: EdgeInput<'_>, timestamps: &[Timestamp]) -> u32 {
    timestamps.iter().filter(|&&t| edges.on_edge(t)).count() as u32
}

/// Run an estimator over `edges`, sampling every `window_ms` from `start`
/// until `end`, and return every report
pub fn run_windows<const N: usize>(
    estimator: &mut PulseRateEstimator<N>,
    edges: &[Timestamp],
    start: Timestamp,
    end: Timestamp,
    window_ms: u64,
) -> Vec<RateReport> {
    let mut reports = Vec::new();
    let mut next = 0;
    let mut boundary = start + window_ms;
    while boundary <= end {
        while next < edges.len() && edges[next] < boundary {
            estimator.on_edge(edges[next]);
            next += 1;
        }
        reports.push(estimator.sample_window(boundary));
        boundary += window_ms;
    }
    reports
}

/// Relative float comparison
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance * scale,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
