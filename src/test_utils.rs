//! Test utilities for building courses and catalog fixtures
//!
//! Shared by unit tests, integration tests and the criterion benches.

#![cfg(any(test, feature = "benchmark"))]

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::catalog::{NormalizedCourse, RawCourse};
use crate::parser::TimeParser;

/// Descriptor lines drawn on by [`synthetic_catalog`], including a few that
/// the parser drops.
pub const DESCRIPTOR_POOL: &[&str] = &[
    "五 / 6,7 / B 206",
    "三/3-4/資電101",
    "Mon / 6-8 / E 219",
    "二/3-4/RoomA",
    "二/6,7,8/RoomB",
    "7/3,5/RoomC",
    "Sun/8~6/Lab",
    "Thu / 1，2 / 人言 301",
    "四/9—10/工學館",
    "天/2/Gym",
    "Fri/11-12",
    "Foo/1/Room",
    "Mon/x/Room",
    "六",
];

/// Install a `tracing` subscriber honouring `RUST_LOG`, once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Raw course with the given descriptor lines.
pub fn raw_course(seq: &str, credits: u32, times: &[&str]) -> RawCourse {
    RawCourse {
        seq: seq.to_string(),
        code: format!("C{seq}"),
        title: format!("Course {seq}"),
        credits,
        times: Some(times.iter().map(|t| t.to_string()).collect()),
        ..Default::default()
    }
}

/// Normalized course with the given descriptor lines, default parser.
pub fn course(seq: &str, credits: u32, times: &[&str]) -> NormalizedCourse {
    raw_course(seq, credits, times).normalize(&TimeParser::default())
}

/// Deterministic catalog of `size` records cycling through [`DESCRIPTOR_POOL`].
///
/// Every seventh record has `times: null`.
pub fn synthetic_catalog(size: usize) -> Vec<RawCourse> {
    (0..size)
        .map(|i| {
            let seq = format!("{:04}", i);
            if i % 7 == 6 {
                return RawCourse { times: None, ..raw_course(&seq, 2, &[]) };
            }
            let lines: Vec<&str> = (0..1 + i % 3)
                .map(|k| DESCRIPTOR_POOL[(i * 5 + k * 3) % DESCRIPTOR_POOL.len()])
                .collect();
            raw_course(&seq, 1 + (i % 4) as u32, &lines)
        })
        .collect()
}

/// Write `courses` as a JSON catalog file under `dir`.
pub fn write_catalog_fixture(dir: &Path, courses: &[RawCourse]) -> anyhow::Result<PathBuf> {
    let path = dir.join("courses.json");
    let json = serde_json::to_string_pretty(courses).context("Serializing catalog fixture")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Writing catalog fixture to {}", path.display()))?;
    Ok(path)
}
