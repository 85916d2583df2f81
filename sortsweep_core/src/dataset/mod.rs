//! Dataset shapes, loading and generation.
//!
//! A dataset is a plain text file of [`DATASET_LEN`] whitespace separated
//! ASCII integers, no header. Three shapes exist, one file per shape, so the
//! sweep can show how each algorithm reacts to already sorted, almost sorted
//! and reverse sorted input.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use rand::Rng;

use crate::sweep::DATASET_LEN;

/// The shape of the dataset a sweep sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Ascending values.
    Sorted,
    /// Ascending values with a sprinkle of adjacent swaps.
    AlmostSorted,
    /// Descending values.
    ReverseSorted,
}

impl Shape {
    /// Resolves a raw numeric selector (as typed at the interactive prompt)
    /// into a shape. Only `1`, `2` and `3` are accepted.
    pub fn from_selector(selector: u32) -> Option<Shape> {
        match selector {
            1 => Some(Shape::Sorted),
            2 => Some(Shape::AlmostSorted),
            3 => Some(Shape::ReverseSorted),
            _ => None,
        }
    }

    /// Canonical file name for this shape's dataset.
    pub fn file_name(self) -> &'static str {
        match self {
            Shape::Sorted => "sorted.txt",
            Shape::AlmostSorted => "almostsorted.txt",
            Shape::ReverseSorted => "reverse.txt",
        }
    }
}

/// Loads a dataset file, insisting on exactly [`DATASET_LEN`] values.
pub fn load(path: &Path) -> Result<Vec<i32>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;
    let values = parse(&text)
        .with_context(|| format!("failed to parse dataset file {}", path.display()))?;
    if values.len() != DATASET_LEN {
        bail!(
            "dataset file {} holds {} values, expected {DATASET_LEN}",
            path.display(),
            values.len()
        );
    }
    Ok(values)
}

/// Parses whitespace separated ASCII integers. Any token that is not an
/// integer fails the whole parse.
pub fn parse(text: &str) -> Result<Vec<i32>> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value = token
            .parse::<i32>()
            .with_context(|| format!("invalid integer {token:?}"))?;
        values.push(value);
    }
    Ok(values)
}

/// Generates `len` values of the given shape.
///
/// The almost sorted shape starts from ascending values and applies one
/// random adjacent swap per hundred elements, enough to disturb the order
/// without hiding its overall trend.
pub fn generate(shape: Shape, len: usize, rng: &mut impl Rng) -> Vec<i32> {
    match shape {
        Shape::Sorted => (0..len as i32).collect(),
        Shape::ReverseSorted => (0..len as i32).rev().collect(),
        Shape::AlmostSorted => {
            let mut values = (0..len as i32).collect::<Vec<_>>();
            if len > 1 {
                for _ in 0..(len / 100).max(1) {
                    let i = rng.gen_range(1..len);
                    values.swap(i - 1, i);
                }
            }
            values
        }
    }
}

/// Writes `values` to the canonical file for `shape` under `dir`, one value
/// per line, and returns the path written.
pub fn write(dir: &Path, shape: Shape, values: &[i32]) -> Result<PathBuf> {
    let path = dir.join(shape.file_name());
    let mut text = String::new();
    for value in values {
        text.push_str(&value.to_string());
        text.push('\n');
    }
    fs::write(&path, text)
        .with_context(|| format!("failed to write dataset file {}", path.display()))?;
    Ok(path)
}
