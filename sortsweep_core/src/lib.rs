//! # Introduction
//!
//! A lab style benchmark of three classical sorting algorithms. The crate
//! sorts growing prefixes of a fixed 10,000 integer dataset, times every run
//! and plots how each algorithm's runtime grows.
//!
//! - [`sorters`] holds bubble, selection and merge sort behind one trait.
//! - [`dataset`] loads and generates the three dataset shapes.
//! - [`sweep`] is the benchmark driver producing a [`sweep::TimingSeries`].
//! - [`chart`] renders the series as a terminal line chart.
//!
//! Install the `sortsweep` binary and run `sortsweep sweep` to try it.

pub mod chart;
pub mod dataset;
pub mod sorters;
pub mod sweep;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use dataset::Shape;
use sorters::Algorithm;

/// Arguments of the `sweep` subcommand.
///
/// Both selectors are optional on the command line. Whichever is missing is
/// asked for interactively with the classic 1/2/3 prompt, re-asking until a
/// valid selector comes in.
#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Dataset shape to sort.
    #[arg(long, value_enum)]
    shape: Option<Shape>,

    /// Sorting algorithm to benchmark.
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Directory holding the dataset files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

impl SweepArgs {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        let shape = match self.shape {
            Some(shape) => shape,
            None => prompt_selector(
                &mut input,
                "Enter the type of data to sort (1 for sorted, 2 for almost sorted, 3 for reverse sorted):",
                Shape::from_selector,
            )?,
        };
        let algorithm = match self.algorithm {
            Some(algorithm) => algorithm,
            None => prompt_selector(
                &mut input,
                "Enter the sorting algorithm to use (1 for bubble sort, 2 for selection sort, 3 for merge sort):",
                Algorithm::from_selector,
            )?,
        };

        let path = self.data_dir.join(shape.file_name());
        let dataset = dataset::load(&path)?;

        let sorter = algorithm.sorter();
        println!("{} {}", "Sweeping with ->".bold().blue(), sorter.name().bold());

        match sweep::run_sweep(&dataset, sorter) {
            Ok(series) => {
                chart::render(&series);
                Ok(())
            }
            Err(e) => {
                // Failure goes to stdout, like the rest of the lab's chatter.
                println!("{}", "Sorting failed".red().bold());
                Err(e).context("sweep aborted")
            }
        }
    }
}

/// Arguments of the `generate` subcommand.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory to write the dataset files into.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("failed to create dataset directory {}", self.data_dir.display())
        })?;

        let mut rng = rand::thread_rng();
        for shape in [Shape::Sorted, Shape::AlmostSorted, Shape::ReverseSorted] {
            let values = dataset::generate(shape, sweep::DATASET_LEN, &mut rng);
            let path = dataset::write(&self.data_dir, shape, &values)?;
            println!("wrote {}", path.display());
        }
        Ok(())
    }
}

/// Asks for a numeric selector until `resolve` accepts one.
///
/// Resolution itself lives in the pure `from_selector` functions; this loop
/// only shuttles lines from `input` into them, so the contract stays testable
/// without a terminal attached.
fn prompt_selector<T>(
    input: &mut impl BufRead,
    prompt: &str,
    resolve: impl Fn(u32) -> Option<T>,
) -> Result<T> {
    loop {
        println!("{prompt}");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input
            .read_line(&mut line)
            .context("failed to read selection")?
            == 0
        {
            bail!("input closed before a selection was made");
        }
        match line.trim().parse::<u32>().ok().and_then(&resolve) {
            Some(value) => return Ok(value),
            None => println!("Please enter 1, 2, or 3"),
        }
    }
}
