//! Terminal rendering of a [`TimingSeries`].
//!
//! One column per sweep point, scaled to the tallest value in the series,
//! followed by a summary table. The chart is the lab's payoff: quadratic
//! algorithms bend upward, merge sort stays flat.

use colored::Colorize;
use prettytable::{row, Table};

use crate::sweep::TimingSeries;

/// Rows of the plotted chart body.
const CHART_HEIGHT: u64 = 16;

/// Renders the series to standard output.
pub fn render(series: &TimingSeries) {
    println!(
        "{} {}",
        "Sweep results ->".bold().underline().blue(),
        format!("{} points", series.len()).bold()
    );
    println!();
    print!("{}", draw(series));
    println!();
    summary(series).printstd();
}

/// Draws the chart body as a string, one text row per chart row, tallest
/// values at the top. Kept pure so it can be checked without a terminal.
pub(crate) fn draw(series: &TimingSeries) -> String {
    let values = series.values();
    let max = series.max().max(1);

    let mut out = String::new();
    for row in (1..=CHART_HEIGHT).rev() {
        // A column reaches this row once its value clears the row threshold.
        let threshold = (max * row).div_ceil(CHART_HEIGHT);
        let label = if row == CHART_HEIGHT {
            format!("{max:>6}")
        } else {
            " ".repeat(6)
        };
        out.push_str(&label);
        out.push_str(" |");
        for &value in values {
            out.push(if value >= threshold && value > 0 { '*' } else { ' ' });
        }
        out.push('\n');
    }
    out.push_str(&format!("{:>6} +{}\n", 0, "-".repeat(values.len())));
    out.push_str(&format!(
        "{:>6}  input size 1..={}, y in ms\n",
        "", values.len()
    ));
    out
}

fn summary(series: &TimingSeries) -> Table {
    let values = series.values();
    let min = values.iter().copied().min().unwrap_or(0);
    let last = values.last().copied().unwrap_or(0);
    let total: u64 = values.iter().sum();

    let mut table = Table::new();
    table.add_row(row![
        "Points".bold(),
        "Min (ms)".bold(),
        "Max (ms)".bold(),
        "Last (ms)".bold(),
        "Total (ms)".bold()
    ]);
    table.add_row(row![
        series.len(),
        min,
        series.max(),
        last,
        total
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorters::MergeSorter;
    use crate::sweep::run_sweep_points;

    #[test]
    fn chart_has_a_row_per_height_plus_axes() {
        let dataset = (0..20).rev().collect::<Vec<_>>();
        let series = run_sweep_points(&dataset, &MergeSorter, 20).unwrap();
        let chart = draw(&series);
        assert_eq!(chart.lines().count(), CHART_HEIGHT as usize + 2);
    }

    #[test]
    fn columns_match_series_length() {
        let dataset = vec![3, 1, 2, 5, 4];
        let series = run_sweep_points(&dataset, &MergeSorter, 5).unwrap();
        let chart = draw(&series);
        let body_row = chart.lines().next().unwrap();
        // Gutter (6) + " |" (2) + one column per point.
        assert_eq!(body_row.chars().count(), 6 + 2 + series.len());
    }

    #[test]
    fn all_zero_series_plots_nothing() {
        let dataset = vec![1, 2, 3];
        let series = run_sweep_points(&dataset, &MergeSorter, 3).unwrap();
        // Sorting three integers takes well under a millisecond; the chart
        // body must stay blank rather than divide by zero.
        if series.max() == 0 {
            let chart = draw(&series);
            assert!(!chart.contains('*'));
        }
    }
}
