use anyhow::Result;
use clap::{Parser, Subcommand};
use sortsweep_core::{GenerateArgs, SweepArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark a sorting algorithm over growing dataset prefixes and plot
    /// the timings.
    Sweep(SweepArgs),

    /// Generate the three dataset files (sorted, almost sorted, reverse
    /// sorted).
    Generate(GenerateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Sweep(sweep_args) => sweep_args.run(),
        Commands::Generate(generate_args) => generate_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
