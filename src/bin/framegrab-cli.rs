use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use env_logger::Env;

const CLI_AFTER_HELP: &str = "Examples:\n  framegrab input.mp4 frames\n  framegrab videos/ frames --interval 5\n  framegrab input.mp4 frames --verbose";

#[derive(Debug, Parser)]
#[command(
    name = "framegrab",
    version,
    about = "Grab still frames from videos at fixed time intervals",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input video file, or a folder of videos.
    input: PathBuf,

    /// Output folder for the extracted frames.
    output: PathBuf,

    /// Sampling interval in seconds.
    #[arg(long, default_value_t = 10.0)]
    interval: f64,

    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.input.is_dir() {
        let report = framegrab::sample_folder(&cli.input, &cli.output, cli.interval)?;
        if report.failed() > 0 {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("{} video(s) could not be processed", report.failed()).yellow()
            );
        }
        println!(
            "{} {}",
            "success:".green().bold(),
            format!(
                "Extracted {} frame(s) from {} video(s) to {}",
                report.frames_saved(),
                report.succeeded(),
                cli.output.display()
            )
            .green()
        );
    } else {
        let summary = framegrab::sample(&cli.input, &cli.output, cli.interval)?;
        println!(
            "{} {}",
            "success:".green().bold(),
            format!(
                "Extracted {} frame(s) to {}",
                summary.saved,
                cli.output.display()
            )
            .green()
        );
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
