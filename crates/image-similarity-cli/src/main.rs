use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::debug;

use image_similarity_core::image_similarity;

#[derive(Parser)]
#[command(name = "image-similarity")]
#[command(about = "Score the visual similarity of two images (0-100)")]
#[command(version)]
struct Cli {
    /// First image (PNG or JPEG)
    image_a: PathBuf,

    /// Second image (PNG or JPEG)
    image_b: PathBuf,

    /// Exit with status 1 when the score falls below this value
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set log level based on verbosity
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let score = image_similarity(&cli.image_a, &cli.image_b).with_context(|| {
        format!(
            "comparing {} and {}",
            cli.image_a.display(),
            cli.image_b.display()
        )
    })?;

    println!("{score}");

    if let Some(threshold) = cli.threshold {
        debug!("threshold {threshold}, score {score}");
        if score < threshold {
            return Ok(ExitCode::from(1));
        }
    }
    Ok(ExitCode::SUCCESS)
}
