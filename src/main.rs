use anyhow::{Context, Result, anyhow};
use bingogen::{BatchOptions, CardLayout, run_batch};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::{self, Write};
use std::path::PathBuf;

/// Batch bingo card generator (PNG images + shared text log)
#[derive(Parser, Debug)]
#[command(
    name = "bingogen",
    version,
    about = "Generate bingo cards as PNG images plus a text log"
)]
struct Cli {
    /// Number of cards to generate (prompted interactively when omitted)
    count: Option<usize>,

    /// Background template image
    #[arg(long, default_value = "img/carta.png")]
    template: PathBuf,

    /// TrueType/OpenType font used for the numbers
    #[arg(long, default_value = "arial_black.ttf")]
    font: PathBuf,

    /// Font size in pixels
    #[arg(long, default_value_t = 100.0)]
    font_px: f32,

    /// Directory under which the timestamped batch directory is created
    #[arg(long, short = 'o', default_value = ".")]
    out: PathBuf,

    /// Seed for the random source (non-reproducible cards when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let count = match cli.count {
        Some(count) => count,
        None => prompt_count()?,
    };

    let options = BatchOptions {
        out_root: cli.out,
        template: cli.template,
        font: cli.font,
        font_px: cli.font_px,
        layout: CardLayout::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let summary = run_batch(count, &options, &mut rng)?;
    println!(
        "Generated {} card(s) in {}",
        summary.cards,
        summary.dir.display()
    );
    Ok(())
}

/// Ask the operator for the card count, rejecting anything that is not a
/// non-negative integer before any resource is opened.
fn prompt_count() -> Result<usize> {
    print!("Enter the number of bingo cards to generate: ");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read card count from stdin")?;
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| anyhow!("'{}' is not a valid card count", trimmed))
}
