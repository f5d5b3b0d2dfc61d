//! Batch runner: drives generate → render → record for each card.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use rand::Rng;

use crate::assets::{load_font, load_template};
use crate::card::Card;
use crate::graphics::{CardLayout, render_card_image};
use crate::record::write_block;

/// Timestamp format used for the batch directory and log file names.
const TIMESTAMP_FORMAT: &str = "%d-%b-%Y-%H-%M-%S";

/// Inputs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Parent directory under which the timestamped batch directory is made.
    pub out_root: PathBuf,
    /// Background template image.
    pub template: PathBuf,
    /// TTF/OTF font used for the numbers.
    pub font: PathBuf,
    /// Font size in pixels.
    pub font_px: f32,
    pub layout: CardLayout,
}

/// Where a finished batch ended up.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub dir: PathBuf,
    pub log: PathBuf,
    pub cards: usize,
}

/// Generate `count` cards into a fresh timestamped directory.
///
/// Template and font are loaded up front, so a missing resource aborts
/// before any card-level work. One shared log handle is held for the whole
/// run and released on every exit path; any mid-batch I/O error aborts the
/// batch, leaving already-written artifacts in place.
pub fn run_batch<R: Rng + ?Sized>(
    count: usize,
    options: &BatchOptions,
    rng: &mut R,
) -> Result<BatchSummary> {
    let template = load_template(&options.template)?;
    let font = load_font(&options.font)?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let dir = options.out_root.join(&timestamp);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create batch directory {}", dir.display()))?;

    let log_path = dir.join(format!("bingos{timestamp}.txt"));
    let log = File::create(&log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;
    let mut log = BufWriter::new(log);

    for index in 0..count {
        let card = Card::generate(rng);
        let rendered = render_card_image(&card, &template, &font, options.font_px, &options.layout);
        let image_path = dir.join(format!("bingo{index:03}.png"));
        rendered
            .save(&image_path)
            .with_context(|| format!("failed to write {}", image_path.display()))?;
        write_block(&mut log, &card, index)
            .with_context(|| format!("failed to append card {index:03} to {}", log_path.display()))?;
        println!("Bingo {index:03} generado");
    }

    log.flush()
        .with_context(|| format!("failed to flush {}", log_path.display()))?;

    Ok(BatchSummary {
        dir,
        log: log_path,
        cards: count,
    })
}
