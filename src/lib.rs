//! Core library for bingo card generation, rendering and logging.

mod assets;
mod batch;
mod card;
mod graphics;
mod record;

pub use assets::{ResourceError, load_font, load_template};
pub use batch::{BatchOptions, BatchSummary, run_batch};
pub use card::{COLS, COLUMN_LABELS, COLUMN_SPAN, Card, FREE_CELL, ROWS};
pub use graphics::{CardLayout, render_card_image};
pub use record::{format_block, write_block};
