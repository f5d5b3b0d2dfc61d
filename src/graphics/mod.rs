//! Rendering helpers for producing PNG output of bingo cards.

mod paint;

pub use paint::{CardLayout, render_card_image};
