//! Text log rendition of generated cards.

use crate::card::{COLS, COLUMN_LABELS, Card, ROWS};
use std::fmt::Write as _;
use std::io;

/// Fixed-width cell used in the log; all values are at most two digits.
const CELL_WIDTH: usize = 2;
/// Gap between log columns.
const GAP: &str = "  ";
/// Dash line delimiting cards within the shared log.
const SEPARATOR_LEN: usize = 32;

/// Format one card as its log block.
///
/// Output is a pure function of (card, index): header line `bingo{index:03}`,
/// the `B I N G O` label line, five data rows with values right-aligned to
/// two characters (two blanks at the free cell), and a trailing dash line.
pub fn format_block(card: &Card, index: usize) -> String {
    let mut out = String::new();
    writeln!(&mut out, "bingo{:03}", index).ok();

    let labels = COLUMN_LABELS
        .iter()
        .map(|label| format!("{:>CELL_WIDTH$}", label))
        .collect::<Vec<_>>()
        .join(GAP);
    writeln!(&mut out, "{}", labels).ok();

    for row in 0..ROWS {
        let cells = (0..COLS)
            .map(|col| match card.value(col, row) {
                Some(value) => format!("{:>CELL_WIDTH$}", value),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect::<Vec<_>>()
            .join(GAP);
        writeln!(&mut out, "{}", cells).ok();
    }

    writeln!(&mut out, "{}", "-".repeat(SEPARATOR_LEN)).ok();
    out
}

/// Append one card's block to the shared log handle.
///
/// The handle stays open across cards; its lifecycle belongs to the batch
/// runner.
pub fn write_block<W: io::Write>(writer: &mut W, card: &Card, index: usize) -> io::Result<()> {
    writer.write_all(format_block(card, index).as_bytes())
}
