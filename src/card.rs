use anyhow::{Result, anyhow};
use rand::Rng;
use rand::seq::index;
use std::ops::RangeInclusive;

pub const COLS: usize = 5;
pub const ROWS: usize = 5;

/// Width of each column's numeric range (column k draws from 1+15k..=15+15k).
pub const COLUMN_SPAN: u8 = 15;

/// Letters printed above the five columns.
pub const COLUMN_LABELS: [char; COLS] = ['B', 'I', 'N', 'G', 'O'];

/// (column, row) of the free cell, left blank on every card.
pub const FREE_CELL: (usize, usize) = (2, 2);

/// One bingo card: five columns of five numbers, column-major.
///
/// The free cell stores a sampled value like any other position, but it is
/// masked out by [`Card::value`], so neither rendering nor logging ever sees
/// it as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    columns: [[u8; ROWS]; COLS],
}

impl Card {
    /// Draw a fresh card from the supplied random source.
    ///
    /// Each column is a uniform sample without replacement from its 15-value
    /// range; the sampling order becomes the row order (rows are not sorted).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut columns = [[0u8; ROWS]; COLS];
        for (col, cells) in columns.iter_mut().enumerate() {
            let base = 1 + col as u8 * COLUMN_SPAN;
            for (row, offset) in index::sample(rng, COLUMN_SPAN as usize, ROWS)
                .into_iter()
                .enumerate()
            {
                cells[row] = base + offset as u8;
            }
        }
        Self { columns }
    }

    /// Build a card from explicit columns, enforcing the range and
    /// distinctness invariants.
    pub fn from_columns(columns: [[u8; ROWS]; COLS]) -> Result<Self> {
        for (col, cells) in columns.iter().enumerate() {
            let range = Self::column_range(col);
            for &value in cells {
                if !range.contains(&value) {
                    return Err(anyhow!(
                        "value {} outside column {} range {}..={}",
                        value,
                        COLUMN_LABELS[col],
                        range.start(),
                        range.end()
                    ));
                }
            }
            for i in 0..ROWS {
                for j in i + 1..ROWS {
                    if cells[i] == cells[j] {
                        return Err(anyhow!(
                            "duplicate value {} in column {}",
                            cells[i],
                            COLUMN_LABELS[col]
                        ));
                    }
                }
            }
        }
        Ok(Self { columns })
    }

    /// Numeric value at (column, row), or `None` at the free cell.
    pub fn value(&self, col: usize, row: usize) -> Option<u8> {
        if (col, row) == FREE_CELL {
            None
        } else {
            Some(self.columns[col][row])
        }
    }

    /// Raw values of one column, free cell included.
    pub fn column(&self, col: usize) -> &[u8; ROWS] {
        &self.columns[col]
    }

    /// Inclusive value range for a column index.
    pub fn column_range(col: usize) -> RangeInclusive<u8> {
        let base = 1 + col as u8 * COLUMN_SPAN;
        base..=base + COLUMN_SPAN - 1
    }
}
