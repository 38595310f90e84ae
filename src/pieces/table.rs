//! Piece-count table: how many pieces of each rank each side starts with.
//!
//! Both sides receive the same quantities. Records keep the order in which
//! their labels first appeared; setup shuffles that order per side.

use std::io::BufRead;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::rank::Rank;

/// Errors raised while building a piece table. All are fatal to setup.
#[derive(Debug, Error)]
pub enum PieceTableError {
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("at most one flag per side is allowed, table asks for {count}")]
    TooManyFlags { count: u32 },

    #[error("failed to read piece table: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered rank → quantity table shared by both sides.
///
/// ## Example
///
/// ```
/// use tactego::pieces::{PieceTable, Rank};
///
/// let table = PieceTable::parse("F 1\n3 2\n5 1\n").unwrap();
///
/// assert_eq!(table.quantity(Rank::Numeric(3)), 2);
/// assert_eq!(table.total_per_side(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PieceTable {
    entries: Vec<(Rank, u32)>,
    index: FxHashMap<Rank, usize>,
}

impl PieceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse records of the form `label quantity`, one per line.
    ///
    /// Blank lines are skipped. A repeated label replaces the earlier
    /// quantity but keeps the earlier position.
    pub fn parse(text: &str) -> Result<Self, PieceTableError> {
        let mut table = Self::new();
        for (i, line) in text.lines().enumerate() {
            table.parse_record(i + 1, line)?;
        }
        table.check_flags()?;
        Ok(table)
    }

    /// Read and parse records from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, PieceTableError> {
        let mut table = Self::new();
        for (i, line) in reader.lines().enumerate() {
            table.parse_record(i + 1, &line?)?;
        }
        table.check_flags()?;
        Ok(table)
    }

    fn parse_record(&mut self, line: usize, text: &str) -> Result<(), PieceTableError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let (label, quantity) = match fields.as_slice() {
            [] => return Ok(()),
            [label, quantity] => (*label, *quantity),
            _ => {
                return Err(PieceTableError::MalformedRecord {
                    line,
                    reason: format!("expected `label quantity`, found {} fields", fields.len()),
                })
            }
        };

        let rank = Rank::parse(label).ok_or_else(|| PieceTableError::MalformedRecord {
            line,
            reason: format!("unknown rank label `{}`", label),
        })?;
        let quantity = quantity
            .parse::<u32>()
            .map_err(|_| PieceTableError::MalformedRecord {
                line,
                reason: format!("quantity `{}` is not a non-negative integer", quantity),
            })?;

        self.insert(rank, quantity);
        Ok(())
    }

    fn check_flags(&self) -> Result<(), PieceTableError> {
        let count = self.quantity(Rank::Flag);
        if count > 1 {
            return Err(PieceTableError::TooManyFlags { count });
        }
        Ok(())
    }

    /// Set the quantity for a rank.
    ///
    /// New ranks are appended; existing ranks keep their position.
    pub fn insert(&mut self, rank: Rank, quantity: u32) {
        match self.index.get(&rank) {
            Some(&i) => self.entries[i].1 = quantity,
            None => {
                self.index.insert(rank, self.entries.len());
                self.entries.push((rank, quantity));
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, rank: Rank, quantity: u32) -> Self {
        self.insert(rank, quantity);
        self
    }

    /// Quantity per side for a rank (0 if absent).
    #[must_use]
    pub fn quantity(&self, rank: Rank) -> u32 {
        self.index.get(&rank).map_or(0, |&i| self.entries[i].1)
    }

    /// Records in first-appearance order.
    #[must_use]
    pub fn entries(&self) -> &[(Rank, u32)] {
        &self.entries
    }

    /// Number of pieces each side places.
    #[must_use]
    pub fn total_per_side(&self) -> usize {
        self.entries.iter().map(|&(_, q)| q as usize).sum()
    }

    /// Number of distinct ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
