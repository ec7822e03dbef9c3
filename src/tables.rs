//! Pattern score tables
//!
//! One read-only map per line length 4 to 7, from an encoded line key to a
//! score. The tables are built offline; this module only encodes lines,
//! looks keys up and loads the persisted text files.

use anyhow::{anyhow, Context, Result};

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::board::Cell;

/// The shortest line the tables score
pub const MIN_LINE_LEN: usize = 4;
/// The longest line the tables score (a full row)
pub const MAX_LINE_LEN: usize = 7;

/// Encodes a line of cells as a base-10 integer, first cell of the line in
/// the most significant digit
///
/// The digit order is part of the score-table contract: every line must be
/// read in the same direction it was read when the tables were built
pub fn line_key(line: &[Cell]) -> u64 {
    line.iter().fold(0, |key, cell| key * 10 + cell.digit())
}

// candidate markers read as empty, for the fallback lookup
fn fallback_key(line: &[Cell]) -> u64 {
    line.iter().fold(0, |key, cell| {
        key * 10
            + match cell {
                Cell::Candidate => 0,
                other => other.digit(),
            }
    })
}

/// Score maps for lines of length 4 to 7
#[derive(Clone, Default)]
pub struct ScoreTables {
    // index 0 holds length 4
    tables: [HashMap<u64, i64>; 4],
}

impl ScoreTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, length: usize, key: u64, score: i64) {
        self.tables[length - MIN_LINE_LEN].insert(key, score);
    }

    pub fn get(&self, length: usize, key: u64) -> Option<i64> {
        self.tables[length - MIN_LINE_LEN].get(&key).copied()
    }

    /// Scores a single line of length 4 to 7
    ///
    /// If the exact key is absent, candidate cells fall back to empty;
    /// lines missing from the table altogether score zero
    pub fn line_score(&self, line: &[Cell]) -> i64 {
        let table = &self.tables[line.len() - MIN_LINE_LEN];
        if let Some(&score) = table.get(&line_key(line)) {
            return score;
        }
        table.get(&fallback_key(line)).copied().unwrap_or(0)
    }

    /// Loads `4ki.txt` through `7ki.txt` from `dir`. Each line of a table
    /// file holds an encoded key and its score, whitespace separated
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut tables = Self::new();
        for length in MIN_LINE_LEN..=MAX_LINE_LEN {
            let path = dir.as_ref().join(format!("{}ki.txt", length));
            let file = File::open(&path)
                .with_context(|| format!("could not open score table {}", path.display()))?;

            for line in BufReader::new(file).lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let mut fields = line.split_whitespace();
                match (fields.next(), fields.next()) {
                    (Some(key), Some(score)) => {
                        tables.insert(length, key.parse()?, score.parse()?)
                    }
                    _ => {
                        return Err(anyhow!(
                            "malformed entry '{}' in {}",
                            line,
                            path.display()
                        ))
                    }
                }
            }
        }
        Ok(tables)
    }
}
