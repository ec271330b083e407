// patterns.rs - Seed shapes and the registry they are looked up in

use std::collections::BTreeMap;

use crate::error::{LifeError, Result};
use crate::grid::Row;

/// A named, immutable rectangular shape of dead/alive cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    rows: Vec<Row>,
}

impl Pattern {
    /// Builds a pattern from rows of 0/1 values.
    ///
    /// Rejects empty shapes, ragged rows and any value other than 0 or 1.
    pub fn from_bits(name: impl Into<String>, rows: &[&[u8]]) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: String| LifeError::InvalidPattern {
            name: name.clone(),
            reason,
        };

        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(invalid("pattern has no cells".into()));
        }
        let mut cells = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid(format!(
                    "row {r} has {} cells, expected {width}",
                    row.len()
                )));
            }
            let mut parsed = Row::with_capacity(width);
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => parsed.push(false),
                    1 => parsed.push(true),
                    other => {
                        return Err(invalid(format!("cell ({r}, {c}) is {other}, expected 0 or 1")));
                    }
                }
            }
            cells.push(parsed);
        }
        Ok(Self { name, rows: cells })
    }

    /// Built-in shapes are checked by the tests below.
    fn from_table(name: &str, rows: &[&[u8]]) -> Self {
        Self {
            name: name.to_owned(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Same shape under another name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: self.rows.clone(),
        }
    }
}

#[rustfmt::skip]
const BLINKER: &[&[u8]] = &[&[1, 1, 1]];

#[rustfmt::skip]
const GLIDER: &[&[u8]] = &[
    &[0, 1, 0],
    &[0, 0, 1],
    &[1, 1, 1],
];

#[rustfmt::skip]
const TOAD: &[&[u8]] = &[
    &[0, 1, 1, 1],
    &[1, 1, 1, 0],
];

#[rustfmt::skip]
const BEACON: &[&[u8]] = &[
    &[1, 1, 0, 0],
    &[1, 1, 0, 0],
    &[0, 0, 1, 1],
    &[0, 0, 1, 1],
];

#[rustfmt::skip]
const R_PENTOMINO: &[&[u8]] = &[
    &[0, 1, 1],
    &[1, 1, 0],
    &[0, 1, 0],
];

#[rustfmt::skip]
const PULSAR: &[&[u8]] = &[
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
    &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
];

#[rustfmt::skip]
const GOSPER: &[&[u8]] = &[
    &[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0],
    &[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0],
    &[0,0,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,1,1],
    &[0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,1,1],
    &[1,1,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    &[1,1,0,0,0,0,0,0,0,0,1,0,0,0,1,0,1,1,0,0,0,0,1,0,1,0,0,0,0,0,0,0,0,0,0,0],
    &[0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,1,0,0,0,0,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0],
    &[0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
    &[0,0,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],
];

// Two hand-drawn invaders used to tile the demo board
#[rustfmt::skip]
const ALIEN: &[&[u8]] = &[
    &[0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0],
    &[0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    &[0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0],
];

#[rustfmt::skip]
const ALIEN2: &[&[u8]] = &[
    &[0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
    &[0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    &[0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0],
    &[0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0],
    &[0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0],
];

pub const STANDARD_PATTERNS: &[(&str, &[&[u8]])] = &[
    ("blinker", BLINKER),
    ("glider", GLIDER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("pulsar", PULSAR),
    ("r-pentomino", R_PENTOMINO),
    ("gosper", GOSPER),
    ("alien", ALIEN),
    ("alien2", ALIEN2),
];

/// Name → shape registry consulted by [`Simulator::place`](crate::Simulator::place).
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    patterns: BTreeMap<String, Pattern>,
}

impl PatternLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in shapes, plus `gosper-glider-gun` as a longer name for
    /// `gosper`.
    pub fn standard() -> Self {
        let mut library = Self::new();
        for &(name, rows) in STANDARD_PATTERNS {
            library.register(Pattern::from_table(name, rows));
        }
        let gun = Pattern::from_table("gosper-glider-gun", GOSPER);
        library.register(gun);
        library
    }

    /// Adds `pattern` under its own name, returning the shape it replaced.
    pub fn register(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.patterns.insert(pattern.name.clone(), pattern)
    }

    pub fn get(&self, name: &str) -> Result<&Pattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.keys().map(String::as_str)
    }
}
