// history.rs - Recent-generation hashes for spotting repeats

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Matrix;

/// Remembers the hashes of the last `capacity` generations so still lifes and
/// short-period oscillators can be reported.
#[derive(Debug, Clone)]
pub struct RepeatHistory {
    hashes: VecDeque<u64>,
    capacity: usize,
}

impl RepeatHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            hashes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records `cells` and reports whether the same state was seen within
    /// the window. A zero capacity never reports a repeat.
    pub fn observe(&mut self, cells: &Matrix) -> bool {
        if self.capacity == 0 {
            return false;
        }
        let hash = hash_matrix(cells);
        let seen = self.hashes.contains(&hash);
        if self.hashes.len() == self.capacity {
            self.hashes.pop_front();
        }
        self.hashes.push_back(hash);
        seen
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
    }
}

fn hash_matrix(cells: &Matrix) -> u64 {
    let mut hasher = DefaultHasher::new();
    cells.hash(&mut hasher);
    hasher.finish()
}
