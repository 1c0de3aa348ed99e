//! Ranked record of the best brains ever observed.

use serde::{Deserialize, Serialize};

/// A brain weight vector together with the best score it has reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Flat weight vector; the entry's identity.
    pub weights: Vec<f32>,
    /// Highest survival score observed for these weights.
    pub score: u64,
}

/// Bounded list of unique weight vectors ordered by descending score.
///
/// Entries are only ordered after [`HallOfFame::rank`]; folding appends
/// without re-sorting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HallOfFame {
    entries: Vec<Entry>,
    capacity: usize,
    retain: usize,
    #[serde(skip)]
    leader: Option<Vec<f32>>,
}

impl HallOfFame {
    /// Creates an empty hall of fame that is cut back to `retain` entries
    /// whenever it grows past `capacity`.
    pub fn new(capacity: usize, retain: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            retain,
            leader: None,
        }
    }

    /// Records a score for a weight vector.
    ///
    /// An existing entry with equal weights keeps the larger of the two
    /// scores; otherwise a new entry is appended.
    ///
    /// # Panics
    ///
    /// Panics if `weights` differs in length from the stored vectors.
    pub fn fold(&mut self, weights: &[f32], score: u64) {
        match self.entries.iter_mut().find(|e| weights_equal(&e.weights, weights)) {
            Some(entry) => entry.score = entry.score.max(score),
            None => self.entries.push(Entry {
                weights: weights.to_vec(),
                score,
            }),
        }
    }

    /// Stable sort by descending score.
    pub fn rank(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Drops the tail down to the retain size once capacity is exceeded.
    pub fn truncate(&mut self) {
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.retain);
        }
    }

    /// Ranks, truncates and reports a change of leader.
    pub fn refresh(&mut self) {
        self.rank();
        self.truncate();

        let Some(best) = self.entries.first() else {
            return;
        };
        let changed = self
            .leader
            .as_deref()
            .is_none_or(|leader| leader != best.weights.as_slice());
        if changed {
            tracing::info!(score = best.score, entries = self.entries.len(), "new hall of fame leader");
            self.leader = Some(best.weights.clone());
        }
    }

    /// Entries in their current order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no brain has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest ranked entry, if any.
    pub fn best(&self) -> Option<&Entry> {
        self.entries.first()
    }
}

fn weights_equal(a: &[f32], b: &[f32]) -> bool {
    assert_eq!(a.len(), b.len(), "compared weight vectors differ in length");
    a == b
}
