use crate::ERROR_RESULT;

/// Most recent entries kept in the log; older ones are pruned.
pub const HISTORY_CAPACITY: usize = 50;

/// A committed evaluation. Created only when an explicit "=" succeeds and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub id: String,
    pub expression: String,
    pub result: String,
    /// Caller-supplied milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Bounded, most-recent-first log of committed evaluations. Purely
/// in-memory; persistence belongs to the surrounding shell.
#[derive(Debug, Default)]
pub struct History {
    items: Vec<HistoryItem>,
    next_id: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed evaluation. Blank expressions, error results and
    /// identity entries (expression already equals its result) are skipped.
    /// Returns the recorded item, if any.
    pub fn push(&mut self, expression: &str, result: &str, timestamp: u64) -> Option<&HistoryItem> {
        if expression.is_empty() || result == ERROR_RESULT || expression == result {
            return None;
        }

        let id = format!("h{}", self.next_id);
        self.next_id += 1;

        self.items.insert(
            0,
            HistoryItem {
                id,
                expression: expression.to_string(),
                result: result.to_string(),
                timestamp,
            },
        );
        self.items.truncate(HISTORY_CAPACITY);
        self.items.first()
    }

    /// Entries, most recent first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
