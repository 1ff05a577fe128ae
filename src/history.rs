/// One recorded evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression exactly as it was displayed when evaluated.
    pub expression: String,
    /// The result it produced.
    pub result:     f64,
}

/// An append-only record of successful evaluations.
///
/// Entries keep their insertion order for the lifetime of the calculator
/// session and are only removed by an explicit [`History::clear`]. There is
/// no deduplication and no capacity bound.
///
/// A `History` belongs to a single calculator and is not synchronized; to
/// share one across threads, wrap it in a lock.
///
/// # Example
/// ```
/// use deskcalc::history::History;
///
/// let mut history = History::new();
/// history.record("2+2".to_string(), 4.0);
/// assert_eq!(history.last().unwrap().result, 4.0);
///
/// history.clear();
/// assert!(history.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends an evaluation to the history.
    ///
    /// # Parameters
    /// - `expression`: The expression as it was displayed.
    /// - `result`: The value it evaluated to.
    pub fn record(&mut self, expression: String, result: f64) {
        self.entries.push(HistoryEntry { expression, result });
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns how many entries are recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
