use shared::ExpenseId;

/// Hands out strictly increasing expense ids.
///
/// An id is the creation time in epoch milliseconds, bumped past the last id
/// issued when the clock has not moved forward (or went backwards).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    /// Start after `last`, typically the largest id already in the store
    pub fn starting_after(last: Option<ExpenseId>) -> Self {
        Self {
            last: last.map(|id| id.value()),
        }
    }

    pub fn next_id(&mut self, now_millis: u64) -> ExpenseId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        ExpenseId(id)
    }
}
