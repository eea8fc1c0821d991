use chrono::{DateTime, Duration, Utc};

/// Message shown to the user until it expires
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            raised_at,
        }
    }

    /// Visible for `lifetime` after being raised
    pub fn is_visible_at(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        now >= self.raised_at && now - self.raised_at < lifetime
    }
}
