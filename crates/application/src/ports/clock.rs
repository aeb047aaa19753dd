//! Clock port

use chrono::{DateTime, Utc};

/// Source of the run's start and completion timestamps.
///
/// Reporters convert to local time for display; the port itself stays in UTC.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}
