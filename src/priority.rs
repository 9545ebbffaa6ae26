//! Message priority levels.

use std::fmt;

use crate::Error;

/// Pushover priority, from -2 (no notification) to 2 (requires acknowledgement).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// No notification is generated
    Lowest,
    /// Delivered quietly
    Low,
    #[default]
    Normal,
    /// Bypasses the recipient's quiet hours
    High,
    /// Repeats until acknowledged
    Emergency,
}

impl Priority {
    pub fn as_i64(&self) -> i64 {
        match self {
            Priority::Lowest => -2,
            Priority::Low => -1,
            Priority::Normal => 0,
            Priority::High => 1,
            Priority::Emergency => 2,
        }
    }

    pub fn is_normal(&self) -> bool {
        *self == Priority::Normal
    }
}

impl TryFrom<i64> for Priority {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Priority::Lowest),
            -1 => Ok(Priority::Low),
            0 => Ok(Priority::Normal),
            1 => Ok(Priority::High),
            2 => Ok(Priority::Emergency),
            other => Err(Error::InvalidPriority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}
