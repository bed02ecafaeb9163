use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sim::error::SimulationError;

pub(crate) mod fifo;
pub(crate) mod lru;
pub(crate) mod optimal;

/// The closed set of supported replacement policies.
///
/// Dispatch is an exhaustive `match`, so adding a policy is a
/// compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    Optimal,
}

impl Policy {
    /// All policies, in canonical comparison order
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(SimulationError::UnknownPolicy(s.to_string())),
        }
    }
}
