use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// How a recorded figure compares with the month's objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveStatus {
    /// At or above the objective
    #[display(fmt = "reached")]
    Reached,
    /// Below the objective
    #[display(fmt = "missed")]
    Missed,
}

impl ObjectiveStatus {
    /// Compares `value` against `objective`; `None` when either is unknown.
    pub fn evaluate(value: Option<f64>, objective: Option<f64>) -> Option<Self> {
        let (value, objective) = (value?, objective?);
        Some(if value >= objective {
            Self::Reached
        } else {
            Self::Missed
        })
    }

    pub const fn is_reached(self) -> bool {
        matches!(self, Self::Reached)
    }
}
