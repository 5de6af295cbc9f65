mod selector;

pub use selector::TeamsheetSelector;

use crate::error::{Error, Result};
use crate::tactics::{Position, Tactic};
use crate::{N_LINEUP, N_SUBS};

/// A lineup selection: 11 starters, 5 substitutes, the chosen tactic and
/// the designated penalty kicker.
#[derive(Debug, Clone, PartialEq)]
pub struct Teamsheet {
    pub team_name: String,
    pub tactic: Tactic,
    pub starters: Vec<(Position, String)>,
    pub substitutes: Vec<(Position, String)>,
    pub penalty_kicker: String,
}

impl Teamsheet {
    /// Starters followed by substitutes: the 16 match-state slots in order.
    pub fn lineup(&self) -> impl Iterator<Item = &(Position, String)> {
        self.starters.iter().chain(self.substitutes.iter())
    }

    pub fn validate(&self) -> Result<()> {
        if self.starters.len() != N_LINEUP - N_SUBS {
            return Err(Error::Capacity(format!(
                "teamsheet carries {} starters, expected {}",
                self.starters.len(),
                N_LINEUP - N_SUBS
            )));
        }

        if self.substitutes.len() != N_SUBS {
            return Err(Error::Capacity(format!(
                "teamsheet carries {} substitutes, expected {}",
                self.substitutes.len(),
                N_SUBS
            )));
        }

        Ok(())
    }
}
