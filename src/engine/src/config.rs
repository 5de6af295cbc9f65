use crate::tactics::{Tactic, TacticsTable};

/// Per-group selection quotas for the automatic teamsheet, indexed by
/// [`crate::PositionGroup`] in selection order (GK, DF, DM, MF, AM, FW).
#[derive(Debug, Clone)]
pub struct TeamSheetConfig {
    /// (starters, substitutes) per position group.
    pub quotas: [(u8, u8); 6],
    pub default_tactic: Tactic,
}

impl Default for TeamSheetConfig {
    fn default() -> Self {
        TeamSheetConfig {
            quotas: [(1, 1), (4, 1), (0, 0), (4, 2), (0, 0), (2, 1)],
            default_tactic: Tactic::Normal,
        }
    }
}

/// Knobs of the post-match roster fold and inter-match maintenance.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub dp_yellow: i16,
    pub dp_red: i16,
    /// Upper bound (exclusive) of the random injury length in games.
    pub max_injury: i16,
    /// Crossing a multiple of this many disciplinary points suspends.
    pub suspension_margin: i16,
    pub fitness_gain: i16,
    pub fit_after_injury: i16,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        UpdateConfig {
            dp_yellow: 4,
            dp_red: 10,
            max_injury: 9,
            suspension_margin: 10,
            fitness_gain: 20,
            fit_after_injury: 80,
        }
    }
}

/// In-match rules.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_subs: u8,
    pub home_bonus: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            max_subs: 3,
            home_bonus: 0.02,
        }
    }
}

/// All process-level configuration, built once at init and passed down by
/// shared reference. Nothing in the engine reads global state.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub sheet: TeamSheetConfig,
    pub update: UpdateConfig,
    pub rules: MatchConfig,
    pub tactics: TacticsTable,
}

impl SimConfig {
    pub fn new(tactics: TacticsTable) -> SimConfig {
        SimConfig {
            tactics,
            ..SimConfig::default()
        }
    }
}
