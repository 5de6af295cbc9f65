pub mod config;
pub mod error;
pub mod exec;
pub mod league;
pub mod r#match;
pub mod roster;
pub mod search;
pub mod sheet;
pub mod tactics;
pub mod utils;

pub use config::{MatchConfig, SimConfig, TeamSheetConfig, UpdateConfig};
pub use error::{Error, Result};
pub use league::{Fixture, League, LeagueTable, Schedule, TableRow, Team};
pub use r#match::{MatchEngine, MatchPlayer, MatchResult, TeamState};
pub use roster::{update_roster, Player, Roster, STAT_CAP};
pub use search::{
    init_percent_ratings, init_random_ratings, rmse, RatingSearch, RatingSet, SearchParams,
    StepReport,
};
pub use sheet::{Teamsheet, TeamsheetSelector};
pub use tactics::{Position, PositionGroup, SkillKind, Tactic, TacticsTable};

/// Fixed dimensions of the data model.
pub const MAX_PLAYERS: usize = 30;
pub const N_SUBS: usize = 5;
pub const N_LINEUP: usize = 11 + N_SUBS;

/// Sentinel roster entry filling short rosters up to [`MAX_PLAYERS`].
pub const PLACEHOLDER_NAME: &str = "PLACEHOLDER";
