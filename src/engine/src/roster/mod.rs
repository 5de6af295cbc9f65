mod player;
mod update;

pub use player::{Player, Roster, STAT_CAP};
pub use update::update_roster;
