pub mod commentary;
pub mod table;

use crate::loaders::roster::save_roster;
use engine::{League, Result};
use std::path::Path;

/// File name a team's roster is stored under.
pub fn team_file_name(team_name: &str) -> String {
    let slug: String = team_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    format!("{}.dat", slug)
}

/// Writes every roster of the league into `dir`.
pub fn save_rosters(league: &League, dir: &Path) -> Result<()> {
    for team in &league.teams {
        save_roster(&dir.join(team_file_name(&team.name)), &team.roster)?;
    }

    Ok(())
}
