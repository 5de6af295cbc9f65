pub mod league;
pub mod roster;
pub mod tactics;
pub mod teamsheet;

use crate::writers::team_file_name;
use engine::{League, Result, SimConfig};
use std::path::Path;

/// Builds a league from a data directory: `league.dat` names the teams,
/// each of which has a fixed-width roster file.
pub fn init_league(dir: &Path, n_teams: usize, config: &SimConfig, seed: u64) -> Result<League> {
    let names = league::load_league_file(&dir.join("league.dat"), n_teams)?;

    let rosters = names
        .iter()
        .map(|name| roster::load_roster(&dir.join(team_file_name(name))))
        .collect::<Result<Vec<_>>>()?;

    League::new(names, rosters, config, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::seed_data_dir;
    use std::fs;

    #[test]
    fn init_league_reads_back_a_seeded_directory() {
        let dir = std::env::temp_dir()
            .join(format!("open-league-init-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let config = engine::SimConfig::default();
        seed_data_dir(&dir, 4, &config).unwrap();

        let league = init_league(&dir, 20, &config, 4).unwrap();

        assert_eq!(league.n_teams(), 20);
        assert!(league.teams.iter().all(|t| t.sheet.validate().is_ok()));

        // the loaded league matches the generated one
        let generated = crate::generators::LeagueGenerator::generate(4, &config).unwrap();
        for (loaded, built) in league.teams.iter().zip(generated.teams.iter()) {
            assert_eq!(loaded.name, built.name);
            assert_eq!(loaded.roster, built.roster);
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
