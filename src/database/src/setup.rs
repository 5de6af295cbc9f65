//! Seeds a user data directory from the packaged defaults. Existing
//! files are never overwritten.

use crate::generators::LeagueGenerator;
use crate::loaders::league::write_league_file;
use crate::loaders::tactics::DEFAULT_TACTICS;
use engine::{Result, SimConfig};
use log::info;
use std::fs;
use std::path::Path;

pub fn seed_data_dir(dir: &Path, seed: u64, config: &SimConfig) -> Result<()> {
    fs::create_dir_all(dir)?;

    let tactics_path = dir.join("tactics.dat");
    if !tactics_path.exists() {
        fs::write(&tactics_path, DEFAULT_TACTICS)?;
        info!("seeded {}", tactics_path.display());
    }

    let league_path = dir.join("league.dat");
    let names = LeagueGenerator::default_team_names();
    if !league_path.exists() {
        fs::write(&league_path, write_league_file(&names))?;
        info!("seeded {}", league_path.display());
    }

    let missing_roster = names
        .iter()
        .any(|name| !dir.join(crate::writers::team_file_name(name)).exists());

    if missing_roster {
        let league = LeagueGenerator::generate(seed, config)?;

        for team in &league.teams {
            let path = dir.join(crate::writers::team_file_name(&team.name));
            if !path.exists() {
                crate::loaders::roster::save_roster(&path, &team.roster)?;
                info!("seeded {}", path.display());
            }
        }
    }

    Ok(())
}
