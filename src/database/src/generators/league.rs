use super::{NamePool, PlayerGenerator};
use engine::utils::derive_seed;
use engine::{League, PositionGroup, Result, Roster, SimConfig};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

/// Real players per generated roster; the rest is placeholder padding.
const ROSTER_SIZE: usize = 24;

/// Archetype mix of a generated roster.
const COMPOSITION: [(PositionGroup, usize); 4] = [
    (PositionGroup::Goalkeeper, 3),
    (PositionGroup::Defender, 8),
    (PositionGroup::Midfielder, 8),
    (PositionGroup::Forward, 5),
];

/// Builds the packaged default league deterministically from a seed, in
/// place of shipping twenty roster files.
pub struct LeagueGenerator;

impl LeagueGenerator {
    pub fn default_team_names() -> Vec<String> {
        let mut names: Vec<String> =
            serde_json::from_str::<TeamNames>(STATIC_TEAMS_JSON).expect("packaged team pool parses").0;
        names.sort();
        names
    }

    /// The full default league: every roster generated from a stream
    /// derived from `seed` and the team index, so team order and thread
    /// count never matter.
    pub fn generate(seed: u64, config: &SimConfig) -> Result<League> {
        let pool = NamePool::load();
        let names = Self::default_team_names();

        let rosters: Vec<Roster> = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let mut rng = ChaCha8Rng::seed_from_u64(derive_seed(seed, index as u64));
                let roster = Self::generate_roster(&mut rng, &pool);
                debug!("generated roster for {}", name);
                roster
            })
            .collect::<Result<_>>()?;

        League::new(names, rosters, config, seed)
    }

    fn generate_roster(rng: &mut ChaCha8Rng, pool: &NamePool) -> Result<Roster> {
        let mut players = Vec::with_capacity(ROSTER_SIZE);

        for (archetype, count) in COMPOSITION {
            for _ in 0..count {
                let mut player = PlayerGenerator::generate(rng, pool, archetype);

                // names index the roster, so keep them unique within it
                while players.iter().any(|existing: &engine::Player| existing.name == player.name) {
                    player.name = PlayerGenerator::generate_name(rng, pool);
                }

                players.push(player);
            }
        }

        Roster::new(players)
    }
}

#[derive(Deserialize)]
struct TeamNames(Vec<String>);

#[cfg(test)]
mod tests {
    use super::*;
    use engine::MAX_PLAYERS;

    #[test]
    fn twenty_sorted_teams() {
        let names = LeagueGenerator::default_team_names();

        assert_eq!(names.len(), 20);

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn generation_is_deterministic() {
        let config = SimConfig::default();

        let a = LeagueGenerator::generate(20, &config).unwrap();
        let b = LeagueGenerator::generate(20, &config).unwrap();

        for (team_a, team_b) in a.teams.iter().zip(b.teams.iter()) {
            assert_eq!(team_a.name, team_b.name);
            assert_eq!(team_a.roster, team_b.roster);
            assert_eq!(team_a.sheet, team_b.sheet);
        }
    }

    #[test]
    fn rosters_are_padded_and_names_unique() {
        let config = SimConfig::default();
        let league = LeagueGenerator::generate(7, &config).unwrap();

        for team in &league.teams {
            assert_eq!(team.roster.players().len(), MAX_PLAYERS);

            let real: Vec<&str> = team
                .roster
                .players()
                .iter()
                .filter(|p| !p.is_placeholder())
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(real.len(), ROSTER_SIZE);

            let mut deduped = real.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), real.len());
        }
    }

    #[test]
    fn default_league_plays_a_match_between_teams_one_and_eleven() {
        let config = SimConfig::default();
        let mut league = LeagueGenerator::generate(0, &config).unwrap();

        let fixture = engine::Fixture {
            home: 1,
            away: 11,
            match_index: 0,
        };

        let lineup: Vec<String> = league.teams[0]
            .sheet
            .lineup()
            .map(|(_, name)| name.clone())
            .collect();

        let result = league.play_game(&config, fixture).unwrap();

        let fielded: Vec<String> = result.home.slots.iter().map(|s| s.name.clone()).collect();
        assert_eq!(fielded, lineup);

        let home_shots: i16 = result.home.slots.iter().map(|s| s.sht).sum();
        assert!(home_shots <= 90);
    }

    #[test]
    fn generated_league_supports_a_full_lineup() {
        let config = SimConfig::default();
        let league = LeagueGenerator::generate(3, &config).unwrap();

        for team in &league.teams {
            assert!(team.sheet.validate().is_ok());
            // nobody fields a placeholder with 24 real players available
            assert!(team
                .sheet
                .lineup()
                .all(|(_, name)| name != engine::PLACEHOLDER_NAME));
        }
    }
}
