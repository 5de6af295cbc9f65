use super::{Fixture, LeagueTable, Schedule};
use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::exec;
use crate::r#match::{MatchEngine, MatchResult};
use crate::roster::{update_roster, Roster};
use crate::sheet::{Teamsheet, TeamsheetSelector};
use crate::utils::{match_rng, update_rng, Logging};
use log::info;

/// One club of the league: its persistent roster and the current lineup.
#[derive(Debug, Clone)]
pub struct Team {
    pub name: String,
    pub roster: Roster,
    pub sheet: Teamsheet,
}

/// A full season state: teams, standings, schedule and the root RNG seed
/// every match stream derives from.
#[derive(Debug, Clone)]
pub struct League {
    pub teams: Vec<Team>,
    pub table: LeagueTable,
    pub schedule: Schedule,
    root_seed: u64,
    /// Init-time rosters, restored by [`League::reset_all`].
    pristine: Vec<Roster>,
}

impl League {
    pub fn new(
        names: Vec<String>,
        rosters: Vec<Roster>,
        config: &SimConfig,
        root_seed: u64,
    ) -> Result<League> {
        if names.len() != rosters.len() {
            return Err(Error::Config(format!(
                "{} team names but {} rosters",
                names.len(),
                rosters.len()
            )));
        }

        let pristine = rosters.clone();
        let schedule = Schedule::build(names.len());
        let table = LeagueTable::new(&names);

        let teams = names
            .into_iter()
            .zip(rosters)
            .map(|(name, roster)| {
                let sheet = TeamsheetSelector::select(
                    &name,
                    &roster,
                    config.sheet.default_tactic,
                    &config.sheet,
                );
                Team {
                    name,
                    roster,
                    sheet,
                }
            })
            .collect();

        Ok(League {
            teams,
            table,
            schedule,
            root_seed,
            pristine,
        })
    }

    #[inline]
    pub fn root_seed(&self) -> u64 {
        self.root_seed
    }

    pub fn set_root_seed(&mut self, seed: u64) {
        self.root_seed = seed;
    }

    #[inline]
    pub fn n_teams(&self) -> usize {
        self.teams.len()
    }

    /// Restores the init-time rosters, regenerates every teamsheet and
    /// clears the standings. A season replayed after a reset reproduces
    /// the previous one bit for bit.
    pub fn reset_all(&mut self, config: &SimConfig) {
        for (team, pristine) in self.teams.iter_mut().zip(self.pristine.iter()) {
            team.roster = pristine.clone();
            team.sheet = TeamsheetSelector::select(
                &team.name,
                &team.roster,
                config.sheet.default_tactic,
                &config.sheet,
            );
        }

        self.table.reset();
    }

    /// Writes one player's six skills into both the live and the pristine
    /// roster, so the change survives [`League::reset_all`].
    pub fn set_player_ratings(&mut self, team: usize, player: usize, ratings: [i16; 6]) {
        self.teams[team].roster.players[player].set_ratings(ratings);
        self.pristine[team].players[player].set_ratings(ratings);
    }

    /// Plays one fixture without touching league state.
    pub fn play_fixture(&self, config: &SimConfig, fixture: Fixture) -> Result<MatchResult> {
        let home = &self.teams[fixture.home - 1];
        let away = &self.teams[fixture.away - 1];

        let engine = MatchEngine::new(
            config,
            &home.roster,
            &home.sheet,
            &away.roster,
            &away.sheet,
            match_rng(self.root_seed, fixture.match_index),
        )?;

        Ok(engine.play())
    }

    /// Folds a played fixture into the table and both rosters, then
    /// reselects the two teamsheets.
    fn apply_result(&mut self, config: &SimConfig, fixture: Fixture, result: &MatchResult) {
        self.table.update(
            fixture.home - 1,
            fixture.away - 1,
            result.home.score,
            result.away.score,
        );

        let mut rng = update_rng(self.root_seed, fixture.match_index);

        for (index, state) in [(fixture.home - 1, &result.home), (fixture.away - 1, &result.away)] {
            let team = &mut self.teams[index];
            update_roster(&mut team.roster, state, &config.update, &mut rng);
            team.sheet = TeamsheetSelector::select(
                &team.name,
                &team.roster,
                config.sheet.default_tactic,
                &config.sheet,
            );
        }
    }

    /// Plays a single fixture and applies it.
    pub fn play_game(&mut self, config: &SimConfig, fixture: Fixture) -> Result<MatchResult> {
        let result = self.play_fixture(config, fixture)?;
        self.apply_result(config, fixture, &result);
        Ok(result)
    }

    /// Runs every match of one week concurrently, then applies results
    /// sequentially in schedule order.
    pub fn play_week(&mut self, config: &SimConfig, week: usize) -> Result<Vec<MatchResult>> {
        let fixtures: Vec<Fixture> = self
            .schedule
            .weeks
            .get(week)
            .ok_or_else(|| Error::Config(format!("week {} is not on the schedule", week)))?
            .clone();

        let results: Vec<Result<MatchResult>> = {
            let league = &*self;
            exec::par_map(&fixtures, |fixture| league.play_fixture(config, *fixture))
        };

        let mut played = Vec::with_capacity(results.len());

        for (fixture, result) in fixtures.iter().zip(results) {
            let result = result?;
            self.apply_result(config, *fixture, &result);
            played.push(result);
        }

        Ok(played)
    }

    /// Alias with the public lifecycle name.
    pub fn play_games(&mut self, config: &SimConfig, week: usize) -> Result<Vec<MatchResult>> {
        self.play_week(config, week)
    }

    /// The whole double round-robin, week by week, then the ranking pass.
    pub fn play_season(&mut self, config: &SimConfig) -> Result<()> {
        for week in 0..self.schedule.n_weeks() {
            let message = format!("play week {}", week + 1);
            Logging::estimate_result(|| self.play_week(config, week), &message)?;
        }

        self.table.rank();

        info!(
            "season finished: {} matches over {} weeks",
            self.schedule.total_matches(),
            self.schedule.n_weeks()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Player;
    use crate::MAX_PLAYERS;

    fn generate_player(team: usize, index: usize) -> Player {
        let mut player = Player::placeholder();
        player.name = format!("T{}P{}", team, index);
        player.age = 20 + (index % 14) as i16;
        player.nationality = "eng".to_string();
        player.preferred_side = "C".to_string();
        player.st = 30 + ((team * 7 + index * 13) % 50) as i16;
        player.tk = 30 + ((team * 11 + index * 7) % 50) as i16;
        player.ps = 30 + ((team * 5 + index * 17) % 50) as i16;
        player.sh = 30 + ((team * 3 + index * 19) % 50) as i16;
        player.sm = 30 + ((team + index * 5) % 60) as i16;
        player.ag = 20 + ((team * 13 + index * 3) % 40) as i16;
        player.fit = 100;
        player
    }

    fn generate_league(n_teams: usize, config: &SimConfig, seed: u64) -> League {
        let names: Vec<String> = (0..n_teams).map(|i| format!("Club {:02}", i)).collect();
        let rosters: Vec<Roster> = (0..n_teams)
            .map(|team| {
                Roster::new((0..24).map(|index| generate_player(team, index)).collect()).unwrap()
            })
            .collect();

        League::new(names, rosters, config, seed).unwrap()
    }

    #[test]
    fn single_game_fields_the_selected_lineups() {
        let config = SimConfig::default();
        let mut league = generate_league(12, &config, 0);

        let fixture = league.schedule.weeks[0][0];
        let home_names: Vec<String> = league.teams[fixture.home - 1]
            .sheet
            .lineup()
            .map(|(_, name)| name.clone())
            .collect();

        let result = league.play_game(&config, fixture).unwrap();

        let fielded: Vec<String> = result.home.slots.iter().map(|s| s.name.clone()).collect();
        assert_eq!(fielded, home_names);

        let home_shots: i16 = result.home.slots.iter().map(|s| s.sht).sum();
        assert!(home_shots <= 90);
    }

    #[test]
    fn season_conserves_goals_and_ranks_every_team() {
        let config = SimConfig::default();
        let mut league = generate_league(20, &config, 0);

        league.play_season(&config).unwrap();

        let gf: i32 = league.table.rows.iter().map(|r| r.gf as i32).sum();
        let ga: i32 = league.table.rows.iter().map(|r| r.ga as i32).sum();
        assert_eq!(gf, ga);

        let mut places: Vec<i16> = league.table.rows.iter().map(|r| r.place).collect();
        places.sort_unstable();
        assert_eq!(places, (1..=20).collect::<Vec<_>>());

        for row in &league.table.rows {
            assert_eq!(row.p, 38);
            assert!(row.pts <= 3 * 38);
            assert_eq!(row.pts, 3 * row.w + row.d);
            assert_eq!(row.gd, row.gf - row.ga);
        }
    }

    #[test]
    fn reset_reproduces_an_identical_season() {
        let config = SimConfig::default();
        let mut league = generate_league(8, &config, 7);

        league.play_season(&config).unwrap();
        let first_table = league.table.clone();
        let first_rosters: Vec<Roster> =
            league.teams.iter().map(|t| t.roster.clone()).collect();

        league.reset_all(&config);

        assert!(league.table.rows.iter().all(|r| r.p == 0));

        league.play_season(&config).unwrap();

        assert_eq!(league.table, first_table);
        for (team, roster) in league.teams.iter().zip(first_rosters) {
            assert_eq!(team.roster, roster);
        }
    }

    #[test]
    fn identical_seeds_give_identical_seasons() {
        let config = SimConfig::default();

        let mut a = generate_league(8, &config, 3);
        let mut b = generate_league(8, &config, 3);

        a.play_season(&config).unwrap();
        b.play_season(&config).unwrap();

        assert_eq!(a.table, b.table);
    }

    #[test]
    fn worker_thread_count_does_not_change_the_outcome() {
        let config = SimConfig::default();

        let mut single = generate_league(8, &config, 9);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        pool.install(|| single.play_season(&config)).unwrap();

        let mut pooled = generate_league(8, &config, 9);
        pooled.play_season(&config).unwrap();

        assert_eq!(single.table, pooled.table);
        for (a, b) in single.teams.iter().zip(pooled.teams.iter()) {
            assert_eq!(a.roster, b.roster);
        }
    }

    #[test]
    fn different_seeds_give_different_seasons() {
        let config = SimConfig::default();

        let mut a = generate_league(8, &config, 3);
        let mut b = generate_league(8, &config, 4);

        a.play_season(&config).unwrap();
        b.play_season(&config).unwrap();

        assert_ne!(a.table, b.table);
    }

    #[test]
    fn placeholder_rows_survive_a_season_untouched() {
        let config = SimConfig::default();
        let mut league = generate_league(6, &config, 1);

        league.play_season(&config).unwrap();

        for team in &league.teams {
            let placeholders: Vec<&Player> = team
                .roster
                .players
                .iter()
                .filter(|p| p.is_placeholder())
                .collect();

            assert_eq!(placeholders.len(), MAX_PLAYERS - 24);

            for row in placeholders {
                assert_eq!(row.ratings(), [0; 6]);
                assert_eq!(row.gam, 0);
                assert_eq!(row.gls, 0);
                assert_eq!(row.dp, 0);
                assert_eq!(row.fit, 100);
            }
        }
    }

    #[test]
    fn ratings_written_through_survive_reset() {
        let config = SimConfig::default();
        let mut league = generate_league(4, &config, 0);

        league.set_player_ratings(1, 2, [9, 9, 9, 9, 9, 9]);
        league.reset_all(&config);

        assert_eq!(league.teams[1].roster.players[2].ratings(), [9; 6]);
    }
}
