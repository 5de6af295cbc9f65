use super::Teamsheet;
use crate::config::TeamSheetConfig;
use crate::roster::Roster;
use crate::tactics::{Position, PositionGroup, Tactic};
use log::debug;

pub struct TeamsheetSelector;

impl TeamsheetSelector {
    /// Builds a lineup from the roster by fitness-weighted skill per
    /// position group. Injured and suspended players carry zero weight,
    /// so they are only drafted when nobody healthy is left.
    pub fn select(
        team_name: &str,
        roster: &Roster,
        tactic: Tactic,
        config: &TeamSheetConfig,
    ) -> Teamsheet {
        let avail: Vec<i32> = roster
            .players
            .iter()
            .map(|p| p.available_fitness())
            .collect();

        let penalty_kicker = Self::pick_penalty_kicker(roster, &avail);

        let mut chosen = vec![false; roster.players.len()];
        let mut starters = Vec::with_capacity(11);
        let mut substitutes = Vec::with_capacity(5);

        for group in PositionGroup::ALL {
            let (n_starters, n_subs) = config.quotas[group.index()];
            if n_starters == 0 && n_subs == 0 {
                continue;
            }

            let ranked = Self::rank_for_group(roster, &avail, &chosen, group);
            let side = if group.is_goalkeeper() { ' ' } else { 'C' };

            for (slot, &index) in ranked.iter().enumerate().take((n_starters + n_subs) as usize) {
                chosen[index] = true;

                let entry = (
                    Position::new(group, side),
                    roster.players[index].name.clone(),
                );

                if slot < n_starters as usize {
                    starters.push(entry);
                } else {
                    substitutes.push(entry);
                }
            }
        }

        debug!(
            "selected teamsheet for {}: {} starters, {} subs, pk {}",
            team_name,
            starters.len(),
            substitutes.len(),
            penalty_kicker
        );

        Teamsheet {
            team_name: team_name.to_string(),
            tactic,
            starters,
            substitutes,
            penalty_kicker,
        }
    }

    /// Highest shooting skill weighted by available fitness, earliest
    /// roster index on ties.
    fn pick_penalty_kicker(roster: &Roster, avail: &[i32]) -> String {
        let mut best = 0;
        let mut best_weight = i32::MIN;

        for (index, player) in roster.players.iter().enumerate() {
            let weight = player.sh as i32 * avail[index];
            if weight > best_weight {
                best = index;
                best_weight = weight;
            }
        }

        roster.players[best].name.clone()
    }

    /// Remaining players ordered by `skill_for(group) * avail_fit`
    /// descending, earlier roster index on ties.
    fn rank_for_group(
        roster: &Roster,
        avail: &[i32],
        chosen: &[bool],
        group: PositionGroup,
    ) -> Vec<usize> {
        let mut candidates: Vec<usize> = (0..roster.players.len())
            .filter(|&i| !chosen[i])
            .collect();

        candidates.sort_by_key(|&i| -(roster.players[i].skill_for(group) as i32 * avail[i]));

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Player;
    use crate::N_SUBS;

    fn generate_player(name: &str, st: i16, tk: i16, ps: i16, sh: i16) -> Player {
        let mut player = Player::placeholder();
        player.name = name.to_string();
        player.st = st;
        player.tk = tk;
        player.ps = ps;
        player.sh = sh;
        player.sm = 50;
        player.ag = 30;
        player.fit = 100;
        player.preferred_side = "C".to_string();
        player
    }

    fn generate_test_roster() -> Roster {
        let mut players = Vec::new();

        for i in 0..3i16 {
            players.push(generate_player(&format!("Keeper{}", i), 80 - i, 20, 20, 10));
        }
        for i in 0..8i16 {
            players.push(generate_player(&format!("Back{}", i), 10, 80 - i, 40, 20));
        }
        for i in 0..8i16 {
            players.push(generate_player(&format!("Mid{}", i), 10, 40, 80 - i, 40));
        }
        for i in 0..5i16 {
            players.push(generate_player(&format!("Front{}", i), 10, 20, 40, 80 - i));
        }

        Roster::new(players).unwrap()
    }

    #[test]
    fn default_quotas_fill_eleven_and_five() {
        let sheet = TeamsheetSelector::select(
            "Test",
            &generate_test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert!(sheet.validate().is_ok());
        assert_eq!(sheet.starters.len(), 11);
        assert_eq!(sheet.substitutes.len(), N_SUBS);

        let count = |group: PositionGroup| {
            sheet
                .starters
                .iter()
                .filter(|(pos, _)| pos.group == group)
                .count()
        };
        assert_eq!(count(PositionGroup::Goalkeeper), 1);
        assert_eq!(count(PositionGroup::Defender), 4);
        assert_eq!(count(PositionGroup::Midfielder), 4);
        assert_eq!(count(PositionGroup::Forward), 2);
    }

    #[test]
    fn best_players_start_with_tie_break_on_roster_index() {
        let sheet = TeamsheetSelector::select(
            "Test",
            &generate_test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!(sheet.starters[0].1, "Keeper0");
        assert_eq!(sheet.starters[1].1, "Back0");
        // the goalkeeper sub is the second-best keeper
        assert_eq!(sheet.substitutes[0].1, "Keeper1");
    }

    #[test]
    fn injured_players_rank_behind_healthy_ones() {
        let mut roster = generate_test_roster();
        // best keeper is out injured
        roster.players[0].inj = 3;

        let sheet = TeamsheetSelector::select(
            "Test",
            &roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!(sheet.starters[0].1, "Keeper1");
    }

    #[test]
    fn penalty_kicker_is_the_fittest_best_shooter() {
        let mut roster = generate_test_roster();
        let sheet = TeamsheetSelector::select(
            "Test",
            &roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );
        assert_eq!(sheet.penalty_kicker, "Front0");

        // a suspended shooter yields the spot
        roster.players[19].sus = 1;
        let sheet = TeamsheetSelector::select(
            "Test",
            &roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );
        assert_eq!(sheet.penalty_kicker, "Front1");
    }

    #[test]
    fn goalkeeper_side_is_blank_and_outfield_is_central() {
        let sheet = TeamsheetSelector::select(
            "Test",
            &generate_test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!(sheet.starters[0].0.code(), "GK ");
        assert!(sheet
            .starters
            .iter()
            .skip(1)
            .all(|(pos, _)| pos.side == 'C'));
    }
}
