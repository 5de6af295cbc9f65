//! Per-match commentary files: a placeholder game-log section followed
//! by a fixed-width statistic table per team with a totals row.

use engine::{MatchResult, Result, TeamState};
use std::fs;
use std::path::{Path, PathBuf};

const STAT_HEADER: &str =
    "Name          Pos  Min  Sav  Ktk  Kps  Sht  Gls  Ass  Yel  Red";

pub fn format_commentary(result: &MatchResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} - {} {}\n\n",
        result.home.name, result.home.score, result.away.score, result.away.name
    ));

    out.push_str("Game log goes here\n\n");

    for state in [&result.home, &result.away] {
        out.push_str(&format_team_table(state));
        out.push('\n');
    }

    out
}

fn format_team_table(state: &TeamState) -> String {
    let mut out = String::new();

    out.push_str(&state.name);
    out.push('\n');
    out.push_str(STAT_HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(STAT_HEADER.len()));
    out.push('\n');

    let mut totals = [0i32; 9];

    for slot in &state.slots {
        let name: String = slot.name.chars().take(13).collect();
        let values = [
            slot.minutes as i32,
            slot.sav as i32,
            slot.ktk as i32,
            slot.kps as i32,
            slot.sht as i32,
            slot.gls as i32,
            slot.ass as i32,
            slot.yellow as i32,
            i32::from(slot.red),
        ];

        for (total, value) in totals.iter_mut().zip(values) {
            *total += value;
        }

        out.push_str(&format!("{:<14}{:<4}", name, slot.pos.code().trim_end()));
        for value in values {
            out.push_str(&format!("{:>5}", value));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:<14}{:<4}", "Total", ""));
    for total in totals {
        out.push_str(&format!("{:>5}", total));
    }
    out.push('\n');

    out
}

/// Writes `<home>_<away>.txt` into `dir` and returns the path.
pub fn write_commentary(dir: &Path, result: &MatchResult) -> Result<PathBuf> {
    let path = dir.join(format!("{}_{}.txt", result.home.name, result.away.name));
    fs::write(&path, format_commentary(result))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{
        MatchEngine, Player, Roster, SimConfig, Tactic, TeamSheetConfig, TeamsheetSelector,
    };

    fn generate_result() -> MatchResult {
        let config = SimConfig::default();

        let roster = |team: usize| {
            let players = (0..20)
                .map(|index| {
                    let mut p = Player::placeholder();
                    p.name = format!("T{}P{}", team, index);
                    p.st = if index < 2 { 60 } else { 15 };
                    p.tk = 40 + ((index * 7 + team) % 30) as i16;
                    p.ps = 40 + ((index * 11 + team) % 30) as i16;
                    p.sh = 40 + ((index * 13 + team) % 30) as i16;
                    p.sm = 50;
                    p.ag = 30;
                    p.fit = 100;
                    p.preferred_side = "C".to_string();
                    p
                })
                .collect();
            Roster::new(players).unwrap()
        };

        let home_roster = roster(1);
        let away_roster = roster(2);
        let home_sheet = TeamsheetSelector::select(
            "Ashford Rovers",
            &home_roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );
        let away_sheet = TeamsheetSelector::select(
            "Marwood United",
            &away_roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        MatchEngine::new(
            &config,
            &home_roster,
            &home_sheet,
            &away_roster,
            &away_sheet,
            engine::utils::match_rng(5, 0),
        )
        .unwrap()
        .play()
    }

    #[test]
    fn commentary_keeps_the_log_placeholder() {
        let text = format_commentary(&generate_result());

        assert!(text.contains("Game log goes here"));
    }

    #[test]
    fn both_team_tables_carry_a_totals_row() {
        let result = generate_result();
        let text = format_commentary(&result);

        assert!(text.contains("Ashford Rovers"));
        assert!(text.contains("Marwood United"));
        assert_eq!(text.matches("Total").count(), 2);
        assert_eq!(text.matches(STAT_HEADER).count(), 2);
    }

    #[test]
    fn totals_sum_the_goal_column() {
        let result = generate_result();
        let text = format_commentary(&result);

        let goals: i32 = (result.home.score + result.away.score) as i32;
        let totals: i32 = text
            .lines()
            .filter(|line| line.starts_with("Total"))
            .map(|line| {
                // Gls is the sixth numeric column
                line.split_whitespace().nth(6).unwrap().parse::<i32>().unwrap()
            })
            .sum();

        assert_eq!(totals, goals);
    }
}
