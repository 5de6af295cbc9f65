use super::{PositionGroup, SkillKind, Tactic};
use crate::error::{Error, Result};
use log::warn;

/// Bonus rows a complete tactics file is expected to carry.
pub const EXPECTED_BONUS_ROWS: usize = 12;

const N_TACTICS: usize = 6;
const N_GROUPS: usize = 6;
const N_SKILLS: usize = 3;

/// Pure-data multiplier tables indexed by (tactic, position group, skill)
/// plus opponent-dependent bonus rows. The goalkeeper group is always
/// neutral and never consulted.
#[derive(Debug, Clone)]
pub struct TacticsTable {
    mult: [[[f32; N_SKILLS]; N_GROUPS]; N_TACTICS],
    mult_set: [[[bool; N_SKILLS]; N_GROUPS]; N_TACTICS],
    bonus: Vec<BonusRow>,
}

#[derive(Debug, Clone, Copy)]
struct BonusRow {
    own: Tactic,
    opponent: Tactic,
    group: PositionGroup,
    skill: SkillKind,
    mult: f32,
}

impl Default for TacticsTable {
    /// A neutral table: every multiplier 1.0, no bonus rows.
    fn default() -> Self {
        TacticsTable {
            mult: [[[1.0; N_SKILLS]; N_GROUPS]; N_TACTICS],
            mult_set: [[[true; N_SKILLS]; N_GROUPS]; N_TACTICS],
            bonus: Vec::new(),
        }
    }
}

impl TacticsTable {
    /// Parses `M`-prefixed multiplier lines and `B`-prefixed bonus lines.
    /// Unprefixed lines are comments and skipped.
    pub fn parse(text: &str, path: &str) -> Result<TacticsTable> {
        let mut table = TacticsTable {
            mult: [[[1.0; N_SKILLS]; N_GROUPS]; N_TACTICS],
            mult_set: [[[false; N_SKILLS]; N_GROUPS]; N_TACTICS],
            bonus: Vec::new(),
        };

        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match tokens.first() {
                Some(&"M") => {
                    if tokens.len() != 5 {
                        return Err(Error::parse(path, line_no, "expected M <tactic> <position> <skill> <mult>"));
                    }

                    let tactic = parse_tactic(tokens[1], path, line_no)?;
                    let group = parse_group(tokens[2], path, line_no)?;
                    let skill = parse_skill(tokens[3], path, line_no)?;
                    let mult = parse_mult(tokens[4], path, line_no)?;

                    table.mult[tactic.index()][group.index()][skill.index()] = mult;
                    table.mult_set[tactic.index()][group.index()][skill.index()] = true;
                }
                Some(&"B") => {
                    if tokens.len() != 6 {
                        return Err(Error::parse(path, line_no, "expected B <opp_tactic> <own_tactic> <position> <skill> <mult>"));
                    }

                    table.bonus.push(BonusRow {
                        opponent: parse_tactic(tokens[1], path, line_no)?,
                        own: parse_tactic(tokens[2], path, line_no)?,
                        group: parse_group(tokens[3], path, line_no)?,
                        skill: parse_skill(tokens[4], path, line_no)?,
                        mult: parse_mult(tokens[5], path, line_no)?,
                    });
                }
                _ => {}
            }
        }

        Ok(table)
    }

    /// Multiplier for one contribution axis. Total: the goalkeeper group
    /// is neutral by definition, everything else reads the parsed table.
    #[inline]
    pub fn tact_mult(&self, tactic: Tactic, group: PositionGroup, skill: SkillKind) -> f32 {
        if group.is_goalkeeper() {
            return 1.0;
        }

        self.mult[tactic.index()][group.index()][skill.index()]
    }

    /// Extra multiplier for an (own, opponent) tactic pairing. Missing
    /// rows resolve to 1.0.
    #[inline]
    pub fn bonus_mult(
        &self,
        own: Tactic,
        opponent: Tactic,
        group: PositionGroup,
        skill: SkillKind,
    ) -> f32 {
        self.bonus
            .iter()
            .find(|row| {
                row.own == own && row.opponent == opponent && row.group == group && row.skill == skill
            })
            .map(|row| row.mult)
            .unwrap_or(1.0)
    }

    /// Verifies every (tactic, outfield group, skill) multiplier was
    /// present in the source file, so no combination consulted at
    /// runtime falls back silently.
    pub fn validate(&self) -> Result<()> {
        for tactic in Tactic::ALL {
            for group in PositionGroup::ALL {
                if group.is_goalkeeper() {
                    continue;
                }

                for skill in SkillKind::ALL {
                    if !self.mult_set[tactic.index()][group.index()][skill.index()] {
                        return Err(Error::Config(format!(
                            "tactics table is missing multiplier {} {} {}",
                            tactic.letter(),
                            group.code(),
                            skill.code()
                        )));
                    }
                }
            }
        }

        if self.bonus.len() != EXPECTED_BONUS_ROWS {
            warn!(
                "tactics table carries {} bonus rows, expected {}",
                self.bonus.len(),
                EXPECTED_BONUS_ROWS
            );
        }

        Ok(())
    }
}

fn parse_tactic(token: &str, path: &str, line: usize) -> Result<Tactic> {
    let letter = token.chars().next().filter(|_| token.len() == 1);

    letter
        .and_then(Tactic::from_letter)
        .ok_or_else(|| Error::parse(path, line, format!("unknown tactic {:?}", token)))
}

fn parse_group(token: &str, path: &str, line: usize) -> Result<PositionGroup> {
    PositionGroup::from_code(token)
        .ok_or_else(|| Error::parse(path, line, format!("unknown position {:?}", token)))
}

fn parse_skill(token: &str, path: &str, line: usize) -> Result<SkillKind> {
    SkillKind::from_code(token)
        .ok_or_else(|| Error::parse(path, line, format!("unknown skill {:?}", token)))
}

fn parse_mult(token: &str, path: &str, line: usize) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|_| Error::parse(path, line, format!("non-numeric multiplier {:?}", token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_table_text() -> String {
        let mut text = String::from("# generated test table\n");

        for tactic in Tactic::ALL {
            for group in PositionGroup::ALL {
                if group.is_goalkeeper() {
                    continue;
                }

                for skill in SkillKind::ALL {
                    text.push_str(&format!(
                        "M {} {} {} 1.0\n",
                        tactic.letter(),
                        group.code(),
                        skill.code()
                    ));
                }
            }
        }

        text
    }

    #[test]
    fn parses_multiplier_rows() {
        let table =
            TacticsTable::parse("M D DF TK 1.25\nM A FW SH 1.1\n", "tactics.dat").unwrap();

        assert_eq!(
            table.tact_mult(Tactic::Defensive, PositionGroup::Defender, SkillKind::Tackling),
            1.25
        );
        assert_eq!(
            table.tact_mult(Tactic::Attacking, PositionGroup::Forward, SkillKind::Shooting),
            1.1
        );
    }

    #[test]
    fn goalkeeper_group_is_always_neutral() {
        let table = TacticsTable::parse("M N GK SH 3.0\n", "tactics.dat").unwrap();

        assert_eq!(
            table.tact_mult(Tactic::Normal, PositionGroup::Goalkeeper, SkillKind::Shooting),
            1.0
        );
    }

    #[test]
    fn missing_bonus_rows_resolve_to_one() {
        let table = TacticsTable::parse("B A C DF TK 1.2\n", "tactics.dat").unwrap();

        assert_eq!(
            table.bonus_mult(
                Tactic::Counter,
                Tactic::Attacking,
                PositionGroup::Defender,
                SkillKind::Tackling
            ),
            1.2
        );
        assert_eq!(
            table.bonus_mult(
                Tactic::Attacking,
                Tactic::Counter,
                PositionGroup::Defender,
                SkillKind::Tackling
            ),
            1.0
        );
    }

    #[test]
    fn validate_rejects_incomplete_tables() {
        let complete = TacticsTable::parse(&complete_table_text(), "tactics.dat").unwrap();
        assert!(complete.validate().is_ok());

        let partial = TacticsTable::parse("M N DF TK 1.0\n", "tactics.dat").unwrap();
        assert!(matches!(partial.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn malformed_lines_report_position() {
        let result = TacticsTable::parse("M N DF TK not-a-number\n", "tactics.dat");

        match result {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
