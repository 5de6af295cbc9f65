mod table;

pub use table::TacticsTable;

use std::fmt::{Display, Formatter};

/// One-letter tactic code selecting a column of the multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tactic {
    Normal,
    Defensive,
    Attacking,
    Counter,
    LongBall,
    Passing,
}

impl Tactic {
    pub const ALL: [Tactic; 6] = [
        Tactic::Normal,
        Tactic::Defensive,
        Tactic::Attacking,
        Tactic::Counter,
        Tactic::LongBall,
        Tactic::Passing,
    ];

    pub fn letter(&self) -> char {
        match self {
            Tactic::Normal => 'N',
            Tactic::Defensive => 'D',
            Tactic::Attacking => 'A',
            Tactic::Counter => 'C',
            Tactic::LongBall => 'L',
            Tactic::Passing => 'P',
        }
    }

    pub fn from_letter(letter: char) -> Option<Tactic> {
        match letter {
            'N' => Some(Tactic::Normal),
            'D' => Some(Tactic::Defensive),
            'A' => Some(Tactic::Attacking),
            'C' => Some(Tactic::Counter),
            'L' => Some(Tactic::LongBall),
            'P' => Some(Tactic::Passing),
            _ => None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Tactic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    DefensiveMidfielder,
    Midfielder,
    AttackingMidfielder,
    Forward,
}

impl PositionGroup {
    /// Selection order of the automatic teamsheet.
    pub const ALL: [PositionGroup; 6] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defender,
        PositionGroup::DefensiveMidfielder,
        PositionGroup::Midfielder,
        PositionGroup::AttackingMidfielder,
        PositionGroup::Forward,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defender => "DF",
            PositionGroup::DefensiveMidfielder => "DM",
            PositionGroup::Midfielder => "MF",
            PositionGroup::AttackingMidfielder => "AM",
            PositionGroup::Forward => "FW",
        }
    }

    pub fn from_code(code: &str) -> Option<PositionGroup> {
        match code {
            "GK" => Some(PositionGroup::Goalkeeper),
            "DF" => Some(PositionGroup::Defender),
            "DM" => Some(PositionGroup::DefensiveMidfielder),
            "MF" => Some(PositionGroup::Midfielder),
            "AM" => Some(PositionGroup::AttackingMidfielder),
            "FW" => Some(PositionGroup::Forward),
            _ => None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionGroup::Goalkeeper)
    }
}

/// Contribution axis addressed by multiplier and bonus rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    Shooting,
    Passing,
    Tackling,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Shooting, SkillKind::Passing, SkillKind::Tackling];

    pub fn code(&self) -> &'static str {
        match self {
            SkillKind::Shooting => "SH",
            SkillKind::Passing => "PS",
            SkillKind::Tackling => "TK",
        }
    }

    pub fn from_code(code: &str) -> Option<SkillKind> {
        match code {
            "SH" => Some(SkillKind::Shooting),
            "PS" => Some(SkillKind::Passing),
            "TK" => Some(SkillKind::Tackling),
            _ => None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A three-character lineup position: group code plus side letter,
/// e.g. `"FWC"` or `"GK "` (the goalkeeper carries a blank side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub group: PositionGroup,
    pub side: char,
}

impl Position {
    pub const GOALKEEPER: Position = Position {
        group: PositionGroup::Goalkeeper,
        side: ' ',
    };

    pub fn new(group: PositionGroup, side: char) -> Position {
        Position { group, side }
    }

    pub fn parse(code: &str) -> Option<Position> {
        let code = code.trim_end();
        if code.len() < 2 || code.len() > 3 {
            return None;
        }

        let group = PositionGroup::from_code(code.get(..2)?)?;
        let side = code.chars().nth(2).unwrap_or(' ');

        if !matches!(side, 'R' | 'L' | 'C' | ' ') {
            return None;
        }

        Some(Position { group, side })
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.group.code(), self.side)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tactic_letters_round_trip() {
        for tactic in Tactic::ALL {
            assert_eq!(Tactic::from_letter(tactic.letter()), Some(tactic));
        }

        assert_eq!(Tactic::from_letter('X'), None);
    }

    #[test]
    fn position_codes_round_trip() {
        for code in ["GK ", "DFR", "DFL", "DMC", "MFC", "AMC", "FWC"] {
            let position = Position::parse(code).unwrap();
            assert_eq!(position.code(), code);
        }
    }

    #[test]
    fn goalkeeper_code_accepts_collapsed_form() {
        let position = Position::parse("GK").unwrap();

        assert_eq!(position, Position::GOALKEEPER);
        assert_eq!(position.code(), "GK ");
    }

    #[test]
    fn malformed_positions_are_rejected() {
        assert!(Position::parse("XYC").is_none());
        assert!(Position::parse("FWQ").is_none());
        assert!(Position::parse("F").is_none());
    }
}
