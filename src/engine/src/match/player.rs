use crate::roster::Player;
use crate::tactics::Position;

/// Per-match snapshot of one lineup slot: copied skills plus the mutable
/// in-match state the minute loop works on.
#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub name: String,
    pub pos: Position,
    pub preferred_side: String,

    // copied skills
    pub st: i16,
    pub tk: i16,
    pub ps: i16,
    pub sh: i16,
    pub sm: i16,
    pub ag: i16,

    pub active: bool,
    /// Within-match fatigue, 1.0 fresh down to the 0.1 floor.
    pub fatigue: f32,
    /// Per-minute fatigue loss derived from stamina at kickoff.
    pub fatigue_deduction: f32,

    // contributions after side/tactic/bonus adjustments, pre-fatigue
    pub sh0: f32,
    pub ps0: f32,
    pub tk0: f32,
    // post-fatigue contributions, recomputed every minute
    pub shm: f32,
    pub psm: f32,
    pub tkm: f32,

    // match counters
    pub minutes: i16,
    pub sav: i16,
    pub ktk: i16,
    pub kps: i16,
    pub sht: i16,
    pub gls: i16,
    pub ass: i16,
    pub yellow: i16,
    pub red: bool,
    pub injured: bool,
}

impl MatchPlayer {
    pub fn from_roster(player: &Player, pos: Position) -> MatchPlayer {
        let fatigue_deduction = if pos.group.is_goalkeeper() {
            0.0
        } else {
            0.0031 - 0.0022 * (player.sm - 50) as f32 / 50.0
        };

        MatchPlayer {
            name: player.name.clone(),
            pos,
            preferred_side: player.preferred_side.clone(),
            st: player.st,
            tk: player.tk,
            ps: player.ps,
            sh: player.sh,
            sm: player.sm,
            ag: player.ag,
            active: false,
            fatigue: (player.fit as f32 / 100.0).clamp(0.1, 1.0),
            fatigue_deduction,
            sh0: 0.0,
            ps0: 0.0,
            tk0: 0.0,
            shm: 0.0,
            psm: 0.0,
            tkm: 0.0,
            minutes: 0,
            sav: 0,
            ktk: 0,
            kps: 0,
            sht: 0,
            gls: 0,
            ass: 0,
            yellow: 0,
            red: false,
            injured: false,
        }
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.pos.group.is_goalkeeper()
    }

    /// Whether the assigned side is one the player is comfortable on.
    #[inline]
    pub fn on_preferred_side(&self) -> bool {
        self.preferred_side.contains(self.pos.side)
    }

    /// Eligible to come on: an unused, healthy bench player.
    #[inline]
    pub fn available_for_sub(&self) -> bool {
        !self.active && !self.injured && !self.red && self.yellow < 2
    }
}
