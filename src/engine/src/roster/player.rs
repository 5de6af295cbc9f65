use crate::error::{Error, Result};
use crate::tactics::PositionGroup;
use crate::{MAX_PLAYERS, PLACEHOLDER_NAME};

/// Counting stats saturate here rather than wrapping.
pub const STAT_CAP: i16 = 999;

/// One row of a roster. Skills are intrinsic ratings in 1..99, abilities
/// carry progression state, the remaining fields accumulate over a season.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub age: i16,
    pub nationality: String,
    /// Sides the player is comfortable on, e.g. `"C"`, `"RL"`, `"RLC"`.
    pub preferred_side: String,

    // skills
    pub st: i16,
    pub tk: i16,
    pub ps: i16,
    pub sh: i16,
    pub sm: i16,
    pub ag: i16,

    // abilities
    pub kab: i16,
    pub tab: i16,
    pub pab: i16,
    pub sab: i16,

    // season stats
    pub gam: i16,
    pub sav: i16,
    pub ktk: i16,
    pub kps: i16,
    pub sht: i16,
    pub gls: i16,
    pub ass: i16,
    pub dp: i16,
    pub inj: i16,
    pub sus: i16,
    pub fit: i16,
}

impl Player {
    /// The sentinel row that pads short rosters. Never selectable on
    /// merit: all ratings are zero.
    pub fn placeholder() -> Player {
        Player {
            name: PLACEHOLDER_NAME.to_string(),
            age: 0,
            nationality: String::new(),
            preferred_side: String::new(),
            st: 0,
            tk: 0,
            ps: 0,
            sh: 0,
            sm: 0,
            ag: 0,
            kab: 300,
            tab: 300,
            pab: 300,
            sab: 300,
            gam: 0,
            sav: 0,
            ktk: 0,
            kps: 0,
            sht: 0,
            gls: 0,
            ass: 0,
            dp: 0,
            inj: 0,
            sus: 0,
            fit: 100,
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }

    /// Fitness weight used by the automatic teamsheet: zero while injured
    /// or suspended.
    #[inline]
    pub fn available_fitness(&self) -> i32 {
        if self.inj == 0 && self.sus == 0 {
            self.fit as i32
        } else {
            0
        }
    }

    /// The skill that ranks a player for a position group.
    pub fn skill_for(&self, group: PositionGroup) -> i16 {
        match group {
            PositionGroup::Goalkeeper => self.st,
            PositionGroup::Defender => self.tk,
            PositionGroup::Forward => self.sh,
            _ => self.ps,
        }
    }

    pub fn saturate_stats(&mut self) {
        self.sav = self.sav.min(STAT_CAP);
        self.ktk = self.ktk.min(STAT_CAP);
        self.kps = self.kps.min(STAT_CAP);
        self.sht = self.sht.min(STAT_CAP);
        self.gls = self.gls.min(STAT_CAP);
    }

    pub fn set_ratings(&mut self, ratings: [i16; 6]) {
        let [st, tk, ps, sh, sm, ag] = ratings;
        self.st = st;
        self.tk = tk;
        self.ps = ps;
        self.sh = sh;
        self.sm = sm;
        self.ag = ag;
    }

    #[inline]
    pub fn ratings(&self) -> [i16; 6] {
        [self.st, self.tk, self.ps, self.sh, self.sm, self.ag]
    }
}

/// The persistent pool of up to [`MAX_PLAYERS`] players per team, padded
/// with placeholder rows so every roster carries exactly 30 entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new(mut players: Vec<Player>) -> Result<Roster> {
        if players.len() > MAX_PLAYERS {
            return Err(Error::Capacity(format!(
                "roster holds {} players, limit is {}",
                players.len(),
                MAX_PLAYERS
            )));
        }

        while players.len() < MAX_PLAYERS {
            players.push(Player::placeholder());
        }

        Ok(Roster { players })
    }

    /// First-hit linear search by name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rosters_are_padded_with_placeholders() {
        let roster = Roster::new(vec![Player::placeholder(); 3]).unwrap();

        assert_eq!(roster.players.len(), MAX_PLAYERS);
        assert!(roster.players.iter().all(|p| p.is_placeholder()));
        assert_eq!(roster.players[29].kab, 300);
        assert_eq!(roster.players[29].fit, 100);
    }

    #[test]
    fn oversized_rosters_are_rejected() {
        let result = Roster::new(vec![Player::placeholder(); MAX_PLAYERS + 1]);

        assert!(matches!(result, Err(Error::Capacity(_))));
    }

    #[test]
    fn stats_saturate_at_cap() {
        let mut player = Player::placeholder();
        player.sav = 1200;
        player.gls = 1000;
        player.ass = 1500;

        player.saturate_stats();

        assert_eq!(player.sav, STAT_CAP);
        assert_eq!(player.gls, STAT_CAP);
        // assists are not part of the saturating set
        assert_eq!(player.ass, 1500);
    }

    #[test]
    fn availability_is_zero_while_injured_or_suspended() {
        let mut player = Player::placeholder();
        player.fit = 90;

        assert_eq!(player.available_fitness(), 90);

        player.inj = 2;
        assert_eq!(player.available_fitness(), 0);

        player.inj = 0;
        player.sus = 1;
        assert_eq!(player.available_fitness(), 0);
    }
}
