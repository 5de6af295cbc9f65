use super::MatchPlayer;
use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::sheet::Teamsheet;
use crate::tactics::Tactic;
use crate::N_LINEUP;

/// One side's mutable match state: the 16 lineup slots plus team-level
/// bookkeeping. Rebuilt from roster + teamsheet at every kickoff.
#[derive(Debug, Clone)]
pub struct TeamState {
    pub name: String,
    pub tactic: Tactic,
    pub slots: Vec<MatchPlayer>,
    /// Designated penalty kicker, if the sheet's choice made the lineup.
    pub pk: Option<usize>,
    /// Slot currently keeping goal.
    pub gk: usize,
    pub subs_used: u8,
    pub score: i16,
}

impl TeamState {
    pub fn from_teamsheet(roster: &Roster, sheet: &Teamsheet) -> Result<TeamState> {
        sheet.validate()?;

        let mut slots = Vec::with_capacity(N_LINEUP);

        for (slot_no, (pos, name)) in sheet.lineup().enumerate() {
            let index = roster.find(name).ok_or_else(|| {
                Error::Config(format!(
                    "teamsheet for {} names {} who is not on the roster",
                    sheet.team_name, name
                ))
            })?;

            let mut player = MatchPlayer::from_roster(&roster.players[index], *pos);
            player.active = slot_no < sheet.starters.len();
            slots.push(player);
        }

        let gk = slots
            .iter()
            .take(sheet.starters.len())
            .position(|slot| slot.is_goalkeeper())
            .ok_or_else(|| {
                Error::Config(format!(
                    "teamsheet for {} fields no goalkeeper",
                    sheet.team_name
                ))
            })?;

        let pk = slots
            .iter()
            .position(|slot| slot.name == sheet.penalty_kicker);

        Ok(TeamState {
            name: sheet.team_name.clone(),
            tactic: sheet.tactic,
            slots,
            pk,
            gk,
            subs_used: 0,
            score: 0,
        })
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    #[inline]
    pub fn sum_shm(&self) -> f32 {
        self.slots.iter().map(|slot| slot.shm).sum()
    }

    #[inline]
    pub fn sum_psm(&self) -> f32 {
        self.slots.iter().map(|slot| slot.psm).sum()
    }

    #[inline]
    pub fn sum_tkm(&self) -> f32 {
        self.slots.iter().map(|slot| slot.tkm).sum()
    }

    /// Aggression mass of the players on the pitch.
    #[inline]
    pub fn sum_aggression(&self) -> f32 {
        self.slots
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| slot.ag as f32)
            .sum()
    }
}
