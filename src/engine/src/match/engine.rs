use super::contrib::{compute_contribs, refresh_slot};
use super::sampler::weighted_index;
use super::{MatchResult, TeamState};
use crate::config::SimConfig;
use crate::error::Result;
use crate::roster::Roster;
use crate::sheet::Teamsheet;
use crate::tactics::{Position, Tactic};
use crate::N_LINEUP;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

pub const MATCH_MINUTES: u16 = 90;

/// A side that drops below this many active players forfeits the rest of
/// the match.
const MIN_ACTIVE_PLAYERS: usize = 7;

/// The minute-by-minute stochastic match simulator. Owns both sides'
/// match state and a per-match RNG stream; the two sides act strictly in
/// sequence within a minute, home first.
pub struct MatchEngine<'c> {
    config: &'c SimConfig,
    rng: ChaCha8Rng,
    home: TeamState,
    away: TeamState,
}

impl<'c> MatchEngine<'c> {
    pub fn new(
        config: &'c SimConfig,
        home_roster: &Roster,
        home_sheet: &Teamsheet,
        away_roster: &Roster,
        away_sheet: &Teamsheet,
        rng: ChaCha8Rng,
    ) -> Result<MatchEngine<'c>> {
        let mut home = TeamState::from_teamsheet(home_roster, home_sheet)?;
        let mut away = TeamState::from_teamsheet(away_roster, away_sheet)?;

        compute_contribs(&mut home, away.tactic, &config.tactics);
        compute_contribs(&mut away, home.tactic, &config.tactics);

        Ok(MatchEngine {
            config,
            rng,
            home,
            away,
        })
    }

    pub fn play(mut self) -> MatchResult {
        for _ in 1..=MATCH_MINUTES {
            if self.home.active_count() < MIN_ACTIVE_PLAYERS
                || self.away.active_count() < MIN_ACTIVE_PLAYERS
            {
                break;
            }

            self.play_minute();
        }

        MatchResult {
            home: self.home,
            away: self.away,
        }
    }

    fn play_minute(&mut self) {
        recalc_side(&mut self.home, &mut self.rng);
        recalc_side(&mut self.away, &mut self.rng);

        shot_event(self.config, &mut self.rng, &mut self.home, &mut self.away, true);
        foul_event(&mut self.rng, &mut self.home, &mut self.away);
        injury_event(self.config, &mut self.rng, &mut self.home, &self.away);

        shot_event(self.config, &mut self.rng, &mut self.away, &mut self.home, false);
        foul_event(&mut self.rng, &mut self.away, &mut self.home);
        injury_event(self.config, &mut self.rng, &mut self.away, &self.home);
    }
}

#[inline]
fn chance<R: Rng>(rng: &mut R, probability: f32) -> bool {
    rng.gen::<f32>() < probability
}

/// Fatigue update: a minute of wear for everyone on the pitch, then the
/// post-fatigue contributions. The jitter is drawn for every slot so the
/// stream does not depend on who is still active.
fn recalc_side<R: Rng>(team: &mut TeamState, rng: &mut R) {
    for slot in &mut team.slots {
        let jitter = rng.gen_range(-0.003f32..0.003);

        if slot.active {
            slot.minutes += 1;
            slot.fatigue -= slot.fatigue_deduction - jitter;
            slot.fatigue = slot.fatigue.clamp(0.1, 1.0);
        }

        let active = if slot.active { 1.0 } else { 0.0 };
        slot.shm = slot.sh0 * slot.fatigue * active;
        slot.psm = slot.ps0 * slot.fatigue * active;
        slot.tkm = slot.tk0 * slot.fatigue * active;
    }
}

fn shot_event<R: Rng>(
    config: &SimConfig,
    rng: &mut R,
    attack: &mut TeamState,
    defence: &mut TeamState,
    home_side: bool,
) {
    let shooting = attack.sum_shm();
    let passing = attack.sum_psm();
    let tackling = defence.sum_tkm();

    let pressure = ((shooting + 2.0 * passing) / 3.0) / (tackling + 1.0);
    let mut p_shot = 1.8 * (attack.sum_aggression() / 500_000.0 + 0.08 * pressure * pressure);
    if home_side {
        p_shot += config.rules.home_bonus;
    }

    if !chance(rng, p_shot.clamp(0.0, 1.0)) {
        return;
    }

    let mut weights = [0.0f32; N_LINEUP];
    for (index, slot) in attack.slots.iter().enumerate() {
        weights[index] = slot.shm;
    }

    let Some(shooter) = weighted_index(rng, &weights[..attack.slots.len()]) else {
        return;
    };

    // a possible build-up pass; the pass key is registered here, before
    // the tackle check
    let mut passer = None;
    if chance(rng, 0.75) {
        for (index, slot) in attack.slots.iter().enumerate() {
            weights[index] = slot.psm;
        }
        weights[shooter] = 0.0;

        if let Some(mut pick) = weighted_index(rng, &weights[..attack.slots.len()]) {
            if attack.slots[shooter].pos.side != attack.slots[pick].pos.side {
                if let Some(again) = weighted_index(rng, &weights[..attack.slots.len()]) {
                    pick = again;
                }
            }

            attack.slots[pick].kps += 1;
            passer = Some(pick);
        }
    }

    let p_tackle = (0.4 * 3.0 * tackling / (2.0 * passing + shooting)).min(1.0);
    if chance(rng, p_tackle) {
        for (index, slot) in defence.slots.iter().enumerate() {
            weights[index] = slot.tkm;
        }
        if let Some(tackler) = weighted_index(rng, &weights[..defence.slots.len()]) {
            defence.slots[tackler].ktk += 1;
        }
        return;
    }

    attack.slots[shooter].sht += 1;

    if !chance(rng, 0.58 * attack.slots[shooter].fatigue) {
        return;
    }

    let keeper_st = defence.slots[defence.gk].st as f32;
    let p_goal = (0.02 * attack.slots[shooter].sh as f32 * attack.slots[shooter].fatigue
        - 0.02 * keeper_st
        + 0.35)
        .clamp(0.1, 0.9);

    if chance(rng, p_goal) {
        if chance(rng, 0.95) {
            attack.slots[shooter].gls += 1;
            attack.score += 1;

            if let Some(passer) = passer {
                attack.slots[passer].ass += 1;
            }
        }
    } else {
        defence.slots[defence.gk].sav += 1;
    }
}

fn foul_event<R: Rng>(rng: &mut R, offenders: &mut TeamState, opponents: &mut TeamState) {
    let p_foul = 0.75 * offenders.sum_aggression() / 10_000.0;
    if !chance(rng, p_foul) {
        return;
    }

    let mut weights = [0.0f32; N_LINEUP];
    for (index, slot) in offenders.slots.iter().enumerate() {
        weights[index] = if slot.active { slot.ag as f32 } else { 0.0 };
    }

    let Some(fouler) = weighted_index(rng, &weights[..offenders.slots.len()]) else {
        return;
    };

    if chance(rng, 0.6) {
        offenders.slots[fouler].yellow += 1;
        if offenders.slots[fouler].yellow >= 2 {
            offenders.slots[fouler].active = false;
        }
    } else if chance(rng, 0.04) {
        offenders.slots[fouler].red = true;
        offenders.slots[fouler].active = false;
    }

    // a goalkeeper foul is always a penalty, any other one occasionally
    if offenders.slots[fouler].is_goalkeeper() || chance(rng, 0.05) {
        let taker = opponents
            .pk
            .filter(|&index| opponents.slots[index].active)
            .unwrap_or_else(|| best_active_shooter(opponents));

        let keeper_st = offenders.slots[offenders.gk].st;
        let p_penalty = (0.8 + 0.01 * (opponents.slots[taker].sh - keeper_st) as f32)
            .clamp(0.0, 1.0);

        if chance(rng, p_penalty) {
            opponents.slots[taker].gls += 1;
            opponents.score += 1;
        }
    }
}

fn best_active_shooter(team: &TeamState) -> usize {
    let mut best = 0;
    let mut best_weight = f32::MIN;

    for (index, slot) in team.slots.iter().enumerate() {
        let active = if slot.active { 1.0 } else { 0.0 };
        let weight = slot.sh as f32 * active * slot.fatigue;
        if weight > best_weight {
            best = index;
            best_weight = weight;
        }
    }

    best
}

fn injury_event<R: Rng>(
    config: &SimConfig,
    rng: &mut R,
    team: &mut TeamState,
    opponents: &TeamState,
) {
    let p_injury = 0.15 * opponents.sum_aggression() / 50_000.0;
    if !chance(rng, p_injury) {
        return;
    }

    let mut weights = [0.0f32; N_LINEUP];
    for (index, slot) in team.slots.iter().enumerate() {
        weights[index] = if slot.active { 1.0 } else { 0.0 };
    }

    let Some(victim) = weighted_index(rng, &weights[..team.slots.len()]) else {
        return;
    };

    substitute(config, team, opponents.tactic, victim);
}

/// The substitution state machine, invoked for an injured player.
fn substitute(config: &SimConfig, team: &mut TeamState, opponent_tactic: Tactic, victim: usize) {
    let victim_pos = team.slots[victim].pos;
    let victim_was_gk = victim == team.gk || victim_pos.group.is_goalkeeper();

    let available: Vec<usize> = (0..team.slots.len())
        .filter(|&index| team.slots[index].available_for_sub())
        .collect();

    if available.is_empty() || team.subs_used >= config.rules.max_subs {
        team.slots[victim].active = false;
        team.slots[victim].injured = true;

        if victim_was_gk {
            // no keeper left on the bench: promote the best stopper
            // still on the pitch
            if let Some(stopper) = best_active_stopper(team) {
                promote_goalkeeper(team, stopper);
            }
        }

        return;
    }

    if let Some(&exact) = available
        .iter()
        .find(|&&index| team.slots[index].pos == victim_pos)
    {
        team.slots[exact].active = true;
        if victim_was_gk {
            team.gk = exact;
        }
    } else if victim_was_gk {
        let mut replacement = available[0];
        for &index in &available[1..] {
            if team.slots[index].st > team.slots[replacement].st {
                replacement = index;
            }
        }

        team.slots[replacement].active = true;
        promote_goalkeeper(team, replacement);
    } else {
        let same_group = available
            .iter()
            .copied()
            .find(|&index| team.slots[index].pos.group == victim_pos.group);
        let outfield = available
            .iter()
            .copied()
            .find(|&index| !team.slots[index].is_goalkeeper());

        let replacement = same_group.or(outfield).unwrap_or(available[0]);

        team.slots[replacement].active = true;
        refresh_slot(team, replacement, opponent_tactic, &config.tactics);
    }

    team.subs_used += 1;
    team.slots[victim].active = false;
    team.slots[victim].injured = true;
}

/// Outfielder on the pitch with the best shot-stopping, for an emergency
/// promotion.
fn best_active_stopper(team: &TeamState) -> Option<usize> {
    let mut best: Option<(usize, i16)> = None;

    for (index, slot) in team.slots.iter().enumerate() {
        if !slot.active {
            continue;
        }
        match best {
            Some((_, st)) if st >= slot.st => {}
            _ => best = Some((index, slot.st)),
        }
    }

    best.map(|(index, _)| index)
}

fn promote_goalkeeper(team: &mut TeamState, index: usize) {
    let slot = &mut team.slots[index];
    slot.pos = Position::GOALKEEPER;
    slot.sh0 = 0.0;
    slot.ps0 = 0.0;
    slot.tk0 = 0.0;
    slot.fatigue_deduction = 0.0;
    team.gk = index;
}
