//! Per-player contribution pipeline: the effective shooting, passing and
//! tackling values the event probabilities consume. Applied to every
//! lineup slot at kickoff and to a single slot after a substitution.

use super::TeamState;
use crate::tactics::{PositionGroup, SkillKind, Tactic, TacticsTable};

/// Recomputes `sh0/ps0/tk0` for every slot from the copied skills, in
/// order: side balance, preferred-side penalty, tactic multiplier,
/// opponent bonus. Goalkeeper-group slots contribute nothing.
pub fn compute_contribs(team: &mut TeamState, opponent_tactic: Tactic, table: &TacticsTable) {
    let factors = side_factors(team);

    for index in 0..team.slots.len() {
        adjust_slot(team, index, &factors, opponent_tactic, table);
    }
}

/// Refreshes one slot only, with side factors recomputed from the current
/// active players. Used when a substitute enters outside their position.
pub fn refresh_slot(
    team: &mut TeamState,
    index: usize,
    opponent_tactic: Tactic,
    table: &TacticsTable,
) {
    let factors = side_factors(team);
    adjust_slot(team, index, &factors, opponent_tactic, table);
}

fn adjust_slot(
    team: &mut TeamState,
    index: usize,
    factors: &[f32; 6],
    opponent_tactic: Tactic,
    table: &TacticsTable,
) {
    let own_tactic = team.tactic;
    let slot = &mut team.slots[index];

    if slot.is_goalkeeper() {
        slot.sh0 = 0.0;
        slot.ps0 = 0.0;
        slot.tk0 = 0.0;
        return;
    }

    let mut sh0 = slot.sh as f32;
    let mut ps0 = slot.ps as f32;
    let mut tk0 = slot.tk as f32;

    // (a) side balance of the slot's position group
    let factor = factors[slot.pos.group.index()];
    sh0 *= factor;
    ps0 *= factor;
    tk0 *= factor;

    // (b) playing off the preferred side
    if !slot.on_preferred_side() {
        sh0 *= 0.75;
        ps0 *= 0.75;
        tk0 *= 0.75;
    }

    // (c) own tactic, (d) opponent-dependent bonus
    let group = slot.pos.group;
    sh0 *= table.tact_mult(own_tactic, group, SkillKind::Shooting)
        * table.bonus_mult(own_tactic, opponent_tactic, group, SkillKind::Shooting);
    ps0 *= table.tact_mult(own_tactic, group, SkillKind::Passing)
        * table.bonus_mult(own_tactic, opponent_tactic, group, SkillKind::Passing);
    tk0 *= table.tact_mult(own_tactic, group, SkillKind::Tackling)
        * table.bonus_mult(own_tactic, opponent_tactic, group, SkillKind::Tackling);

    slot.sh0 = sh0;
    slot.ps0 = ps0;
    slot.tk0 = tk0;
}

/// Per-group side-balance factor over the active players: a lopsided
/// right/left split costs up to 25%, a crowded all-central line 13%.
fn side_factors(team: &TeamState) -> [f32; 6] {
    let mut factors = [1.0f32; 6];

    for group in PositionGroup::ALL {
        if group.is_goalkeeper() {
            continue;
        }

        let mut right = 0i32;
        let mut left = 0i32;
        let mut centre = 0i32;

        for slot in team.slots.iter().filter(|s| s.active) {
            if slot.pos.group != group {
                continue;
            }
            match slot.pos.side {
                'R' => right += 1,
                'L' => left += 1,
                'C' => centre += 1,
                _ => {}
            }
        }

        factors[group.index()] = if right != left {
            1.0 - 0.25 * (right - left).abs() as f32 / (right + left) as f32
        } else if centre > 3 && right == 0 && left == 0 {
            0.87
        } else {
            1.0
        };
    }

    factors
}
