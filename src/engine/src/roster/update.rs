use super::Roster;
use crate::config::UpdateConfig;
use crate::r#match::TeamState;
use rand::Rng;

/// Folds one side's match state back into its roster, then runs the
/// inter-match maintenance pass over every roster row.
///
/// Lineup slots are matched to roster rows by first-hit name search, so a
/// state whose slot names match nothing (an empty state) leaves only the
/// maintenance effects.
pub fn update_roster<R: Rng>(
    roster: &mut Roster,
    state: &TeamState,
    config: &UpdateConfig,
    rng: &mut R,
) {
    for slot in &state.slots {
        let Some(index) = roster.find(&slot.name) else {
            continue;
        };

        let player = &mut roster.players[index];

        if slot.minutes > 0 {
            player.gam += 1;
        }

        player.sav += slot.sav;
        player.ktk += slot.ktk;
        player.kps += slot.kps;
        player.sht += slot.sht;
        player.gls += slot.gls;
        player.ass += slot.ass;

        let dp_before = player.dp;
        player.dp += slot.yellow * config.dp_yellow + i16::from(slot.red) * config.dp_red;

        if slot.injured && config.max_injury > 0 {
            player.inj += rng.gen_range(0..config.max_injury);
        }

        player.fit = (100.0 * slot.fatigue).floor() as i16;

        // Suspension accrual adds the full floor value, not the delta,
        // when a new multiple of the margin is crossed.
        let dp0 = dp_before / config.suspension_margin;
        let dpf = player.dp / config.suspension_margin;
        if dpf > dp0 {
            player.sus += dpf;
        }

        player.saturate_stats();
    }

    for player in &mut roster.players {
        player.fit = (player.fit + config.fitness_gain).min(100);
        if player.inj == 1 {
            player.fit = config.fit_after_injury;
        }
        player.sus = (player.sus - 1).max(0);
        player.inj = (player.inj - 1).max(0);
    }
}
