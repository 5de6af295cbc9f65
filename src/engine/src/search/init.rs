use crate::league::League;
use crate::roster::Player;
use itertools::Itertools;
use rand::Rng;

/// The candidate skill ratings of every roster slot in the league, the
/// quantity the search perturbs. Placeholder rows are masked out and
/// never touched.
#[derive(Debug, Clone)]
pub struct RatingSet {
    /// `ratings[team][player] = [st, tk, ps, sh, sm, ag]`
    pub ratings: Vec<Vec<[i16; 6]>>,
    mask: Vec<Vec<bool>>,
}

impl RatingSet {
    pub fn from_league(league: &League) -> RatingSet {
        let ratings = league
            .teams
            .iter()
            .map(|team| team.roster.players.iter().map(Player::ratings).collect())
            .collect();

        RatingSet {
            ratings,
            mask: eligibility_mask(league),
        }
    }

    /// Writes the ratings through to a league's live and pristine rosters.
    pub fn apply_to(&self, league: &mut League) {
        for (team, (ratings, mask)) in self.ratings.iter().zip(&self.mask).enumerate() {
            for (player, rating) in ratings.iter().enumerate() {
                if mask[player] {
                    league.set_player_ratings(team, player, *rating);
                }
            }
        }
    }

    /// A new proposal: every eligible rating moved by `U{-stepsize..stepsize}`
    /// per skill, clamped into 1..99.
    pub fn perturb<R: Rng>(&self, stepsize: i16, rng: &mut R) -> RatingSet {
        let stepsize = stepsize.max(1);
        let mut next = self.clone();

        for (ratings, mask) in next.ratings.iter_mut().zip(&self.mask) {
            for (rating, eligible) in ratings.iter_mut().zip(mask) {
                if !eligible {
                    continue;
                }
                for skill in rating.iter_mut() {
                    *skill = (*skill + rng.gen_range(-stepsize..=stepsize)).clamp(1, 99);
                }
            }
        }

        next
    }
}

fn eligibility_mask(league: &League) -> Vec<Vec<bool>> {
    league
        .teams
        .iter()
        .map(|team| {
            team.roster
                .players
                .iter()
                .map(|p| !p.is_placeholder())
                .collect()
        })
        .collect()
}

/// Six independent `U{1..99}` draws per real player.
pub fn init_random_ratings<R: Rng>(league: &League, rng: &mut R) -> RatingSet {
    let mut set = RatingSet::from_league(league);

    for (ratings, mask) in set.ratings.iter_mut().zip(&set.mask) {
        for (rating, eligible) in ratings.iter_mut().zip(mask) {
            if !eligible {
                continue;
            }
            for skill in rating.iter_mut() {
                *skill = rng.gen_range(1..=99);
            }
        }
    }

    set
}

/// Ratings seeded from the baseline's season-end stats: the empirical CDF
/// of saves, key tackles, key passes and shots across the league's real
/// players, scaled to 1..99 and assigned to St, Tk, Ps and Sh. Aggression
/// and stamina stay at the fixed 30 and 50 the source uses.
pub fn init_percent_ratings(baseline: &League) -> RatingSet {
    let population = |stat: fn(&Player) -> i16| -> Vec<i16> {
        baseline
            .teams
            .iter()
            .flat_map(|team| team.roster.players.iter())
            .filter(|p| !p.is_placeholder())
            .map(stat)
            .sorted_unstable()
            .collect()
    };

    let sav = population(|p| p.sav);
    let ktk = population(|p| p.ktk);
    let kps = population(|p| p.kps);
    let sht = population(|p| p.sht);

    let mut set = RatingSet::from_league(baseline);

    for (team_index, team) in baseline.teams.iter().enumerate() {
        for (player_index, player) in team.roster.players.iter().enumerate() {
            if player.is_placeholder() {
                continue;
            }

            set.ratings[team_index][player_index] = [
                percentile(&sav, player.sav),
                percentile(&ktk, player.ktk),
                percentile(&kps, player.kps),
                percentile(&sht, player.sht),
                50,
                30,
            ];
        }
    }

    set
}

fn percentile(sorted: &[i16], value: i16) -> i16 {
    if sorted.is_empty() {
        return 1;
    }

    let below_or_equal = sorted.partition_point(|x| *x <= value);
    let cdf = below_or_equal as f64 / sorted.len() as f64;

    ((cdf * 100.0) as i16).clamp(1, 99)
}
