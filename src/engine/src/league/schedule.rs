/// One pairing of a week. Team indices are 1-based into the league's
/// team vector; the match index is season-global and seeds the match's
/// RNG stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
    pub match_index: u64,
}

/// A double round-robin: `2 (n - 1)` weeks, every team appearing at most
/// once per week. Odd team counts get a bye through ghost-team
/// elimination.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub weeks: Vec<Vec<Fixture>>,
}

impl Schedule {
    /// Circle method: one half, then the same pairings with home and away
    /// swapped.
    pub fn build(n_teams: usize) -> Schedule {
        if n_teams < 2 {
            return Schedule::default();
        }

        let ghost = n_teams % 2 == 1;
        let n = if ghost { n_teams + 1 } else { n_teams };
        let ghost_id = if ghost { n } else { 0 };

        let mut ring: Vec<usize> = (1..=n).collect();
        let mut first_half: Vec<Vec<(usize, usize)>> = Vec::with_capacity(n - 1);

        for round in 0..n - 1 {
            let mut pairs = Vec::with_capacity(n / 2);

            for i in 0..n / 2 {
                let a = ring[i];
                let b = ring[n - 1 - i];

                if a == ghost_id || b == ghost_id {
                    continue;
                }

                // alternate sides so nobody hosts a whole half in a row
                if round % 2 == 0 {
                    pairs.push((a, b));
                } else {
                    pairs.push((b, a));
                }
            }

            first_half.push(pairs);

            // rotate everything but the first seat
            let last = ring.pop().expect("ring is never empty");
            ring.insert(1, last);
        }

        let mut weeks = Vec::with_capacity(2 * (n - 1));
        let mut match_index = 0u64;

        for pairs in first_half
            .iter()
            .map(|w| w.clone())
            .chain(first_half.iter().map(|w| {
                w.iter().map(|&(home, away)| (away, home)).collect()
            }))
        {
            let mut week = Vec::with_capacity(pairs.len());

            for (home, away) in pairs {
                week.push(Fixture {
                    home,
                    away,
                    match_index,
                });
                match_index += 1;
            }

            weeks.push(week);
        }

        Schedule { weeks }
    }

    #[inline]
    pub fn n_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn total_matches(&self) -> usize {
        self.weeks.iter().map(|week| week.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn every_pair_meets_twice_once_at_each_home() {
        for n_teams in [2, 5, 6, 20] {
            let schedule = Schedule::build(n_teams);
            let mut seen: HashMap<(usize, usize), usize> = HashMap::new();

            for fixture in schedule.weeks.iter().flatten() {
                *seen.entry((fixture.home, fixture.away)).or_default() += 1;
            }

            for home in 1..=n_teams {
                for away in 1..=n_teams {
                    if home == away {
                        continue;
                    }
                    assert_eq!(
                        seen.get(&(home, away)),
                        Some(&1),
                        "{} vs {} in a {}-team league",
                        home,
                        away,
                        n_teams
                    );
                }
            }

            assert_eq!(schedule.total_matches(), n_teams * (n_teams - 1));
        }
    }

    #[test]
    fn each_team_appears_at_most_once_per_week() {
        for n_teams in [5, 6, 20] {
            let schedule = Schedule::build(n_teams);

            for week in &schedule.weeks {
                let mut seen = vec![false; n_teams + 1];

                for fixture in week {
                    assert!(!seen[fixture.home]);
                    assert!(!seen[fixture.away]);
                    seen[fixture.home] = true;
                    seen[fixture.away] = true;
                }
            }
        }
    }

    #[test]
    fn even_league_has_full_weeks() {
        let schedule = Schedule::build(20);

        assert_eq!(schedule.n_weeks(), 38);
        assert!(schedule.weeks.iter().all(|week| week.len() == 10));
    }

    #[test]
    fn odd_league_gives_one_bye_per_week() {
        let schedule = Schedule::build(5);

        assert_eq!(schedule.n_weeks(), 10);
        assert!(schedule.weeks.iter().all(|week| week.len() == 2));
    }

    #[test]
    fn match_indices_are_unique_and_dense() {
        let schedule = Schedule::build(20);
        let mut indices: Vec<u64> = schedule
            .weeks
            .iter()
            .flatten()
            .map(|fixture| fixture.match_index)
            .collect();

        indices.sort_unstable();

        assert_eq!(indices, (0..380u64).collect::<Vec<_>>());
    }
}
