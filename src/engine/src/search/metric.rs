use crate::league::League;

/// Root-mean-square error between a baseline league and a set of played
/// replicas, over the eight per-player season stats and the eight table
/// stats, normalised by teams times replicas.
pub fn rmse(baseline: &League, replicas: &[League]) -> f64 {
    let mut sum_sq: i64 = 0;

    for replica in replicas {
        for (base_team, rep_team) in baseline.teams.iter().zip(replica.teams.iter()) {
            for (base, rep) in base_team
                .roster
                .players
                .iter()
                .zip(rep_team.roster.players.iter())
            {
                for (x, y) in [
                    (base.gam, rep.gam),
                    (base.sav, rep.sav),
                    (base.ktk, rep.ktk),
                    (base.kps, rep.kps),
                    (base.sht, rep.sht),
                    (base.gls, rep.gls),
                    (base.ass, rep.ass),
                    (base.dp, rep.dp),
                ] {
                    let diff = (x - y) as i64;
                    sum_sq += diff * diff;
                }
            }
        }

        for (base, rep) in baseline.table.rows.iter().zip(replica.table.rows.iter()) {
            for (x, y) in [
                (base.p, rep.p),
                (base.w, rep.w),
                (base.d, rep.d),
                (base.l, rep.l),
                (base.gf, rep.gf),
                (base.ga, rep.ga),
                (base.gd, rep.gd),
                (base.pts, rep.pts),
            ] {
                let diff = (x - y) as i64;
                sum_sq += diff * diff;
            }
        }
    }

    let n = baseline.n_teams() * replicas.len();
    if n == 0 {
        return f64::NAN;
    }

    (sum_sq as f64 / n as f64).sqrt()
}
