/// One standings row. Rows stay in team-index order; `place` carries the
/// ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub place: i16,
    pub team: String,
    pub p: i16,
    pub w: i16,
    pub d: i16,
    pub l: i16,
    pub gf: i16,
    pub ga: i16,
    pub gd: i16,
    pub pts: i16,
}

/// Season standings accumulator with the global ranking pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueTable {
    pub rows: Vec<TableRow>,
}

impl LeagueTable {
    pub fn new(team_names: &[String]) -> LeagueTable {
        LeagueTable {
            rows: team_names
                .iter()
                .map(|name| TableRow {
                    team: name.clone(),
                    ..TableRow::default()
                })
                .collect(),
        }
    }

    /// Folds one result into both rows. Indices are 0-based.
    pub fn update(&mut self, home: usize, away: usize, home_goals: i16, away_goals: i16) {
        self.update_row(home, home_goals, away_goals);
        self.update_row(away, away_goals, home_goals);
    }

    fn update_row(&mut self, index: usize, scored: i16, conceded: i16) {
        let row = &mut self.rows[index];

        row.p += 1;
        row.gf += scored;
        row.ga += conceded;

        if scored > conceded {
            row.w += 1;
        } else if scored == conceded {
            row.d += 1;
        } else {
            row.l += 1;
        }

        row.gd = row.gf - row.ga;
        row.pts = 3 * row.w + row.d;
    }

    /// Assigns `place` 1..n by repeatedly taking the current leader and
    /// masking it out. Ties break strictly on (points, goal difference,
    /// goals for). The `+ 1` offset on goals-for mirrors the original
    /// product-comparison guard against all-zero rows.
    pub fn rank(&mut self) {
        let n = self.rows.len();
        let mut placed = vec![false; n];

        for place in 1..=n as i16 {
            let mut leader = None;

            for index in 0..n {
                if placed[index] {
                    continue;
                }
                match leader {
                    None => leader = Some(index),
                    Some(best) if Self::outranks(&self.rows[index], &self.rows[best]) => {
                        leader = Some(index)
                    }
                    _ => {}
                }
            }

            let leader = leader.expect("fewer placed rows than rows");
            self.rows[leader].place = place;
            placed[leader] = true;
        }
    }

    fn outranks(a: &TableRow, b: &TableRow) -> bool {
        if a.pts != b.pts {
            return a.pts > b.pts;
        }
        if a.gd != b.gd {
            return a.gd > b.gd;
        }
        a.gf + 1 > b.gf + 1
    }

    /// Rows in ranked order, for display.
    pub fn standings(&self) -> Vec<&TableRow> {
        let mut rows: Vec<&TableRow> = self.rows.iter().collect();
        rows.sort_by_key(|row| row.place);
        rows
    }

    pub fn reset(&mut self) {
        for row in &mut self.rows {
            let team = std::mem::take(&mut row.team);
            *row = TableRow {
                team,
                ..TableRow::default()
            };
        }
    }
}
