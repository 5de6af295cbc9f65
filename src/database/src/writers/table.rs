//! The league-table text format: a fixed header, a dash rule, and one
//! fixed-width row per team in ranked order.

use engine::{Error, League, LeagueTable, Result, TableRow};
use std::fs;
use std::path::Path;

pub const TABLE_HEADER: &str =
    "Pl   Team                    P    W   D   L    GF   GA   GD   Pts";

/// Column widths of the header above; the last column is free.
const WIDTHS: [usize; 9] = [5, 24, 5, 4, 4, 5, 5, 5, 5];

pub fn format_table(table: &LeagueTable) -> String {
    let mut out = String::new();

    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(TABLE_HEADER.len()));
    out.push('\n');

    for row in table.standings() {
        let name: String = row.team.chars().take(WIDTHS[1] - 1).collect();

        out.push_str(&format!(
            "{:<5}{:<24}{:<5}{:<4}{:<4}{:<5}{:<5}{:<5}{:<5}{}\n",
            row.place, name, row.p, row.w, row.d, row.l, row.gf, row.ga, row.gd, row.pts
        ));
    }

    out
}

pub fn write_table(league: &League, path: &Path) -> Result<()> {
    fs::write(path, format_table(&league.table))?;
    Ok(())
}

pub fn parse_table(text: &str, path: &str) -> Result<LeagueTable> {
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate().skip(2) {
        if line.trim().is_empty() {
            continue;
        }

        rows.push(parse_row(line, path, line_no + 1)?);
    }

    // rows come ranked; restore team-index order is not possible from the
    // file alone, so the parsed table keeps ranked order
    Ok(LeagueTable { rows })
}

fn parse_row(line: &str, path: &str, line_no: usize) -> Result<TableRow> {
    let mut fields = [""; 9];
    let mut rest = line;

    for (index, width) in WIDTHS.iter().enumerate() {
        let take = (*width).min(rest.len());
        fields[index] = rest
            .get(..take)
            .ok_or_else(|| Error::parse(path, line_no, "line is not valid fixed-width text"))?
            .trim();
        rest = &rest[take..];
    }

    let pts_field = rest.trim();

    let number = |field: &str, label: &str| -> Result<i16> {
        field.parse::<i16>().map_err(|_| {
            Error::parse(path, line_no, format!("non-numeric {} field {:?}", label, field))
        })
    };

    Ok(TableRow {
        place: number(fields[0], "Pl")?,
        team: fields[1].to_string(),
        p: number(fields[2], "P")?,
        w: number(fields[3], "W")?,
        d: number(fields[4], "D")?,
        l: number(fields[5], "L")?,
        gf: number(fields[6], "GF")?,
        ga: number(fields[7], "GA")?,
        gd: number(fields[8], "GD")?,
        pts: number(pts_field, "Pts")?,
    })
}
