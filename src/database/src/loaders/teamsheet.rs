//! Teamsheet files: team name, tactic letter, a blank line, the eleven
//! starters, a blank line, the five substitutes, a blank line, and the
//! `PK:` line. Entries are `<POS> <Name>` with the goalkeeper's blank
//! side collapsed to a single space.

use engine::{Error, Position, Result, Tactic, Teamsheet};
use std::fs;
use std::path::Path;

pub fn load_teamsheet(path: &Path) -> Result<Teamsheet> {
    let text = fs::read_to_string(path)?;
    parse_teamsheet(&text, &path.display().to_string())
}

pub fn save_teamsheet(path: &Path, sheet: &Teamsheet) -> Result<()> {
    fs::write(path, write_teamsheet(sheet))?;
    Ok(())
}

pub fn parse_teamsheet(text: &str, path: &str) -> Result<Teamsheet> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() < 22 {
        return Err(Error::parse(
            path,
            lines.len(),
            "teamsheet is shorter than 22 lines",
        ));
    }

    let team_name = lines[0].trim().to_string();

    let tactic_token = lines[1].trim();
    let tactic = tactic_token
        .chars()
        .next()
        .filter(|_| tactic_token.len() == 1)
        .and_then(Tactic::from_letter)
        .ok_or_else(|| {
            Error::parse(path, 2, format!("unknown tactic {:?}", tactic_token))
        })?;

    let mut starters = Vec::with_capacity(11);
    for line_no in 3..14 {
        starters.push(parse_entry(lines[line_no], path, line_no + 1)?);
    }

    let mut substitutes = Vec::with_capacity(5);
    for line_no in 15..20 {
        substitutes.push(parse_entry(lines[line_no], path, line_no + 1)?);
    }

    let penalty_kicker = lines[21]
        .strip_prefix("PK: ")
        .ok_or_else(|| Error::parse(path, 22, "expected PK: <Name>"))?
        .trim()
        .to_string();

    let sheet = Teamsheet {
        team_name,
        tactic,
        starters,
        substitutes,
        penalty_kicker,
    };
    sheet.validate()?;

    Ok(sheet)
}

fn parse_entry(line: &str, path: &str, line_no: usize) -> Result<(Position, String)> {
    let (code, name) = line
        .split_once(' ')
        .ok_or_else(|| Error::parse(path, line_no, "expected <POS> <Name>"))?;

    let position = Position::parse(code)
        .ok_or_else(|| Error::parse(path, line_no, format!("unknown position {:?}", code)))?;

    Ok((position, name.trim().to_string()))
}

pub fn write_teamsheet(sheet: &Teamsheet) -> String {
    let mut out = String::new();

    out.push_str(&sheet.team_name);
    out.push('\n');
    out.push(sheet.tactic.letter());
    out.push_str("\n\n");

    for (position, name) in &sheet.starters {
        out.push_str(&format_entry(position, name));
    }
    out.push('\n');

    for (position, name) in &sheet.substitutes {
        out.push_str(&format_entry(position, name));
    }
    out.push('\n');

    out.push_str(&format!("PK: {}\n", sheet.penalty_kicker));

    out
}

fn format_entry(position: &Position, name: &str) -> String {
    // the trailing blank of "GK " collapses into the separator
    format!("{} {}\n", position.code().trim_end(), name)
}
