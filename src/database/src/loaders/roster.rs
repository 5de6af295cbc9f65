//! Fixed-width roster files. Two header lines (column legend and a dash
//! rule), then up to 30 data lines. The reader skips the 206 header
//! bytes, so the writer must emit exactly 102 characters per line.

use engine::{Error, Player, Result, Roster, MAX_PLAYERS};
use std::fs;
use std::path::Path;

/// Column widths, in characters, for
/// Name, Age, Nat, Prs, the six skills, the four abilities and the
/// eleven season stats.
const WIDTHS: [usize; 25] = [
    13, 3, 4, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
];

const LINE_WIDTH: usize = 102;
const HEADER_BYTES: usize = 2 * (LINE_WIDTH + 1);

const LABELS: [&str; 25] = [
    "Name", "Age", "Nat", "Prs", "St", "Tk", "Ps", "Sh", "Sm", "Ag", "KAb", "TAb", "PAb", "SAb",
    "Gam", "Sav", "Ktk", "Kps", "Sht", "Gls", "Ass", "DP", "Inj", "Sus", "Fit",
];

pub fn load_roster(path: &Path) -> Result<Roster> {
    let text = fs::read_to_string(path)?;
    parse_roster(&text, &path.display().to_string())
}

pub fn save_roster(path: &Path, roster: &Roster) -> Result<()> {
    fs::write(path, write_roster(roster))?;
    Ok(())
}

pub fn parse_roster(text: &str, path: &str) -> Result<Roster> {
    let body = text.get(HEADER_BYTES..).ok_or_else(|| {
        Error::parse(path, 1, "file is shorter than the two-line header")
    })?;

    let mut players = Vec::new();

    for (line_no, line) in body.lines().enumerate() {
        let line_no = line_no + 3;

        if line.trim().is_empty() {
            continue;
        }

        if players.len() == MAX_PLAYERS {
            return Err(Error::Capacity(format!(
                "{} carries more than {} data lines",
                path, MAX_PLAYERS
            )));
        }

        players.push(parse_line(line, path, line_no)?);
    }

    Roster::new(players)
}

fn parse_line(line: &str, path: &str, line_no: usize) -> Result<Player> {
    let padded = format!("{:<width$}", line, width = LINE_WIDTH);
    let mut fields = [""; 25];
    let mut offset = 0;

    for (index, width) in WIDTHS.iter().enumerate() {
        fields[index] = padded
            .get(offset..offset + width)
            .ok_or_else(|| Error::parse(path, line_no, "line is not valid fixed-width text"))?
            .trim();
        offset += width;
    }

    let number = |index: usize| -> Result<i16> {
        fields[index].parse::<i16>().map_err(|_| {
            Error::parse(
                path,
                line_no,
                format!("non-numeric {} field {:?}", LABELS[index], fields[index]),
            )
        })
    };

    Ok(Player {
        name: fields[0].to_string(),
        age: number(1)?,
        nationality: fields[2].to_string(),
        preferred_side: fields[3].to_string(),
        st: number(4)?,
        tk: number(5)?,
        ps: number(6)?,
        sh: number(7)?,
        sm: number(8)?,
        ag: number(9)?,
        kab: number(10)?,
        tab: number(11)?,
        pab: number(12)?,
        sab: number(13)?,
        gam: number(14)?,
        sav: number(15)?,
        ktk: number(16)?,
        kps: number(17)?,
        sht: number(18)?,
        gls: number(19)?,
        ass: number(20)?,
        dp: number(21)?,
        inj: number(22)?,
        sus: number(23)?,
        fit: number(24)?,
    })
}

pub fn write_roster(roster: &Roster) -> String {
    let mut out = String::with_capacity((MAX_PLAYERS + 2) * (LINE_WIDTH + 1));

    out.push_str(&header_line());
    out.push('\n');
    out.push_str(&"-".repeat(LINE_WIDTH));
    out.push('\n');

    for player in roster.players() {
        out.push_str(&format_line(player));
        out.push('\n');
    }

    out
}

fn header_line() -> String {
    let mut line = String::with_capacity(LINE_WIDTH);

    for (index, label) in LABELS.iter().enumerate() {
        if index == 0 {
            line.push_str(&format!("{:<width$}", label, width = WIDTHS[index]));
        } else {
            line.push_str(&format!("{:>width$}", label, width = WIDTHS[index]));
        }
    }

    line
}

fn format_line(player: &Player) -> String {
    let mut line = String::with_capacity(LINE_WIDTH);
    let name: String = player.name.chars().take(WIDTHS[0]).collect();

    line.push_str(&format!("{:<13}", name));
    line.push_str(&format!("{:>3}", player.age));
    line.push_str(&format!("{:>4}", player.nationality));
    line.push_str(&format!("{:>4}", player.preferred_side));

    for skill in [player.st, player.tk, player.ps, player.sh, player.sm, player.ag] {
        line.push_str(&format!("{:>3}", skill));
    }

    for value in [
        player.kab, player.tab, player.pab, player.sab, player.gam, player.sav, player.ktk,
        player.kps, player.sht, player.gls, player.ass, player.dp, player.inj, player.sus,
        player.fit,
    ] {
        line.push_str(&format!("{:>4}", value));
    }

    line
}
