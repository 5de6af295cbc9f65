//! `league.dat`: one team name per line. The first `n_teams` entries are
//! taken and stored sorted lexicographically.

use engine::{Error, Result};
use std::fs;
use std::path::Path;

pub fn load_league_file(path: &Path, n_teams: usize) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    parse_league_file(&text, &path.display().to_string(), n_teams)
}

pub fn parse_league_file(text: &str, path: &str, n_teams: usize) -> Result<Vec<String>> {
    let mut names: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(n_teams)
        .map(str::to_string)
        .collect();

    if names.len() < n_teams {
        return Err(Error::Capacity(format!(
            "{} lists {} teams, {} requested",
            path,
            names.len(),
            n_teams
        )));
    }

    names.sort();

    Ok(names)
}

pub fn write_league_file(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_first_n_names_sorted() {
        let text = "Zebra Town\nAshford Rovers\nMarwood United\nUnused FC\n";
        let names = parse_league_file(text, "league.dat", 3).unwrap();

        assert_eq!(names, vec!["Ashford Rovers", "Marwood United", "Zebra Town"]);
    }

    #[test]
    fn too_few_teams_is_a_capacity_error() {
        assert!(matches!(
            parse_league_file("Only One\n", "league.dat", 2),
            Err(Error::Capacity(_))
        ));
    }

    #[test]
    fn round_trips_through_the_writer() {
        let names = vec!["Ashford Rovers".to_string(), "Zebra Town".to_string()];
        let text = write_league_file(&names);

        assert_eq!(parse_league_file(&text, "league.dat", 2).unwrap(), names);
    }
}
