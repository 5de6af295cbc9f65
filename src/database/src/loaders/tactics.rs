use engine::{Result, TacticsTable};
use std::fs;
use std::path::Path;

/// The packaged multiplier table.
pub const DEFAULT_TACTICS: &str = include_str!("../data/tactics.dat");

pub fn load_tactics(path: &Path) -> Result<TacticsTable> {
    let text = fs::read_to_string(path)?;
    let table = TacticsTable::parse(&text, &path.display().to_string())?;
    table.validate()?;
    Ok(table)
}

/// The packaged table, validated once at startup.
pub fn default_tactics() -> TacticsTable {
    let table = TacticsTable::parse(DEFAULT_TACTICS, "tactics.dat")
        .expect("packaged tactics table parses");
    table.validate().expect("packaged tactics table is complete");
    table
}
