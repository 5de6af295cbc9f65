pub mod generators;
pub mod loaders;
pub mod setup;
pub mod writers;

pub use generators::{LeagueGenerator, NamePool, PlayerGenerator};
pub use loaders::init_league;
pub use loaders::league::load_league_file;
pub use loaders::roster::{load_roster, parse_roster, save_roster, write_roster};
pub use loaders::tactics::{default_tactics, load_tactics};
pub use loaders::teamsheet::{load_teamsheet, parse_teamsheet, save_teamsheet, write_teamsheet};
pub use setup::seed_data_dir;
pub use writers::commentary::write_commentary;
pub use writers::table::{format_table, parse_table, write_table};
pub use writers::{save_rosters, team_file_name};
