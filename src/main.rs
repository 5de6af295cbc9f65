use database::{format_table, LeagueGenerator};
use engine::utils::TimeEstimation;
use engine::{init_percent_ratings, init_random_ratings, RatingSearch, SearchParams, SimConfig};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use std::env;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mode = env::var("MODE").unwrap_or_else(|_| String::from("SEASON"));
    let seed: u64 = env_number("SEED", 0);

    let config = SimConfig::new(database::default_tactics());

    let (league, estimated) = TimeEstimation::estimate(|| LeagueGenerator::generate(seed, &config));
    let mut league = league?;

    info!("league generated: {} ms", estimated);

    match mode.as_str() {
        "SEARCH" => run_search(league, &config, seed)?,
        _ => {
            let (result, estimated) = TimeEstimation::estimate(|| league.play_season(&config));
            result?;

            info!("season simulated: {} ms", estimated);

            print!("{}", format_table(&league.table));
        }
    }

    Ok(())
}

/// Fits ratings against the generated league's season: the baseline is
/// played once, then the search starts from percentile (default) or
/// random ratings.
fn run_search(
    mut baseline: engine::League,
    config: &SimConfig,
    seed: u64,
) -> color_eyre::Result<()> {
    baseline.play_season(config)?;

    let params = SearchParams {
        nsteps: env_number("NSTEPS", 100) as u32,
        nreps: env_number("NREPS", 2) as usize,
        ..SearchParams::default()
    };

    let initial = if env::var("INIT").as_deref() == Ok("RANDOM") {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        init_random_ratings(&baseline, &mut rng)
    } else {
        init_percent_ratings(&baseline)
    };

    let mut search = RatingSearch::new(config, baseline, initial, params, seed);

    let (reports, estimated) = TimeEstimation::estimate(|| search.run());
    let reports = reports?;

    info!("search simulated: {} ms", estimated);

    if let Some(last) = reports.last() {
        info!("final rmse {:.3}, best {:.3}", last.rmse, search.best_rmse());
    }

    Ok(())
}

fn env_number(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
