mod engine;
mod init;
mod metric;

pub use engine::{RatingSearch, SearchParams, StepReport};
pub use init::{init_percent_ratings, init_random_ratings, RatingSet};
pub use metric::rmse;
