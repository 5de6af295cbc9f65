use super::{rmse, RatingSet};
use crate::config::SimConfig;
use crate::error::Result;
use crate::exec;
use crate::league::League;
use crate::utils::derive_seed;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Hyper-parameters of the threshold-acceptance search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub nsteps: u32,
    pub nreps: usize,
    pub thresh0: f64,
    pub threshd: f64,
    pub stepsize0: i16,
    /// Consecutive rejections before restarting from the best snapshot.
    pub stale_limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            nsteps: 100,
            nreps: 2,
            thresh0: 50.0,
            threshd: 1.0,
            stepsize0: 8,
            stale_limit: 100,
        }
    }
}

/// What one search step did, for progress reporting.
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    pub step: u32,
    pub rmse: f64,
    pub accepted: bool,
    pub restarted: bool,
    pub best_rmse: f64,
}

/// Fits player ratings against a baseline league's season-end stats by
/// repeated full-season simulation under threshold acceptance: accept a
/// proposal whose error stays within a shrinking threshold of the last
/// accepted one, propose from the last acceptance on rejection, restart
/// from the best snapshot after a stale streak.
pub struct RatingSearch<'c> {
    config: &'c SimConfig,
    params: SearchParams,
    baseline: League,
    replicas: Vec<League>,

    ratings: RatingSet,
    last: RatingSet,
    best: RatingSet,

    rmse_last: f64,
    rmse_best: f64,
    thresh: f64,
    stepsize: i16,
    stale: u32,
    step: u32,

    rng: ChaCha8Rng,
}

impl<'c> RatingSearch<'c> {
    pub fn new(
        config: &'c SimConfig,
        baseline: League,
        initial: RatingSet,
        params: SearchParams,
        seed: u64,
    ) -> RatingSearch<'c> {
        let replicas = (0..params.nreps)
            .map(|replica| {
                let mut league = baseline.clone();
                league.set_root_seed(Self::replica_seed(seed, replica));
                league
            })
            .collect();

        RatingSearch {
            config,
            thresh: params.thresh0,
            stepsize: params.stepsize0,
            params,
            baseline,
            replicas,
            last: initial.clone(),
            best: initial.clone(),
            ratings: initial,
            rmse_last: f64::INFINITY,
            rmse_best: f64::INFINITY,
            stale: 0,
            step: 0,
            rng: ChaCha8Rng::seed_from_u64(derive_seed(seed, u64::MAX)),
        }
    }

    /// Root seed of one replica's seasons, fixed across steps.
    pub fn replica_seed(search_seed: u64, replica: usize) -> u64 {
        derive_seed(search_seed, replica as u64)
    }

    pub fn best_rmse(&self) -> f64 {
        self.rmse_best
    }

    pub fn best_ratings(&self) -> &RatingSet {
        &self.best
    }

    pub fn current_ratings(&self) -> &RatingSet {
        &self.ratings
    }

    pub fn run(&mut self) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.params.nsteps as usize);

        while self.step < self.params.nsteps {
            let report = self.step_once()?;

            debug!(
                "search step {}: rmse {:.3}, {}{}",
                report.step,
                report.rmse,
                if report.accepted { "accepted" } else { "rejected" },
                if report.restarted { ", restarted" } else { "" },
            );

            reports.push(report);
        }

        info!(
            "search finished after {} steps, best rmse {:.3}",
            self.step, self.rmse_best
        );

        Ok(reports)
    }

    /// One propose-simulate-metric-decide cycle.
    pub fn step_once(&mut self) -> Result<StepReport> {
        self.step += 1;

        let metric = self.simulate()?;

        // a non-finite metric is treated as a plain rejection
        let accepted = metric.is_finite() && metric < self.rmse_last + self.thresh;
        let mut restarted = false;

        if accepted {
            if metric < self.rmse_best && self.step > 1 {
                self.best = self.ratings.clone();
                self.rmse_best = metric;
            }

            self.rmse_last = metric;
            self.last = self.ratings.clone();
            self.thresh = (self.thresh - self.params.threshd).max(0.001);
            self.stale = 0;

            self.ratings = self.ratings.perturb(self.stepsize, &mut self.rng);
        } else {
            self.ratings = self.last.perturb(self.stepsize, &mut self.rng);
            self.stepsize = (self.stepsize - 1).max(1);
            self.stale += 1;

            if self.stale >= self.params.stale_limit {
                self.ratings = self.best.clone();
                self.last = self.best.clone();
                self.thresh = self.params.thresh0;
                self.stepsize = self.params.stepsize0;
                self.rmse_last = f64::INFINITY;
                self.stale = 0;
                restarted = true;
            }
        }

        Ok(StepReport {
            step: self.step,
            rmse: metric,
            accepted,
            restarted,
            best_rmse: self.rmse_best,
        })
    }

    /// Replays a season in every replica under the current ratings and
    /// measures the error against the baseline.
    fn simulate(&mut self) -> Result<f64> {
        let config = self.config;
        let ratings = &self.ratings;

        let outcomes: Vec<Result<()>> = exec::par_map_mut(&mut self.replicas, |replica| {
            ratings.apply_to(replica);
            replica.reset_all(config);
            replica.play_season(config)
        });

        for outcome in outcomes {
            outcome?;
        }

        Ok(rmse(&self.baseline, &self.replicas))
    }
}
