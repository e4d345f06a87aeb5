//! Parallel candidate evaluation.
//!
//! Work is split over candidate sites only. Each site's value is computed
//! by a single closure call, so results are identical for every pool.

use std::fmt::{self, Debug};

use rayon::prelude::*;
use siteforge_config::ThreadCount;
use siteforge_core::Location;
use tracing::warn;

/// Where per-site evaluations run.
pub enum EvaluationPool {
    /// On the calling thread.
    Sequential,
    /// On the global rayon pool.
    Global,
    /// On a dedicated rayon pool.
    Dedicated(rayon::ThreadPool),
}

impl Debug for EvaluationPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "EvaluationPool::Sequential"),
            Self::Global => write!(f, "EvaluationPool::Global"),
            Self::Dedicated(pool) => write!(
                f,
                "EvaluationPool::Dedicated({} threads)",
                pool.current_num_threads()
            ),
        }
    }
}

impl EvaluationPool {
    /// Builds the pool described by `thread_count`.
    ///
    /// Falls back to the global pool if a dedicated pool cannot be built.
    pub fn from_thread_count(thread_count: ThreadCount) -> Self {
        match thread_count {
            ThreadCount::None | ThreadCount::Count(0) | ThreadCount::Count(1) => Self::Sequential,
            ThreadCount::Auto => Self::Global,
            ThreadCount::Count(n) => {
                match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                    Ok(pool) => Self::Dedicated(pool),
                    Err(err) => {
                        warn!(
                            event = "thread_pool_fallback",
                            threads = n as u64,
                            error = %err,
                        );
                        Self::Global
                    }
                }
            }
        }
    }

    /// Evaluates `f` at every site, preserving site order.
    pub fn map_sites<F>(&self, sites: &[Location], f: F) -> Vec<f64>
    where
        F: Fn(&Location) -> f64 + Sync + Send,
    {
        match self {
            Self::Sequential => sites.iter().map(f).collect(),
            Self::Global => sites.par_iter().map(f).collect(),
            Self::Dedicated(pool) => pool.install(|| sites.par_iter().map(&f).collect()),
        }
    }
}
