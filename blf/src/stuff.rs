use itertools::Itertools;
use log::{info, warn};
use thousands::Separable;

use stowage::entities::{Container, FitResult, Item, PackingSession};

use crate::config::BLFConfig;

/// Feeds a scenario's units into a packing session in input order, one
/// independent first-fit commit per unit.
pub struct Stuffer {
    pub session: PackingSession,
    pub config: BLFConfig,
}

/// Tally of one stuffing run.
#[derive(Clone, Debug)]
pub struct StuffReport {
    /// Number of units placed
    pub placed: usize,
    /// Item ids of the units that found no position, in request order
    pub rejected: Vec<String>,
}

impl Stuffer {
    pub fn new(container: Container, config: BLFConfig) -> Self {
        let session = PackingSession::with_policy(container, config.pack_config.grid_scan());
        Self { session, config }
    }

    pub fn run(&mut self, items: &[(Item, usize)]) -> StuffReport {
        let total: usize = items.iter().map(|(_, qty)| qty).sum();
        let mut placed = 0;
        let mut rejected = Vec::new();

        for (item, qty) in items {
            for _ in 0..*qty {
                match self.session.commit(item) {
                    FitResult::Fit { position, rotation } => {
                        placed += 1;
                        info!(
                            "[BLF] placed unit {placed}/{total} of {} at {position} {rotation}",
                            item.id
                        );
                    }
                    FitResult::NoFit => {
                        rejected.push(item.id.clone());
                        warn!(
                            "[BLF] no position for unit of {} ({}), skipping",
                            item.id, item.dims
                        );
                    }
                }
            }
        }

        info!(
            "[BLF] stuffed {placed}/{total} units, {} of {} mm³ used ({}%)",
            self.session.used_volume().separate_with_commas(),
            self.session.total_volume().separate_with_commas(),
            self.session.utilization()
        );
        for (id, n) in rejected.iter().counts() {
            warn!("[BLF] {n} unit(s) of {id} left unplaced");
        }

        StuffReport { placed, rejected }
    }
}
