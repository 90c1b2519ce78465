use log::{debug, info, trace, warn};
use thousands::Separable;

use crate::entities::{Item, Part, PlacedPart, Sheet};
use crate::error::{ConfigError, RejectedPart};
use crate::ledger::OccupancyLedger;
use crate::metrics::Metrics;
use crate::search::{PlacementSearch, SearchOutcome};
use crate::util::{NestConfig, StrategyKind, assertions};
use crate::{search, sorting};

/// Greedy first-fit nesting of parts onto a single sheet.
///
/// Parts are sorted once, then each one is offered to the configured [`PlacementSearch`] exactly once.
/// A committed part is never moved again and an unplaced part is never retried.
pub struct NestingEngine {
    sheet: Sheet,
    config: NestConfig,
    search: Box<dyn PlacementSearch>,
}

/// Outcome of [`NestingEngine::nest`].
#[derive(Clone, Debug)]
pub struct NestingSolution {
    /// Placed parts in the order they were committed
    pub placed: Vec<PlacedPart>,
    /// Ids of the valid parts for which no position was found, in processing order
    pub unplaced: Vec<u64>,
    /// Parts excluded from the run because they failed validation, in input order
    pub rejected: Vec<RejectedPart>,
    pub metrics: Metrics,
    /// Total number of candidates evaluated by the search
    pub n_evaluations: usize,
}

/// Lifecycle of a single part during a run.
#[derive(Debug)]
enum PartState {
    Pending,
    TryingRotations,
    Placed(PlacedPart),
    Unplaced,
}

impl NestingEngine {
    pub fn new(sheet: Sheet, config: NestConfig) -> Result<Self, ConfigError> {
        validate_config(&sheet, &config)?;
        let search = search::from_config(&config);
        Ok(NestingEngine {
            sheet,
            config,
            search,
        })
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn config(&self) -> &NestConfig {
        &self.config
    }

    /// Nests `parts` onto an empty sheet.
    ///
    /// Fails only for configuration problems, which are detected before any part is processed.
    /// Invalid parts are reported in [`NestingSolution::rejected`].
    pub fn nest(&self, parts: &[Part]) -> Result<NestingSolution, ConfigError> {
        for part in parts {
            if let Some(rotations) = &part.allowed_rotations {
                validate_rotations(rotations, ConfigError::EmptyPartRotations { part_id: part.id })?;
            }
        }

        let mut rejected = vec![];
        let mut items = vec![];
        for (i, part) in parts.iter().enumerate() {
            match Item::new(part, i, &self.config.default_rotations) {
                Ok(item) => items.push(item),
                Err(reason) => {
                    warn!("[ENGINE] rejected part {}: {}", part.id, reason);
                    rejected.push(RejectedPart {
                        part_id: part.id,
                        reason,
                    });
                }
            }
        }

        let items = sorting::sort_items(items, self.config.sort_key);
        debug!(
            "[ENGINE] nesting {} parts with {:?} strategy, {:?} collisions, sorted by {:?}",
            items.len(),
            self.config.strategy,
            self.search.collision_mode(),
            self.config.sort_key
        );
        let mut ledger = OccupancyLedger::new(&self.sheet, self.config.strategy);
        let mut placed = vec![];
        let mut unplaced = vec![];
        let mut n_evaluations = 0;

        for item in items.iter() {
            let mut state = PartState::Pending;
            loop {
                trace!("[ENGINE] part {}: {:?}", item.part_id, state);
                state = match state {
                    PartState::Pending => PartState::TryingRotations,
                    PartState::TryingRotations => {
                        let outcome = self.search.search(item, &self.sheet, &ledger);
                        n_evaluations += outcome.n_evals();
                        match outcome {
                            SearchOutcome::Found { candidate, .. } => {
                                ledger.commit(&candidate);
                                PartState::Placed(PlacedPart::new(item, candidate))
                            }
                            SearchOutcome::Exhausted { n_evals } => {
                                debug!(
                                    "[ENGINE] no legal position for part {} ({} evaluations)",
                                    item.part_id,
                                    n_evals.separate_with_commas()
                                );
                                PartState::Unplaced
                            }
                            SearchOutcome::BudgetExceeded { n_evals } => {
                                warn!(
                                    "[ENGINE] iteration budget exhausted for part {} ({} evaluations)",
                                    item.part_id,
                                    n_evals.separate_with_commas()
                                );
                                PartState::Unplaced
                            }
                        }
                    }
                    PartState::Placed(placed_part) => {
                        info!(
                            "[ENGINE] placed part {} ({}/{}) at [{}]",
                            placed_part.part_id,
                            placed.len() + 1,
                            items.len(),
                            placed_part.d_transf
                        );
                        placed.push(placed_part);
                        break;
                    }
                    PartState::Unplaced => {
                        unplaced.push(item.part_id);
                        break;
                    }
                };
            }
        }

        let metrics = Metrics::compute(&self.sheet, &placed, &unplaced, rejected.len());
        info!(
            "[ENGINE] placed {}/{} parts ({} unplaced, {} rejected), utilization {:.3}%, {} evaluations",
            metrics.placed_count,
            metrics.total_count,
            unplaced.len(),
            rejected.len(),
            metrics.utilization * 100.0,
            n_evaluations.separate_with_commas()
        );

        let solution = NestingSolution {
            placed,
            unplaced,
            rejected,
            metrics,
            n_evaluations,
        };

        debug_assert!(assertions::layout_is_contained(&self.sheet, &solution.placed));
        debug_assert!(assertions::layout_has_no_overlap(&solution.placed));
        debug_assert!(assertions::outcomes_partition_input(parts.len(), &solution));

        Ok(solution)
    }
}

fn validate_config(sheet: &Sheet, config: &NestConfig) -> Result<(), ConfigError> {
    //sheets built through Sheet::new are valid, re-checked since the run depends on it
    Sheet::new(sheet.width(), sheet.height())?;
    if config.strategy == StrategyKind::Exhaustive
        && !(config.step_size.is_finite() && config.step_size > 0.0)
    {
        return Err(ConfigError::InvalidStepSize(config.step_size));
    }
    if config.max_iterations == 0 {
        return Err(ConfigError::ZeroIterationBudget);
    }
    validate_rotations(&config.default_rotations, ConfigError::EmptyDefaultRotations)
}

fn validate_rotations(rotations: &[f64], if_empty: ConfigError) -> Result<(), ConfigError> {
    if rotations.is_empty() {
        return Err(if_empty);
    }
    match rotations.iter().find(|r| !r.is_finite()) {
        Some(r) => Err(ConfigError::NonFiniteRotation(*r)),
        None => Ok(()),
    }
}
