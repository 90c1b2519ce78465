use std::time::Instant;

use anyhow::Result;
use log::info;
use thousands::Separable;

use optishape::engine::{NestingEngine, NestingSolution};
use optishape::entities::{Part, Sheet};
use optishape::io::ext_repr::ExtInstance;
use optishape::io::import;
use optishape::util::NestConfig;

/// First-Fit-Decreasing optimizer: every part is offered once, in sorted order, to the configured
/// placement search and kept wherever it first fits.
pub struct FFDOptimizer {
    pub sheet: Sheet,
    pub parts: Vec<Part>,
    pub engine: NestingEngine,
}

impl FFDOptimizer {
    pub fn new(ext_instance: &ExtInstance, config: &NestConfig) -> Result<Self> {
        let (sheet, parts) = import::import_instance(ext_instance)?;
        let engine = NestingEngine::new(sheet, config.clone())?;
        info!(
            "[FFD] instance \"{}\": {} parts on a {}x{} sheet, strategy: {:?}",
            ext_instance.name,
            parts.len(),
            sheet.width(),
            sheet.height(),
            config.strategy
        );
        Ok(Self {
            sheet,
            parts,
            engine,
        })
    }

    pub fn solve(&self) -> Result<NestingSolution> {
        let start = Instant::now();
        let solution = self.engine.nest(&self.parts)?;
        info!(
            "[FFD] finished in {}ms, placed {}/{} parts, utilization: {:.3}%, {} evaluations",
            start.elapsed().as_millis().separate_with_commas(),
            solution.metrics.placed_count,
            solution.metrics.total_count,
            solution.metrics.utilization * 100.0,
            solution.n_evaluations.separate_with_commas()
        );
        Ok(solution)
    }
}
