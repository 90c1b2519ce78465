use serde::{Deserialize, Serialize};

use optishape::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::FFDConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct FFDOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: FFDConfig,
    /// Wall-clock time from program start until the solution was exported, in milliseconds
    pub run_time_ms: u64,
}
