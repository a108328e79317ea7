use serde::{Deserialize, Serialize};

use crate::config::BLFConfig;
use crate::io::ext_repr::{ExtScenario, ExtSolution};

#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    #[serde(flatten)]
    pub scenario: ExtScenario,
    pub solution: ExtSolution,
    pub config: BLFConfig,
}
