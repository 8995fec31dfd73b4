use serde::{Deserialize, Serialize};

use crate::config::BnBConfig;
use crate::opt::stats::SearchStats;
use twinsack::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BnBOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: BnBConfig,
    pub stats: SearchStats,
}
