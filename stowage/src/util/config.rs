use serde::{Deserialize, Serialize};

use crate::placement::GridScan;

///Configuration of the packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackConfig {
    ///Distance between candidate positions in the placement scan, in millimeters
    pub step: u64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            step: GridScan::DEFAULT_STEP,
        }
    }
}

impl PackConfig {
    pub fn grid_scan(&self) -> GridScan {
        GridScan::new(self.step)
    }
}
