//! Monitor Configuration

use std::time::Duration;

use onscreen_engine::RangeSpec;

use crate::scheduler::Throttle;

/// Process-wide monitoring defaults
///
/// Applied field by field when a registration's options leave something
/// unset.
#[derive(Debug, Clone)]
pub struct Config {
    /// Re-measure geometry and dynamic range values on every tick
    pub live: bool,

    /// Evaluate left/right boundaries in addition to top/bottom
    pub horizontal: bool,

    /// Ranges applied when a registration provides none
    pub ranges: RangeSpec,

    /// Force re-measurement on viewport resize ticks
    pub recalc_on_resize: bool,

    /// Minimum interval between evaluation ticks
    pub tick_throttle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            live: false,
            horizontal: false,
            ranges: RangeSpec::Radius(50.0),
            recalc_on_resize: true,
            tick_throttle: Duration::from_millis(50),
        }
    }
}

impl Config {
    /// A throttle gate matching `tick_throttle`
    pub fn throttle(&self) -> Throttle {
        Throttle::new(self.tick_throttle)
    }
}
