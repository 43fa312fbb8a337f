use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::animation::driver::{DriverSpec, ProgressDriver};
use crate::error::WidgetResult;

/// Named animation drivers owned by one widget instance.
///
/// The controller binds driver lifetime to widget lifetime: drivers start
/// when the widget mounts and `stop_all` runs on unmount, so no stale frame
/// callback can advance a destroyed widget's state. Drivers share the owning
/// widget's frame clock but advance independently; the only ordering
/// guarantee is each driver's own monotonic progress.
#[derive(Debug, Default)]
pub struct AnimationController {
    drivers: IndexMap<String, ProgressDriver>,
}

impl AnimationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a named driver. Restarting an existing name replaces it.
    pub fn start_driver(&mut self, name: impl Into<String>, spec: DriverSpec) -> WidgetResult<()> {
        let name = name.into();
        let driver = ProgressDriver::new(spec)?;
        if self.drivers.insert(name.clone(), driver).is_some() {
            debug!(driver = %name, "restarted animation driver");
        }
        Ok(())
    }

    /// Samples one driver; `None` when no driver has that name.
    pub fn sample(&mut self, name: &str, elapsed_ms: f64) -> Option<f64> {
        match self.drivers.get_mut(name) {
            Some(driver) => Some(driver.sample(elapsed_ms)),
            None => {
                warn!(driver = %name, "sampled unknown animation driver");
                None
            }
        }
    }

    /// Samples every driver in insertion order.
    pub fn sample_all(&mut self, elapsed_ms: f64) -> Vec<(String, f64)> {
        self.drivers
            .iter_mut()
            .map(|(name, driver)| (name.clone(), driver.sample(elapsed_ms)))
            .collect()
    }

    #[must_use]
    pub fn driver(&self, name: &str) -> Option<&ProgressDriver> {
        self.drivers.get(name)
    }

    /// Stops one driver, freezing its value. Returns whether it existed.
    pub fn stop(&mut self, name: &str) -> bool {
        match self.drivers.get_mut(name) {
            Some(driver) => {
                driver.stop();
                true
            }
            None => false,
        }
    }

    /// Unmount hook: freezes every driver owned by this widget.
    pub fn stop_all(&mut self) {
        for driver in self.drivers.values_mut() {
            driver.stop();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
