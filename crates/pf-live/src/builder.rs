//! Fluent builder for constructing a [`LiveEngine`].

use log::debug;

use pf_core::{ClinicConfig, SimRng};

use crate::{Layout, LiveEngine, LiveResult};

/// Fluent builder for [`LiveEngine`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                       |
/// |---------------|-------------------------------|
/// | `.rng(r)`     | `SimRng::from_entropy()`      |
/// | `.layout(l)`  | `Layout::default_floor()`     |
pub struct LiveEngineBuilder {
    config: ClinicConfig,
    rng:    Option<SimRng>,
    layout: Option<Layout>,
}

impl LiveEngineBuilder {
    pub fn new(config: ClinicConfig) -> Self {
        Self { config, rng: None, layout: None }
    }

    /// Inject the random source.  Pass a seeded `SimRng` for reproducible
    /// runs.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Validate the configuration, build every station and draw the first
    /// arrival instant.
    ///
    /// # Errors
    ///
    /// [`LiveError::Config`][crate::LiveError::Config] if the configuration
    /// is rejected by [`ClinicConfig::validate`].
    pub fn build(self) -> LiveResult<LiveEngine> {
        self.config.validate()?;
        let rng = self.rng.unwrap_or_else(SimRng::from_entropy);
        let layout = self.layout.unwrap_or_else(Layout::default_floor);
        debug!(
            "live engine: {} min horizon, mean gap {} min, adoption {}",
            self.config.duration_minutes,
            self.config.avg_arrival_interval,
            self.config.digital_adoption_rate,
        );
        Ok(LiveEngine::from_parts(self.config, layout, rng))
    }
}
