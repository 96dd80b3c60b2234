//! Per-station service-time distributions.

use pf_core::variates::{normal, triangular_around};
use pf_core::{ClinicConfig, Minutes, SimRng, StationId};

/// Coefficient of variation for normally distributed service times.
const NORMAL_CV: f64 = 0.25;

/// How long one service takes at a station.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceModel {
    /// Triangular on `(0.5·mean, mean, 1.5·mean)`.
    Triangular { mean: Minutes },
    /// Normal with the given standard deviation.
    Normal { mean: Minutes, std_dev: Minutes },
}

impl ServiceModel {
    /// The model used at `station` under `config`.
    ///
    /// Kiosks are machine-paced and get a symmetric normal; every staffed
    /// station gets a triangle.
    pub fn for_station(station: StationId, config: &ClinicConfig) -> Self {
        let mean = config.mean_service_time(station);
        match station {
            StationId::Kiosk => ServiceModel::Normal { mean, std_dev: mean * NORMAL_CV },
            StationId::Reception
            | StationId::StandardDoctor
            | StationId::Triage
            | StationId::AiDoctor => ServiceModel::Triangular { mean },
        }
    }

    pub fn mean(&self) -> Minutes {
        match *self {
            ServiceModel::Triangular { mean } | ServiceModel::Normal { mean, .. } => mean,
        }
    }

    /// Draw one service duration; always at least the service-time floor.
    pub fn sample(&self, rng: &mut SimRng) -> Minutes {
        match *self {
            ServiceModel::Triangular { mean }        => triangular_around(rng, mean),
            ServiceModel::Normal { mean, std_dev }   => normal(rng, mean, std_dev),
        }
    }
}
