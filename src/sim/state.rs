//! Simulation state: the world plus the two vehicles

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::vehicle::{Behavior, Vehicle};
use super::world::WorldConfig;

/// Complete simulation state (deterministic given the seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: WorldConfig,
    /// Fear first, then aggression
    pub vehicles: Vec<Vehicle>,
    /// Frames simulated so far
    pub frame: u64,
}

impl SimState {
    /// Default world, vehicles placed from a PCG stream seeded with `seed`
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = Self::with_rng(WorldConfig::default(), &mut rng);
        state.seed = seed;
        state
    }

    /// Spawn the standard pair using an arbitrary random source
    pub fn with_rng<R: Rng + ?Sized>(config: WorldConfig, rng: &mut R) -> Self {
        let vehicles = [Behavior::Fear, Behavior::Aggression]
            .into_iter()
            .map(|behavior| Vehicle::spawn(behavior, behavior.label(), &config, rng))
            .collect();
        Self::from_vehicles(config, vehicles)
    }

    /// Wrap hand-placed vehicles
    pub fn from_vehicles(config: WorldConfig, vehicles: Vec<Vehicle>) -> Self {
        Self {
            seed: 0,
            config,
            vehicles,
            frame: 0,
        }
    }

    pub fn vehicle(&self, behavior: Behavior) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.behavior == behavior)
    }
}
