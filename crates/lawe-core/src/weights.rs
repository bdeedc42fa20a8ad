use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

pub const DEFAULT_MAX_ENERGY: f32 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyWeights {
    pub energy: f32,
    pub coherence: f32,
    pub recoverability: f32,
    pub tenderness: f32,
}

impl Default for EnergyWeights {
    fn default() -> Self {
        Self {
            energy: 0.25,
            coherence: 0.25,
            recoverability: 0.25,
            tenderness: 0.25,
        }
    }
}

impl EnergyWeights {
    pub fn validate(&self) -> Result<(), ScoreError> {
        for (name, value) in [
            ("energy", self.energy),
            ("coherence", self.coherence),
            ("recoverability", self.recoverability),
            ("tenderness", self.tenderness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalancePolicy {
    pub weights: EnergyWeights,
    pub max_energy: f32,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self {
            weights: EnergyWeights::default(),
            max_energy: DEFAULT_MAX_ENERGY,
        }
    }
}

impl BalancePolicy {
    pub fn validate(&self) -> Result<(), ScoreError> {
        self.weights.validate()?;
        if !self.max_energy.is_finite() || self.max_energy <= 0.0 {
            return Err(ScoreError::InvalidMaxEnergy(self.max_energy));
        }
        Ok(())
    }
}
