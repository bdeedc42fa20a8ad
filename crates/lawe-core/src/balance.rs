use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::weights::BalancePolicy;

pub const DEFAULT_LAMBDA: f32 = 0.1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalanceSample {
    pub delta_e: f32,
    pub coherence: f32,
    pub recoverability: f32,
    pub tenderness: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub e_score: f32,
    pub energy_contribution: f32,
    pub coherence: f32,
    pub recoverability: f32,
    pub tenderness: f32,
    pub classification: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct EnergyBalanceScorer {
    policy: BalancePolicy,
}

impl EnergyBalanceScorer {
    pub fn new(policy: BalancePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BalancePolicy {
        &self.policy
    }

    pub fn score(&self, sample: &BalanceSample) -> Result<BalanceReport, ScoreError> {
        self.policy.validate()?;
        if !sample.delta_e.is_finite() || sample.delta_e < 0.0 {
            return Err(ScoreError::InvalidEnergyCost(sample.delta_e));
        }

        let w = &self.policy.weights;

        // Lower energy is better: clamp to the ceiling, then invert.
        let energy_norm = (sample.delta_e / self.policy.max_energy).min(1.0);
        let energy_contribution = -energy_norm;

        let raw = w.energy * energy_contribution
            + w.coherence * sample.coherence
            + w.recoverability * sample.recoverability
            + w.tenderness * sample.tenderness;

        // Rescale so the theoretical minimum (-w.energy) lands on 0. With
        // non-default weights the upper end is not guaranteed to reach 1.
        let e_score = (raw + w.energy) / (1.0 + w.energy);

        Ok(BalanceReport {
            e_score,
            energy_contribution,
            coherence: sample.coherence,
            recoverability: sample.recoverability,
            tenderness: sample.tenderness,
            classification: classify_balance(e_score),
        })
    }

    pub fn penalty(&self, sample: &BalanceSample, lambda: f32) -> Result<f32, ScoreError> {
        let report = self.score(sample)?;
        Ok((1.0 - report.e_score) * lambda)
    }
}

pub fn classify_balance(score: f32) -> &'static str {
    if score >= 0.8 {
        "Optimal"
    } else if score >= 0.6 {
        "Good"
    } else if score >= 0.4 {
        "Fair"
    } else if score >= 0.2 {
        "Poor"
    } else {
        "Critical"
    }
}
