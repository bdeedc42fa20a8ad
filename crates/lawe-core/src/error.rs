use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("energy cost must be finite and non-negative, got {0}")]
    InvalidEnergyCost(f32),

    #[error("weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },

    #[error("max energy must be finite and positive, got {0}")]
    InvalidMaxEnergy(f32),
}
