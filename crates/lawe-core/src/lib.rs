pub mod balance;
pub mod error;
pub mod weights;

pub use balance::*;
pub use error::*;
pub use weights::*;
