pub mod chain;
pub mod constants;
pub mod particles;

pub use chain::*;
pub use particles::*;
