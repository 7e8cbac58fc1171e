//! Core building blocks: the fixed-capacity sequence backing every game
//! zone, and the deterministic RNG threaded through everything random.

pub mod bounded;
pub mod rng;

pub use bounded::BoundedVec;
pub use rng::GameRng;
