//! Random card selection and the drill session built on it

/// Injectable random sources
pub mod random;
/// Uniform random selection excluding the current card
pub mod selector;
/// Drill session state machine
pub mod session;

pub use random::{FixedRatio, RandomSource, RngSource};
pub use selector::{Selector, pick};
pub use session::{Session, SessionState};
