//! Quiz domain
//!
//! Questions, game state, answer outcomes and option sampling.

pub mod answer;
pub mod question;
pub mod sampling;
pub mod state;
pub mod value_objects;
