//! Breed catalog domain
//!
//! The [`Breed`](entities::Breed) value object and its formatting rules.

pub mod entities;
