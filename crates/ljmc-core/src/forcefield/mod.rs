//! # Force Field Module
//!
//! Stateless energy arithmetic for the Lennard-Jones Monte Carlo code.
//!
//! ## Key Components
//!
//! - [`energy`] - The single-particle energy kernel exported to the host
//!   scripting environment.
//! - [`potentials`] - Reduced-unit Lennard-Jones helpers: the 12-6 pair
//!   potential evaluated from a squared distance, and the long-range tail
//!   correction for a truncated potential.
//!
//! All functions here are pure: no state, no side effects, no allocation.

pub mod energy;
pub mod potentials;
