//! # ljmc Core Library
//!
//! Native energy kernels for a Lennard-Jones Monte Carlo teaching code.
//! The Python front end owns the simulation loop; this crate supplies the
//! numerics it hands off across the FFI boundary.
//!
//! ## Layout
//!
//! - **[`models`]: Data.** The [`models::coordinates::CoordinateSet`] table of
//!   particle positions, validated once at the conversion boundary and read-only
//!   thereafter.
//!
//! - **[`forcefield`]: Arithmetic.** Stateless energy routines: the
//!   single-particle kernel exported to Python, plus the reduced-unit
//!   Lennard-Jones helpers the host code builds on.
//!
//! The binding crate (`ljmc-python`) re-exports the single public callable;
//! nothing in this crate touches Python types.

pub mod forcefield;
pub mod models;
