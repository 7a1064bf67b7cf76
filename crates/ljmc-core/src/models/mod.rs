//! # Models Module
//!
//! Data structures shared by the energy kernels. The only model this extension
//! needs is the coordinate table itself: particles are anonymous points, so
//! there are no atom, residue, or topology types here.

pub mod coordinates;
