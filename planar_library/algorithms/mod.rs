//! Pure computational algorithms for planar robotics
//!
//! No I/O and no state: every function here reads only its arguments.
//!
//! # Available Algorithms
//!
//! - **angles**: bearings, shortest signed angle differences, angle wrapping

pub mod angles;
