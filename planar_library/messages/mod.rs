//! Message types for PLANAR
//!
//! Plain value types passed between the transform and angle routines and
//! written into scenario reports. All of them serialize with serde.

pub mod geometry;

pub use geometry::{Point2D, Pose2D};
