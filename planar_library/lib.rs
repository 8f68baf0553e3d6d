//! # PLANAR Standard Library
//!
//! Frame transforms and angle arithmetic for planar robots.
//!
//! ## Structure
//!
//! ```text
//! planar_library/
//! ── messages/       # Point2D, Pose2D
//! ── tf/             # Transform2D and local <-> reference conversions
//! ── algorithms/     # Angle arithmetic
//! ── scenarios/      # Worked obstacle / target-sweep exercises
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use planar_library::{angular_difference, bearing, transform_to_reference, Point2D};
//!
//! let obstacle = transform_to_reference(Point2D::new(3.0, 0.0), 2.0, 1.0, 0.0).unwrap();
//! assert_eq!(obstacle, Point2D::new(5.0, 1.0));
//!
//! let to_goal = bearing(0.0, 0.0, 0.0, 5.0).unwrap();
//! let turn = angular_difference(to_goal, 0.0).unwrap();
//! assert!((turn - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

pub mod algorithms;
pub mod messages;
pub mod scenarios;
pub mod tf;

// Re-export the common surface at the crate root for convenience
pub use algorithms::angles::{angular_difference, bearing, normalize_angle};
pub use messages::*;
pub use scenarios::{ScenarioConfig, ScenarioReport};
pub use tf::{transform_to_local, transform_to_reference, Transform2D};
