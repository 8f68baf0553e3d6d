//! # PLANAR - 2D frames and angles for robots
//!
//! Convert sensor detections into world coordinates and work out which way to
//! turn, without off-by-2π surprises at the ±π seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use planar::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let robot = Pose2D::new(2.0, 2.0, 60f64.to_radians());
//!
//!     // Obstacle 3m straight ahead of the sensor
//!     let obstacle = robot.to_reference(Point2D::new(3.0, 0.0))?;
//!     assert!((obstacle.x - 3.5).abs() < 1e-9);
//!
//!     // How far to turn to face a waypoint
//!     let turn = robot.heading_error_to(Point2D::new(2.0, 6.0))?;
//!     assert!(turn > 0.0); // waypoint is to the left
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! All math entry points validate their inputs and return
//! [`PlanarError::NonFinite`](planar_core::PlanarError::NonFinite) for NaN or
//! infinite arguments instead of letting them propagate.

// Re-export core components
pub use planar_core::{self, *};

// Re-export standard library with alias
pub use planar_library as library;

/// The PLANAR prelude - everything you need to get started
pub mod prelude {
    // Value types
    pub use planar_library::messages::{Point2D, Pose2D};
    pub use planar_library::tf::Transform2D;

    // Operations
    pub use planar_library::algorithms::angles::{angular_difference, bearing, normalize_angle};
    pub use planar_library::tf::{transform_to_local, transform_to_reference};

    // Scenarios
    pub use planar_library::scenarios::{ScenarioConfig, ScenarioReport};

    // Error types
    pub use planar_core::error::{PlanarError, PlanarResult};
    pub type Result<T> = PlanarResult<T>;
}
