//! # PLANAR Core
//!
//! Foundation shared by the PLANAR crates:
//!
//! - [`error`]: the error taxonomy and `PlanarResult` alias
//! - [`validate`]: finiteness checks applied at every math boundary
//! - [`config`]: TOML config loading with post-parse validation

pub mod config;
pub mod error;
pub mod validate;

pub use config::{from_toml_str, load_toml, Validate};
pub use error::{PlanarError, PlanarResult};
pub use validate::{ensure_all_finite, ensure_finite, ensure_finite_result};
