//! Stateless helpers for web backends.
//!
//! The core is [`geo`]: haversine distance, square search ranges and
//! GCJ-02/BD-09 conversion. Around it sit small utilities that backends keep
//! rewriting: fixed-point decimals, random tokens, string masking, request
//! parameter checks, record trees, date differences, directory helpers, a
//! basic HTTP client and user-agent detection.
//!
//! ```
//! use backend_helpers::geo::{self, DistanceUnit};
//!
//! let km = geo::distance(116.397128, 39.916527, 121.473701, 31.230416, DistanceUnit::Kilometers);
//! assert_eq!(km, 1070.125);
//! ```

pub mod client;
pub mod config;
pub mod datetime;
pub mod decimal;
pub mod error;
pub mod fs;
pub mod geo;
pub mod helper;
pub mod http;
pub mod params;
pub mod random;
pub mod text;
pub mod tree;

pub use config::HelperSettings;
pub use error::{HelperError, Result};
pub use geo::{BoundingBox, CoordSystem, DistanceUnit};
pub use helper::Helper;
