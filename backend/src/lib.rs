//! Contact book library modules.
//!
//! The crate follows a hexagonal layout: pure domain logic under [`domain`],
//! the HTTP surface under [`inbound`], and file persistence under
//! [`outbound`]. The binary wires these together.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
