//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as request identification.

pub mod trace;

pub use trace::Trace;
