//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern: adapters are thin
//! translators between domain types and infrastructure-specific
//! representations, containing no business logic.
//!
//! - **persistence**: the JSON-file collection store backing
//!   [`ContactStorage`](crate::domain::ports::ContactStorage).

pub mod persistence;
