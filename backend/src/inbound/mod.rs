//! Inbound adapters that translate external requests into domain calls while
//! keeping framework details at the edge.
//!
//! The server-rendered HTTP surface lives under [`http`]; any future inbound
//! transport would sit alongside it.

pub mod http;
