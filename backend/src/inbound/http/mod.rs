//! HTTP inbound adapter exposing the server-rendered pages.

pub mod contacts;
pub mod error;
pub mod flash;
pub mod health;
pub mod pages;
pub(crate) mod respond;
pub mod session_config;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
