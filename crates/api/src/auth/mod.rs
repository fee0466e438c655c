//! Authentication primitives.
//!
//! - [`jwt`] -- verification of access tokens issued by the external auth
//!   service. This server never issues tokens.

pub mod jwt;
