//! Well-known role name constants.
//!
//! The role travels in the `role` claim of tokens issued by the external
//! auth service.

pub const ROLE_ADMIN: &str = "admin";
