//! Lokanta domain core.
//!
//! Pure domain logic for the restaurant site: localized text resolution,
//! menu grouping, the scroll-synchronized category selector, business hours
//! and reviews. Nothing in here performs I/O; data arrives through the
//! [`source`] traits and layout through the [`scroll_spy`] and
//! [`chip_strip`] capability traits.

pub mod business;
pub mod chip_strip;
pub mod error;
pub mod layout;
pub mod locale;
pub mod media;
pub mod menu;
pub mod review;
pub mod roles;
pub mod scroll_spy;
pub mod source;
pub mod types;
