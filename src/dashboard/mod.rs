//! Dashboard core: pure domain types and pipeline services.
//!
//! Nothing in this module performs I/O. The application layer feeds it an
//! [`domain::Inventory`] and control state and receives rows back.
pub mod domain;
pub mod services;
