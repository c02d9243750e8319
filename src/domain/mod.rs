//! # Domain Module
//!
//! Core logic of the donate action, independent of the HTTP layer.
//!
//! ## Structure
//!
//! * `donate` - Action metadata, request resolution and transaction building

pub mod donate;
pub use donate::*;
