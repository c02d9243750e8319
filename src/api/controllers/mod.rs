//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `donate` - Donate action discovery and transaction endpoints

pub mod donate;
