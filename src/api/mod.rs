//! # API Module
//!
//! Contains the HTTP API of the donate action service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic coordination
//! * `middleware` - Response headers shared by every endpoint
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod middleware;

pub mod routes;
