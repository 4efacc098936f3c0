//! Application layer containing business logic services.
//!
//! Services orchestrate domain operations: credential checks, session
//! lifecycle, and the weather fetch-all batch.

pub mod services;
