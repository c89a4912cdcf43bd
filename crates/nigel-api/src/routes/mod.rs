//! # API Route Modules
//!
//! - `nigel_number` — the Nigel Number computation endpoint.

pub mod nigel_number;
