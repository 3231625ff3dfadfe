//! Quebec skilled-worker (PSTQ) points calculator.
//!
//! Decode a raw application with [`scoring::decode`], then score it with
//! [`scoring::calculate_points`].

pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod scoring;
