//! Test helpers module
//!
//! This module provides fixture data and a ready-made service stack for
//! testing the CampusHub services.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
