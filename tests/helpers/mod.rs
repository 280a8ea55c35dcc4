//! Test helpers module
//!
//! Mock school backend and canned payloads shared by the integration tests.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

pub use api_mock::*;
pub use test_data::*;
