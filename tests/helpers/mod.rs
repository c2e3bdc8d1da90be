//! Shared test helpers.

#![allow(dead_code)]

pub mod schema_fixtures;
pub mod structure_assertions;
