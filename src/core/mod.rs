//! Core domain types

pub mod models;
