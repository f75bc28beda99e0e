//! Icondex Library
//!
//! This library validates and normalizes the STIR and BEIR icon catalogs:
//! schema checks on the catalog documents, existence and geometry checks on
//! the referenced icon files, and in-place repair of icon geometry.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod doctor;
pub mod imaging;
pub mod models;
pub mod validator;
