//! Logokit - logo normalization for radio station artwork.
//!
//! Wraps the `logo-normalize` pixel pipeline with file discovery, decoding,
//! WebP/PNG encoding, batch manifests and output validation.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
