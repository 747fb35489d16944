//! # Bodega Support
//!
//! Shared utilities for the bodega service container.
//!
//! This crate provides:
//! - Identifier canonicalization (PascalCase ⇄ snake_case)
//! - Text helpers for human-friendly error messages

pub mod ident;
pub mod suggest;
