//! Core module - Contains the fundamental data structures and parsing
//!
//! This module provides:
//! - Error kinds shared by every stage
//! - Row, metadata and count entry types
//! - Line splitting and header resolution
//! - CSV file loading
//! - Rendering of rankings to text, json and jsonl

pub mod error;
pub mod header;
pub mod loader;
pub mod model;
pub mod render;
pub mod split;
