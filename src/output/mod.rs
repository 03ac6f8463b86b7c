// src/output/mod.rs

pub mod header;
pub mod writer; // Manages the output destination
