// src/io/mod.rs

pub mod input;
pub mod reporting;
