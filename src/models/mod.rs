// src/models/mod.rs

pub mod statistics;
pub mod submission;
