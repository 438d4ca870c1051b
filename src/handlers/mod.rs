// src/handlers/mod.rs

pub mod report;
pub mod submission;
