// src/utils/mod.rs

pub mod csv;
