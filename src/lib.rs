// src/lib.rs — Library root for cupdash

pub mod api;
pub mod cli;
pub mod core;
pub mod data;
pub mod infra;
