// src/lib.rs

pub mod models;
pub mod services;
pub mod utils;
