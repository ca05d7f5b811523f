// src/lib.rs

//! Escape Genie Client Library

pub mod detail;
pub mod error;
pub mod map;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
pub mod view;
