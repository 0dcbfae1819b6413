// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod api;
pub mod cart;
pub mod gui;
pub mod pipeline;
pub mod progress;
pub mod record;
pub mod render;
pub mod store;
