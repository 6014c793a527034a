//! Terminal front-end for both games and the training loop

pub mod commands;
pub mod config;
pub mod output;
