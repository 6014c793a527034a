//! Trait boundaries between the engines and their callers.

pub mod strategy;

pub use strategy::MoveStrategy;
