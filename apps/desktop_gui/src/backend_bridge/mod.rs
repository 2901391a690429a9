//! Backend bridge: command queue from the UI and the worker that runs the generator.

pub mod commands;
pub mod runtime;
