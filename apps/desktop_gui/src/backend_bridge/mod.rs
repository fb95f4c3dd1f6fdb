//! Backend side of the panel: command types and the worker that owns the dispatcher.

pub mod commands;
pub mod runtime;
