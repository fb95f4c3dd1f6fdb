//! UI layer for the remote control panel.

pub mod app;

pub use app::{RemotePanelApp, StartupConfig};
