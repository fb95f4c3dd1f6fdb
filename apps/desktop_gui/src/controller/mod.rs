//! Controller layer: UI events, panel state transitions, and command orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
