//! Controller layer: UI actions, reducer-style state transitions, and the
//! side effects they request.

pub mod actions;
pub mod reducer;
