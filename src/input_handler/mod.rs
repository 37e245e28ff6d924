// Input handler module for pointer-driven window gestures
// Handles title-bar drags, edge/corner resizes, and the geometry they produce

pub mod types;
pub mod geometry;
pub mod gesture;

pub use gesture::{GestureMachine, GestureSession, GestureState};
pub use types::*;
