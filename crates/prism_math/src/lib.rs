// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod ray;
pub use ray::{reflect, Ray};
