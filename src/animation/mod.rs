pub mod easing;
pub mod zoom;

// Re-export commonly used types for convenience
pub use easing::EasingType;
pub use zoom::{ZoomTransition, ZoomTransitionState};
