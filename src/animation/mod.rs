//! Tween-based animation: transforms, tweens, the frame-driven scheduler
//! and scripted choreographies built on top of it.

pub mod choreography;
pub mod scheduler;
pub mod transform;
pub mod tween;

pub use scheduler::TweenScheduler;
pub use transform::{Transform, TransformTarget};
pub use tween::{ScheduledTween, Tween};
