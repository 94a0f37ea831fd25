use std::time::Duration;

use crate::tree::NodeId;

/// Easing function for animated reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Configuration for a node's animated reveal/hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl RevealConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            easing: Easing::EaseInOut,
        }
    }
}

/// Direction of an animated visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Show,
    Hide,
}

/// A fire-and-forget animation request recorded by the tree.
///
/// Logical state flips immediately; a renderer drains these with
/// [`Tree::take_reveals`](crate::tree::Tree::take_reveals) and runs the visual
/// transition on its own schedule. Logical transitions never wait on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealRequest {
    pub node: NodeId,
    pub kind: RevealKind,
    pub config: RevealConfig,
}
