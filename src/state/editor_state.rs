//! Gesture state machine for one pointer interaction.
//!
//! ```text
//!            pointer-down              pointer-up
//!   ┌──────┐ ───────────► ┌────────────┐ ──────────► ┌──────┐
//!   │ Idle │              │ Committing │             │ Idle │
//!   └──────┘              └─────┬──────┘             └──────┘
//!                               │  ▲
//!                               └──┘ pointer-move (extend)
//! ```
//!
//! While `Idle` the tool preview follows the pointer. While `Committing`
//! the preview is hidden and drag samples go to the committed drawable.
use crate::drawable::DrawableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A drawable was committed on pointer-down and is receiving drag samples
    Committing { drawable: DrawableId },
}

impl GestureState {
    /// Returns true if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Returns true while a drawable is being committed
    pub fn is_committing(&self) -> bool {
        matches!(self, GestureState::Committing { .. })
    }

    /// The drawable receiving drag samples, if any
    pub fn active_drawable(&self) -> Option<DrawableId> {
        match self {
            GestureState::Committing { drawable } => Some(*drawable),
            GestureState::Idle => None,
        }
    }
}
