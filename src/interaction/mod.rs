//! Hover and HUD interaction state.
//!
//! Modeled as small synchronous state holders: the host framework delivers
//! pointer events one at a time, handlers run to completion, and every
//! mutation is a direct attribute write. No locking, no suspension.

pub mod hud;
pub mod subchart;

use serde::{Deserialize, Serialize};

use crate::error::{InteractError, InteractResult};
use crate::scene::{ElementId, Vec3};

pub use subchart::{GROUP_SEPARATOR, SubchartTracker, group_of};

/// Tuning for the hover enlargement effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverConfig {
    /// Uniform scale applied to the hovered element.
    pub scale_factor: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { scale_factor: 1.1 }
    }
}

impl HoverConfig {
    pub fn validate(&self) -> InteractResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(InteractError::InvalidHoverScale(self.scale_factor));
        }
        Ok(())
    }
}

/// Tracks which element the pointer currently rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<ElementId>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<ElementId> {
        self.hovered
    }

    /// Records a pointer-enter and returns the element it displaced, if any.
    pub fn on_pointer_enter(&mut self, id: ElementId) -> Option<ElementId> {
        self.hovered.replace(id).filter(|&previous| previous != id)
    }

    /// Records a pointer-leave. Returns `true` when `id` was the hovered
    /// element; a leave for anything else changes nothing.
    pub fn on_pointer_leave(&mut self, id: ElementId) -> bool {
        if self.hovered == Some(id) {
            self.hovered = None;
            true
        } else {
            false
        }
    }
}

/// Heads-up display contents mirroring the scene's HUD entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HudState {
    pub visible: bool,
    pub text: String,
    pub position: Vec3,
}

impl HudState {
    pub fn show(&mut self, text: String, position: Vec3) {
        self.visible = true;
        self.text = text;
        self.position = position;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.text.clear();
    }
}
