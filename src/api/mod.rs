//! Engine facade: owns the scene and all interaction state, and exposes
//! the synchronous event entry points the host framework calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::InteractResult;
use crate::interaction::{HoverConfig, HoverState, HudState, SubchartTracker, hud};
use crate::scene::{ACTIVATES_PARAM_ATTR, ElementId, ID_ATTR, INFO_ATTR, Scene, SceneSurface};

pub use crate::scene::{PARAM_NAME_ATTR, SceneSpec};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneEngineConfig {
    pub hover: HoverConfig,
}

impl SceneEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hover(mut self, hover: HoverConfig) -> Self {
        self.hover = hover;
        self
    }
}

/// Pointer event as delivered by the host framework's raycaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter(ElementId),
    Leave(ElementId),
    Click(ElementId),
}

/// Interaction engine over one chart scene.
///
/// Handlers run to completion per event (the host serializes delivery) and
/// mutate scene attributes directly. Events referring to unknown elements
/// or carrying malformed attributes degrade to no-ops; nothing in the
/// event path returns an error.
#[derive(Debug)]
pub struct SceneEngine {
    scene: Scene,
    hover_config: HoverConfig,
    hover: HoverState,
    hud: HudState,
    subcharts: SubchartTracker,
}

impl SceneEngine {
    pub fn new(scene: Scene, config: SceneEngineConfig) -> InteractResult<Self> {
        config.hover.validate()?;

        Ok(Self {
            scene,
            hover_config: config.hover,
            hover: HoverState::default(),
            hud: HudState::default(),
            subcharts: SubchartTracker::new(),
        })
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ElementId> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn subcharts(&self) -> &SubchartTracker {
        &self.subcharts
    }

    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(id) => self.pointer_enter(id),
            PointerEvent::Leave(id) => self.pointer_leave(id),
            PointerEvent::Click(id) => self.click(id),
        }
    }

    /// Pointer entered an element: enlarge it and show its metadata on the
    /// HUD (`info` attribute, falling back to `id`, then to empty text).
    pub fn pointer_enter(&mut self, id: ElementId) {
        if self.scene.element(id).is_none() {
            trace!(id = id.index(), "pointer enter on unknown element");
            return;
        }

        if let Some(displaced) = self.hover.on_pointer_enter(id) {
            self.scene.set_scale(displaced, 1.0);
        }
        self.scene.set_scale(id, self.hover_config.scale_factor);

        let text = SceneSurface::attr(&self.scene, id, INFO_ATTR)
            .or_else(|| SceneSurface::attr(&self.scene, id, ID_ATTR))
            .unwrap_or_default()
            .to_owned();
        let position = hud::anchor_position(&self.scene, id);
        debug!(id = id.index(), text = %text, "hover enter");
        self.hud.show(text, position);
    }

    /// Pointer left an element: restore its scale and hide the HUD.
    pub fn pointer_leave(&mut self, id: ElementId) {
        if self.scene.element(id).is_none() {
            trace!(id = id.index(), "pointer leave on unknown element");
            return;
        }

        self.scene.set_scale(id, 1.0);
        self.hover.on_pointer_leave(id);
        self.hud.hide();
        debug!(id = id.index(), "hover leave");
    }

    /// Click on an element: when it carries `activates-param`, toggle the
    /// named subchart variant. Anything else is a no-op.
    pub fn click(&mut self, id: ElementId) {
        let Some(key) = SceneSurface::attr(&self.scene, id, ACTIVATES_PARAM_ATTR)
            .map(str::to_owned)
        else {
            trace!(id = id.index(), "click without activation key");
            return;
        };

        self.subcharts.activate(&mut self.scene, &key);
    }

    #[must_use]
    pub fn into_scene(self) -> Scene {
        self.scene
    }
}
