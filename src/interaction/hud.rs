//! HUD anchoring over the hovered element.
//!
//! The HUD floats above the hovered element, cleared from its top face by
//! a fixed margin. Each primitive kind contributes its own geometric
//! attributes to the offset (`height`/`depth` for boxes, `radius` for
//! spheres, and so on). Missing or malformed attributes read as 0.0 so a
//! sparse markup still yields a usable anchor.

use crate::scene::{ElementId, ElementKind, Scene, SceneSurface, Vec3};

/// Vertical clearance between an element's top and the HUD panel.
pub const HUD_CLEARANCE: f64 = 0.5;

/// Numeric attribute of `id`, 0.0 when absent or unparseable.
#[must_use]
pub fn numeric_attr(scene: &Scene, id: ElementId, name: &str) -> f64 {
    SceneSurface::attr(scene, id, name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0.0)
}

/// World position the HUD should anchor to for `id`.
#[must_use]
pub fn anchor_position(scene: &Scene, id: ElementId) -> Vec3 {
    let position = scene.position(id);
    let height = numeric_attr(scene, id, "height");
    let depth = numeric_attr(scene, id, "depth");
    let radius = numeric_attr(scene, id, "radius");

    let offset = match scene.kind(id) {
        Some(ElementKind::Sphere) => Vec3::new(0.0, radius + HUD_CLEARANCE, -radius),
        Some(ElementKind::Cylinder | ElementKind::Cone) => {
            Vec3::new(0.0, height / 2.0 + HUD_CLEARANCE, -radius)
        }
        Some(ElementKind::Box | ElementKind::Plane | ElementKind::Text) => {
            Vec3::new(0.0, height / 2.0 + HUD_CLEARANCE, -depth / 2.0)
        }
        // Unknown id: float the HUD at clearance height over the origin.
        None => Vec3::new(0.0, HUD_CLEARANCE, 0.0),
    };

    Vec3::new(
        position.x + offset.x,
        position.y + offset.y,
        position.z + offset.z,
    )
}
