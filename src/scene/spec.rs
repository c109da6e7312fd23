//! Declarative scene specifications.
//!
//! Scenes can be assembled imperatively through [`Scene`] or loaded from a
//! JSON spec mirroring the markup the host framework consumes: a list of
//! elements, each with a primitive kind, an optional position, free-form
//! string attributes, and nested children.
//!
//! Loading applies two markup conventions:
//! - elements carrying an `info` attribute become hit-testable, and
//! - elements carrying a `param-name` attribute (subchart variants) start
//!   hidden with their interactive descendants non-hit-testable, until a
//!   toggle activation reveals them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InteractError, InteractResult};

use super::{ElementId, ElementKind, INFO_ATTR, PARAM_NAME_ATTR, Scene, SceneSurface, Vec3};

/// Top-level scene spec: the elements composing the scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneSpec {
    pub elements: Vec<ElementSpec>,
}

/// Spec of one element. Unrecognized fields land in `attributes` as plain
/// string attributes, matching the markup's open attribute surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub element: ElementKind,
    #[serde(default)]
    pub position: Option<Vec3>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
    #[serde(flatten)]
    pub attributes: IndexMap<String, String>,
}

impl Scene {
    /// Builds a scene from a parsed spec.
    #[must_use]
    pub fn from_spec(spec: &SceneSpec) -> Self {
        let mut scene = Self::new();
        for element_spec in &spec.elements {
            insert_spec_element(&mut scene, None, element_spec);
        }

        // Subchart variants wait for an activation before showing up.
        let subchart_roots: Vec<ElementId> = scene
            .element_ids()
            .filter(|&id| SceneSurface::attr(&scene, id, PARAM_NAME_ATTR).is_some())
            .collect();
        for id in subchart_roots {
            scene.set_visible(id, false);
            scene.set_hit_testable(id, false);
            for descendant in scene.descendants(id) {
                scene.set_hit_testable(descendant, false);
            }
        }

        debug!(elements = scene.len(), "scene built from spec");
        scene
    }

    /// Parses a JSON scene spec and builds the scene.
    pub fn from_spec_json(json: &str) -> InteractResult<Self> {
        let spec: SceneSpec =
            serde_json::from_str(json).map_err(|err| InteractError::InvalidSpec(err.to_string()))?;
        Ok(Self::from_spec(&spec))
    }
}

fn insert_spec_element(scene: &mut Scene, parent: Option<ElementId>, spec: &ElementSpec) {
    let id = match parent {
        // Parent ids come from this same pass, so attachment cannot fail;
        // fall back to a detached root if it ever does.
        Some(parent_id) => scene
            .add_child_element(parent_id, spec.element)
            .unwrap_or_else(|_| scene.add_element(spec.element)),
        None => scene.add_element(spec.element),
    };

    if let Some(position) = spec.position {
        scene.set_position(id, position);
    }
    for (name, value) in &spec.attributes {
        scene.set_attr(id, name, value);
    }
    if spec.attributes.contains_key(INFO_ATTR) {
        scene.set_hit_testable(id, true);
    }

    for child in &spec.children {
        insert_spec_element(scene, Some(id), child);
    }
}
