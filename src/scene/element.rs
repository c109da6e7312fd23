use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque handle to an element inside a [`Scene`](super::Scene) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Markup primitive an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Plane,
    Text,
}

/// Position or offset in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// One visual node of the chart scene.
///
/// Only the attribute surface the interaction layer mutates is modeled:
/// visibility, hit-testability, uniform scale, position, and the string
/// attribute map the declarative markup carries. Geometry and materials
/// stay with the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(super) kind: ElementKind,
    pub(super) attributes: IndexMap<String, String>,
    pub(super) children: SmallVec<[ElementId; 4]>,
    pub(super) visible: bool,
    pub(super) hit_testable: bool,
    pub(super) scale: f64,
    pub(super) position: Vec3,
}

impl Element {
    pub(super) fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            children: SmallVec::new(),
            visible: true,
            hit_testable: false,
            scale: 1.0,
            position: Vec3::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn hit_testable(&self) -> bool {
        self.hit_testable
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}
