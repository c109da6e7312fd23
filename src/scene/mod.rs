//! Attribute-level scene store for declarative 3D chart markup.
//!
//! The interaction layer never touches meshes or materials; it flips the
//! same attributes the declarative markup exposes (visibility, a
//! hit-testable marker, uniform scale, position, plain string attributes).
//! [`Scene`] stores exactly that surface, and [`SceneSurface`] is the
//! capability trait the subchart tracker works against so it stays
//! independent of any concrete store.

pub mod element;
pub mod spec;

use tracing::trace;

use crate::error::{InteractError, InteractResult};

pub use element::{Element, ElementId, ElementKind, Vec3};
pub use spec::{ElementSpec, SceneSpec};

/// Attribute holding the metadata string shown on the HUD. Elements
/// carrying it are the interactive ones.
pub const INFO_ATTR: &str = "info";

/// Attribute identifying an element on trigger markup.
pub const ID_ATTR: &str = "id";

/// Discovery attribute naming which activation key reveals a subchart.
pub const PARAM_NAME_ATTR: &str = "param-name";

/// Attribute on trigger elements naming the subchart variant a click reveals.
pub const ACTIVATES_PARAM_ATTR: &str = "activates-param";

/// Mutation and discovery surface the subchart tracker depends on.
///
/// Mutations on unknown ids are silent no-ops; lookups on unknown ids
/// return empty results. Malformed markup degrades, it never panics.
pub trait SceneSurface {
    /// Ids of elements whose attribute `name` equals `value` exactly, in
    /// document order.
    fn elements_with_attr(&self, name: &str, value: &str) -> Vec<ElementId>;

    /// All transitive children of `id`, depth first.
    fn descendants(&self, id: ElementId) -> Vec<ElementId>;

    fn attr(&self, id: ElementId, name: &str) -> Option<&str>;

    fn set_visible(&mut self, id: ElementId, visible: bool);

    fn set_hit_testable(&mut self, id: ElementId, hit_testable: bool);
}

/// Arena of chart elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root element, visible and non-hit-testable.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(kind));
        id
    }

    /// Adds an element as a child of `parent`.
    pub fn add_child_element(
        &mut self,
        parent: ElementId,
        kind: ElementKind,
    ) -> InteractResult<ElementId> {
        if parent.0 >= self.elements.len() {
            return Err(InteractError::UnknownElement(parent.0));
        }

        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(kind));
        self.elements[parent.0].children.push(id);
        Ok(id)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    #[must_use]
    pub fn kind(&self, id: ElementId) -> Option<ElementKind> {
        self.element(id).map(Element::kind)
    }

    /// Visibility flag of `id`; unknown ids read as hidden.
    #[must_use]
    pub fn visible(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(Element::visible)
    }

    /// Hit-testable marker of `id`; unknown ids read as non-hit-testable.
    #[must_use]
    pub fn hit_testable(&self, id: ElementId) -> bool {
        self.element(id).is_some_and(Element::hit_testable)
    }

    /// Uniform scale of `id`; unknown ids read as 1.0.
    #[must_use]
    pub fn scale(&self, id: ElementId) -> f64 {
        self.element(id).map_or(1.0, Element::scale)
    }

    #[must_use]
    pub fn position(&self, id: ElementId) -> Vec3 {
        self.element(id).map_or_else(Vec3::default, Element::position)
    }

    pub fn set_scale(&mut self, id: ElementId, scale: f64) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.scale = scale;
        }
    }

    pub fn set_position(&mut self, id: ElementId, position: Vec3) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.position = position;
        }
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    fn collect_descendants(&self, id: ElementId, out: &mut Vec<ElementId>) {
        let Some(element) = self.element(id) else {
            return;
        };
        for &child in element.children() {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }
}

impl SceneSurface for Scene {
    fn elements_with_attr(&self, name: &str, value: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.attr(name) == Some(value))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attr(name))
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.visible = visible;
        } else {
            trace!(id = id.0, "set_visible on unknown element");
        }
    }

    fn set_hit_testable(&mut self, id: ElementId, hit_testable: bool) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.hit_testable = hit_testable;
        } else {
            trace!(id = id.0, "set_hit_testable on unknown element");
        }
    }
}
