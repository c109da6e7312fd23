//! Subchart toggle tracking.
//!
//! Subchart variants are grouped by a shared key prefix: an activation key
//! of the form `<group>__<variant>` names one variant of a mutually
//! exclusive family. Clicking a trigger reveals the elements whose
//! `param-name` equals the full key and hides whatever was previously
//! active for that group. At most one variant per group is visible at any
//! time.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::scene::{ElementId, INFO_ATTR, PARAM_NAME_ATTR, SceneSurface};

/// Separator between the group prefix and the variant suffix of an
/// activation key.
pub const GROUP_SEPARATOR: &str = "__";

/// Group prefix of an activation key: everything before the first
/// separator, or the whole key when no separator is present (such a key
/// degrades to a one-variant group of its own).
#[must_use]
pub fn group_of(activation_key: &str) -> &str {
    activation_key
        .split_once(GROUP_SEPARATOR)
        .map_or(activation_key, |(group, _)| group)
}

/// Per-group registry of the currently visible subchart elements.
///
/// Created empty at scene load and mutated only by [`activate`]; the host
/// serializes event delivery, so no synchronization is involved.
///
/// [`activate`]: SubchartTracker::activate
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubchartTracker {
    active: IndexMap<String, Vec<ElementId>>,
}

impl SubchartTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps the visible variant of the key's group.
    ///
    /// Hides the previously active set (stripping the hit-testable marker
    /// from its interactive elements), reveals the elements whose
    /// `param-name` equals `activation_key`, and records them as the
    /// group's active set. A key matching nothing still hides the previous
    /// set and records an empty one; nothing here errors or panics.
    pub fn activate<S: SceneSurface>(&mut self, scene: &mut S, activation_key: &str) {
        let group = group_of(activation_key).to_owned();

        if let Some(previous) = self.active.get(&group) {
            apply_set_state(scene, previous, false);
        }

        let next = scene.elements_with_attr(PARAM_NAME_ATTR, activation_key);
        apply_set_state(scene, &next, true);

        if next.is_empty() {
            trace!(group = %group, key = activation_key, "activation matched no elements");
        }
        debug!(
            group = %group,
            key = activation_key,
            shown = next.len(),
            "subchart activated"
        );
        self.active.insert(group, next);
    }

    /// Currently active set for `group`, if the group was ever activated.
    #[must_use]
    pub fn active_set(&self, group: &str) -> Option<&[ElementId]> {
        self.active.get(group).map(Vec::as_slice)
    }

    /// Groups in first-activation order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.active.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_active(&self, group: &str, id: ElementId) -> bool {
        self.active
            .get(group)
            .is_some_and(|set| set.contains(&id))
    }
}

/// Shows or hides every element of a set, toggling the hit-testable marker
/// on the interactive elements among them and their descendants.
fn apply_set_state<S: SceneSurface>(scene: &mut S, set: &[ElementId], visible: bool) {
    for &id in set {
        scene.set_visible(id, visible);
        if scene.attr(id, INFO_ATTR).is_some() {
            scene.set_hit_testable(id, visible);
        }
        for descendant in scene.descendants(id) {
            if scene.attr(descendant, INFO_ATTR).is_some() {
                scene.set_hit_testable(descendant, visible);
            }
        }
    }
}
