use super::element::{Element, ElementHandle};
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::Arc;

/// The board owns every element and hands out shared handles.
///
/// Lookups are weak: a missing id yields `None` and class toggles on a
/// missing id degrade to a silent no-op, so a partially wired board
/// loses individual cards, never the whole process.
pub struct Board {
    elements: HashMap<String, ElementHandle>,
}

impl Board {
    pub fn new() -> Self { Self { elements: HashMap::new() } }

    pub fn insert(&mut self, element: Element) {
        let id = element.id().to_owned();
        self.elements.insert(id, element.into_handle());
    }

    pub fn lookup(&self, id: &str) -> Option<ElementHandle> {
        self.elements.get(id).map(Arc::clone)
    }

    /// Finds the first element nested under `parent_id` that carries
    /// `class` — the analog of a `#container .class` selector.
    pub async fn lookup_within(&self, parent_id: &str, class: &str) -> Option<ElementHandle> {
        for handle in self.elements.values() {
            let element = handle.read().await;
            if element.parent() == Some(parent_id) && element.has_class(class) {
                return Some(Arc::clone(handle));
            }
        }
        None
    }

    /// Adds (`should_add`) or removes the class on the element with `id`.
    pub async fn set_class(&self, id: &str, class: &str, should_add: bool) {
        if let Some(handle) = self.lookup(id) {
            let mut element = handle.write().await;
            if should_add {
                element.add_class(class);
            } else {
                element.remove_class(class);
            }
        }
    }

    pub async fn has_class(&self, id: &str, class: &str) -> bool {
        match self.lookup(id) {
            Some(handle) => handle.read().await.has_class(class),
            None => false,
        }
    }

    pub fn len(&self) -> usize { self.elements.len() }

    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// One line per element, sorted by id, for the `state` console command.
    pub async fn snapshot(&self) -> String {
        let mut lines = Vec::with_capacity(self.elements.len());
        for handle in self.elements.values() {
            let element = handle.read().await;
            let classes = element.classes().iter().sorted().join(" ");
            lines.push(format!(
                "{}: classes=[{classes}] text={:?} disabled={} background={}",
                element.id(),
                element.text(),
                element.disabled(),
                element.style().background_color(),
            ));
        }
        lines.into_iter().sorted().join("\n")
    }
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}
