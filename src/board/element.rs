use super::inline_style::InlineStyle;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared, non-owning reference to an element on the board.
pub type ElementHandle = Arc<RwLock<Element>>;

/// A single addressable element: a card, a button or the spinner.
///
/// Class membership and inline style are the only state the styling
/// layer reads; text and the disabled flag belong to buttons.
#[derive(Debug)]
pub struct Element {
    id: String,
    parent: Option<String>,
    classes: HashSet<String>,
    text: String,
    disabled: bool,
    style: InlineStyle,
}

impl Element {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_owned(),
            parent: None,
            classes: HashSet::new(),
            text: text.to_owned(),
            disabled: false,
            style: InlineStyle::default(),
        }
    }

    /// Marks this element as nested under the container with `parent_id`.
    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent = Some(parent_id.to_owned());
        self
    }

    /// Adds an initial class, e.g. `hidden` on the error box.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_owned());
        self
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn parent(&self) -> Option<&str> { self.parent.as_deref() }

    pub fn has_class(&self, class: &str) -> bool { self.classes.contains(class) }

    pub fn add_class(&mut self, class: &str) { self.classes.insert(class.to_owned()); }

    pub fn remove_class(&mut self, class: &str) { self.classes.remove(class); }

    pub fn classes(&self) -> &HashSet<String> { &self.classes }

    pub fn text(&self) -> &str { &self.text }

    pub fn set_text(&mut self, text: &str) { text.clone_into(&mut self.text); }

    pub fn disabled(&self) -> bool { self.disabled }

    pub fn set_disabled(&mut self, disabled: bool) { self.disabled = disabled; }

    pub fn style(&self) -> &InlineStyle { &self.style }

    pub fn style_mut(&mut self) -> &mut InlineStyle { &mut self.style }

    pub fn into_handle(self) -> ElementHandle { Arc::new(RwLock::new(self)) }
}
