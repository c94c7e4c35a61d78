/// The inline style properties handlers mutate directly on a card.
///
/// Values are opaque CSS literals; the (external) styling layer is the
/// only consumer that interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    background_color: String,
    transform: String,
    box_shadow: String,
}

impl InlineStyle {
    pub const DEFAULT_BACKGROUND: &'static str = "white";
    pub const DEFAULT_TRANSFORM: &'static str = "scale(1)";
    pub const DEFAULT_BOX_SHADOW: &'static str = "0 4px 6px rgba(0, 0, 0, 0.1)";

    pub fn background_color(&self) -> &str { &self.background_color }

    pub fn transform(&self) -> &str { &self.transform }

    pub fn box_shadow(&self) -> &str { &self.box_shadow }

    pub fn set_background_color(&mut self, value: &str) { value.clone_into(&mut self.background_color); }

    pub fn set_transform(&mut self, value: &str) { value.clone_into(&mut self.transform); }

    pub fn set_box_shadow(&mut self, value: &str) { value.clone_into(&mut self.box_shadow); }

    /// Restores all three properties to their fixed defaults.
    pub fn reset(&mut self) { *self = Self::default(); }

    pub fn is_default(&self) -> bool { *self == Self::default() }
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self {
            background_color: Self::DEFAULT_BACKGROUND.to_owned(),
            transform: Self::DEFAULT_TRANSFORM.to_owned(),
            box_shadow: Self::DEFAULT_BOX_SHADOW.to_owned(),
        }
    }
}
