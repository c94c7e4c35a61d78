use super::handler::ClickHandler;
use crate::board::ElementHandle;
use crate::event;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Drives the imposter-syndrome card: Default → Validated → Default.
///
/// The only handler that writes inline style directly instead of
/// toggling classes. While the validated look is held the button stays
/// disabled, which is the sole re-entrancy guard on this card.
pub struct ReliefHandler {
    card: ElementHandle,
    button: ElementHandle,
    button_id: String,
}

impl ReliefHandler {
    pub const CARD_ID: &'static str = "imposter-syndrome";
    /// The button carries a class, not an id, and is resolved through
    /// its parent card like a `#imposter-syndrome .relief-button` selector.
    pub const BUTTON_CLASS: &'static str = "relief-button";
    pub const VALIDATED_BACKGROUND: &'static str = "#e8f8f5";
    pub const VALIDATED_TRANSFORM: &'static str = "scale(1.02)";
    pub const VALIDATED_BOX_SHADOW: &'static str = "0 0 15px rgba(46, 204, 113, 0.5)";
    pub const VALIDATED_TEXT: &'static str = "Progress Validated! You got this. 👍";
    pub const IDLE_TEXT: &'static str = "Validate Progress";
    /// How long the validated look is held before reverting.
    const VALIDATED_HOLD: Duration = Duration::from_millis(5000);

    pub fn new(card: ElementHandle, button: ElementHandle, button_id: String) -> Self {
        Self { card, button, button_id }
    }
}

#[async_trait]
impl ClickHandler for ReliefHandler {
    fn button_id(&self) -> &str { &self.button_id }

    async fn on_click(&self) {
        {
            let mut button = self.button.write().await;
            if button.disabled() {
                event!("Relief click ignored, validation still pending");
                return;
            }
            button.set_text(Self::VALIDATED_TEXT);
            button.set_disabled(true);
        }
        {
            let mut card = self.card.write().await;
            let style = card.style_mut();
            style.set_background_color(Self::VALIDATED_BACKGROUND);
            style.set_transform(Self::VALIDATED_TRANSFORM);
            style.set_box_shadow(Self::VALIDATED_BOX_SHADOW);
        }

        let card = Arc::clone(&self.card);
        let button = Arc::clone(&self.button);
        tokio::spawn(async move {
            tokio::time::sleep(Self::VALIDATED_HOLD).await;
            card.write().await.style_mut().reset();
            let mut button = button.write().await;
            button.set_text(Self::IDLE_TEXT);
            button.set_disabled(false);
            event!("Imposter syndrome card back to default");
        });
    }
}
