use async_trait::async_trait;
use std::collections::HashMap;

/// A click listener bound to a single button id.
///
/// Handler bodies run to completion on the dispatch loop; anything
/// deferred (timed reverts) is spawned, never awaited inside the body.
#[async_trait]
pub trait ClickHandler: Send + Sync {
    /// Id of the button this handler listens on.
    fn button_id(&self) -> &str;

    async fn on_click(&self);
}

/// Maps button ids to their registered handlers.
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn ClickHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self { Self { handlers: HashMap::new() } }

    /// Registers a handler under its own button id. A second handler on
    /// the same id replaces the first.
    pub fn register(&mut self, handler: Box<dyn ClickHandler>) {
        let id = handler.button_id().to_owned();
        self.handlers.insert(id, handler);
    }

    pub fn is_registered(&self, button_id: &str) -> bool { self.handlers.contains_key(button_id) }

    pub fn len(&self) -> usize { self.handlers.len() }

    pub fn is_empty(&self) -> bool { self.handlers.is_empty() }

    /// Runs the handler for `button_id` to completion.
    ///
    /// Returns `false` when no handler is registered on that id.
    pub async fn dispatch(&self, button_id: &str) -> bool {
        match self.handlers.get(button_id) {
            Some(handler) => {
                handler.on_click().await;
                true
            }
            None => false,
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self { Self::new() }
}
