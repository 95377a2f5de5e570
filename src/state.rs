// src/state.rs
// Read-only shared state: built once at startup, handed to the router
// behind an Arc. No runtime mutation.

use crate::llm::CompletionClient;
use crate::persona::PersonaRegistry;

pub struct AppState {
    pub registry: PersonaRegistry,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(registry: PersonaRegistry, completion: CompletionClient) -> Self {
        Self { registry, completion }
    }
}
