//! GeoQuest LLM - Text-generation assistant port and adapters
//!
//! The assistant turns a conversational request into catalog keywords and
//! writes a short summary of the datasets found. Nothing in the search
//! pipeline depends on it being reachable.

pub mod ollama;
pub mod ports;
pub mod prompts;
pub mod resilient;

// Re-export main types
pub use ollama::OllamaAssistant;
pub use ports::Assistant;
pub use resilient::{DisabledAssistant, ResilientAssistant};
