// Content generation: form parameters, the authoring prompt, and the
// schema-constrained model call that produces a Book.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod params;
pub mod prompts;
