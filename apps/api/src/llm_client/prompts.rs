// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Persona line opening every authoring prompt.
pub const AUTHOR_PERSONA: &str = "You are a professional book author.";

/// Closing instruction appended to every structured-output prompt.
/// The response schema is declared separately; this keeps the model from wrapping it.
pub const JSON_ONLY_INSTRUCTION: &str = "Return the response strictly in valid JSON format. \
    Do NOT use markdown code fences. \
    Do NOT include any text outside the JSON object.";
