// Prompt templates for book generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Book authoring prompt template.
/// Replace: {persona}, {topic}, {details}, {audience}, {style},
///          {chapter_count}, {page_count}, {json_only}
pub const BOOK_PROMPT_TEMPLATE: &str = r#"{persona} Write a book in Arabic based on the following specifications:

Main Topic/Title Idea: "{topic}"
Specific Details/User Vision: "{details}"
Target Audience: {audience}
Tone/Style: {style}
Length Constraint: The book MUST have exactly {chapter_count} chapters.
Note: The user expects a book length equivalent to roughly {page_count} standard pages. Ensure each chapter is long enough to fill about 2 pages of text.

The book should have:
1. A creative title in Arabic.
2. An author name (invent one fitting the style or use 'AI Author').
3. A short, engaging back-cover description.
4. Exactly {chapter_count} detailed chapters.

IMPORTANT:
- If specific details are provided in "Specific Details", YOU MUST incorporate them into the story or content.
- Each chapter must be substantial (approx 400-600 words per chapter) to satisfy the page count requirement.
- Format with proper paragraphs, one paragraph per line.

{json_only}"#;
