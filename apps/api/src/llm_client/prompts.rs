// Shared prompt fragments for every generation task.
// Task-specific templates live in generation::prompts.

/// Appended to every system prompt that receives the structured résumé.
pub const ATTRIBUTION_INSTRUCTION: &str = "\
    CRITICAL: The structured résumé JSON is the ground truth. \
    Every achievement belongs to the position it is listed under. \
    Never move a responsibility to a different employer, never merge \
    responsibilities from different positions, and never invent experience, \
    employers, dates or numbers. If you are unsure which employer an achievement \
    belongs to, leave it out.";

/// Asks for plain Markdown with no wrapping fence.
pub const MARKDOWN_OUTPUT_INSTRUCTION: &str = "\
    Respond in Markdown only. Do not wrap the answer in a code fence \
    and do not add commentary before or after it.";
