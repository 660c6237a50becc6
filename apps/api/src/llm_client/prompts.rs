// Shared prompt fragments and prompt-building utilities.
// Feature prompts live next to their handlers (see letter::prompts).

/// Opening line shared by every letter prompt.
pub const WRITER_PERSONA: &str =
    "You are an experienced scholarship application advisor and writing coach.";

/// Keeps the model from wrapping its answer in commentary.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Respond with the requested text only. \
    Do not add a title, preamble, or closing remarks.";

/// Returns at most `max_chars` characters of `prompt`, cut on a char boundary.
/// Used for log previews only.
pub fn preview(prompt: &str, max_chars: usize) -> &str {
    match prompt.char_indices().nth(max_chars) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}
