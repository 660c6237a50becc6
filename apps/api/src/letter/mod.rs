// Scholarship letter API: generate, improve, and critique letter sections.
// All model calls go through llm_client; this module only validates and builds prompts.

pub mod handlers;
pub mod models;
pub mod prompts;
