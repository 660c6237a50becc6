//! Axum route handlers for the letter API.
//!
//! Flow per request: validate → build prompt → model gateway → typed response.
//! Provider errors are surfaced once; nothing is retried.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::letter::models::{Action, LetterRequest, LetterResponse, Section};
use crate::letter::prompts::{build_feedback_prompt, build_generate_prompt, build_improve_prompt};
use crate::llm_client::prompts::preview;
use crate::state::AppState;

/// Number of prompt characters included in request logs.
const PROMPT_PREVIEW_CHARS: usize = 200;

/// A request that passed validation, ready to send.
#[derive(Debug)]
pub struct PreparedPrompt {
    pub section: Section,
    pub prompt: String,
}

/// Checks the required fields for `action` and builds its prompt.
///
/// - `section` and `context` are required for every action (blank section counts as missing)
/// - `context.existingText` is additionally required for improve and feedback
pub fn prepare_prompt(action: Action, request: LetterRequest) -> Result<PreparedPrompt, AppError> {
    let section = request
        .section
        .filter(|s| !s.is_blank())
        .ok_or_else(|| missing_field("section", action))?;
    let context = request
        .context
        .ok_or_else(|| missing_field("context", action))?;

    let prompt = match action {
        Action::Generate => build_generate_prompt(&section, &context),
        Action::Improve | Action::Feedback => {
            let existing = context
                .existing_text
                .as_deref()
                .ok_or_else(|| missing_field("context.existingText", action))?;
            if action == Action::Improve {
                build_improve_prompt(&section, existing, &context)
            } else {
                build_feedback_prompt(&section, existing, &context)
            }
        }
    };

    Ok(PreparedPrompt { section, prompt })
}

fn missing_field(field: &str, action: Action) -> AppError {
    AppError::Validation(format!("Missing required field '{field}' for {action}."))
}

/// Shared pipeline behind the three endpoints.
async fn dispatch(
    state: &AppState,
    action: Action,
    payload: Result<Json<LetterRequest>, JsonRejection>,
) -> Result<Json<LetterResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(action = %action, reason = %rejection.body_text(), "Rejected request body");
        AppError::Validation(format!("Invalid request body for {action}."))
    })?;

    let requested_section = request
        .section
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_default();

    let prepared = prepare_prompt(action, request).map_err(|e| {
        warn!(action = %action, section = %requested_section, error = %e, "Validation failed");
        e
    })?;

    info!(
        action = %action,
        section = %prepared.section,
        prompt_preview = preview(&prepared.prompt, PROMPT_PREVIEW_CHARS),
        "Sending prompt to model gateway"
    );

    let text = state.llm.generate(&prepared.prompt).await.map_err(|source| {
        error!(
            action = %action,
            section = %prepared.section,
            rate_limited = source.is_rate_limited(),
            error = %source,
            "Model gateway call failed"
        );
        AppError::Provider { action, source }
    })?;

    Ok(Json(LetterResponse::new(action, text)))
}

/// POST /api/generate
///
/// Writes a new paragraph for the section from the student context.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<LetterRequest>, JsonRejection>,
) -> Result<Json<LetterResponse>, AppError> {
    dispatch(&state, Action::Generate, payload).await
}

/// POST /api/improve
///
/// Rewrites `context.existingText` for clarity while keeping the student's voice.
pub async fn handle_improve(
    State(state): State<AppState>,
    payload: Result<Json<LetterRequest>, JsonRejection>,
) -> Result<Json<LetterResponse>, AppError> {
    dispatch(&state, Action::Improve, payload).await
}

/// POST /api/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    payload: Result<Json<LetterRequest>, JsonRejection>,
) -> Result<Json<LetterResponse>, AppError> {
    dispatch(&state, Action::Feedback, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::models::StudentContext;

    fn request(section: Option<&str>, context: Option<StudentContext>) -> LetterRequest {
        LetterRequest {
            section: section.map(|s| Section::from(s.to_string())),
            context,
        }
    }

    fn assert_validation(result: Result<PreparedPrompt, AppError>, field: &str) {
        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains(field), "{msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_section_rejected_for_every_action() {
        for action in [Action::Generate, Action::Improve, Action::Feedback] {
            let result = prepare_prompt(action, request(None, Some(StudentContext::default())));
            assert_validation(result, "section");
        }
    }

    #[test]
    fn test_blank_section_rejected() {
        let result = prepare_prompt(
            Action::Generate,
            request(Some("  "), Some(StudentContext::default())),
        );
        assert_validation(result, "section");
    }

    #[test]
    fn test_missing_context_rejected() {
        let result = prepare_prompt(Action::Feedback, request(Some("Conclusion"), None));
        assert_validation(result, "context");
    }

    #[test]
    fn test_existing_text_required_only_for_improve_and_feedback() {
        for action in [Action::Improve, Action::Feedback] {
            let result = prepare_prompt(
                action,
                request(Some("Introduction"), Some(StudentContext::default())),
            );
            assert_validation(result, "existingText");
        }

        let prepared = prepare_prompt(
            Action::Generate,
            request(Some("Introduction"), Some(StudentContext::default())),
        )
        .unwrap();
        assert_eq!(prepared.section, Section::Introduction);
    }

    #[test]
    fn test_improve_prompt_built_from_existing_text() {
        let context = StudentContext {
            existing_text: Some("I study physics.".to_string()),
            ..Default::default()
        };
        let prepared =
            prepare_prompt(Action::Improve, request(Some("Introduction"), Some(context))).unwrap();
        assert!(prepared.prompt.contains("\"I study physics.\""));
        assert!(prepared
            .prompt
            .ends_with("Improved text for the 'Introduction' section:"));
    }
}
