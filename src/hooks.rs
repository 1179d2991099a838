//! Inbound hook events and the guard command toggle.
//!
//! Only `UserPromptSubmit` events are examined; every other event is
//! inert. A recognized command flips the guard state and answers with a
//! block-style result so the prompt is not forwarded as regular work.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GuardError, Result};
use crate::guard::GuardManager;

const PROMPT_EVENT: &str = "UserPromptSubmit";

const ON_COMMANDS: [&str; 2] = ["tdd-guard-superpowers on", "tdd-guard on"];
const OFF_COMMANDS: [&str; 2] = ["tdd-guard-superpowers off", "tdd-guard off"];

/// Outbound hook answer.
///
/// `decision` stays unset in every case this engine produces; optional
/// fields are omitted from the wire format entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,

    pub reason: String,

    #[serde(
        rename = "continue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub continue_: Option<bool>,

    #[serde(
        rename = "stopReason",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_reason: Option<String>,
}

impl ValidationResult {
    /// Block-style result for a recognized guard command: the transition
    /// reason doubles as the stop reason.
    fn block(message: &str) -> Self {
        Self {
            decision: None,
            reason: message.to_string(),
            continue_: Some(false),
            stop_reason: Some(message.to_string()),
        }
    }

    /// Permissive result reported while the guard is disabled.
    fn permissive() -> Self {
        Self {
            decision: None,
            reason: String::new(),
            continue_: None,
            stop_reason: None,
        }
    }
}

/// Examines user prompts for guard commands and answers validation
/// queries about the current guard state.
pub struct UserPromptHandler {
    guard: GuardManager,
}

impl UserPromptHandler {
    pub fn new(guard: GuardManager) -> Self {
        Self { guard }
    }

    /// Process one inbound hook payload.
    ///
    /// Returns `None` for non-prompt events and for prompts that are not
    /// guard commands; those payloads pass through untouched. Command
    /// matching is exact after lowercasing.
    pub fn process_user_command(&self, hook_payload: &str) -> Result<Option<ValidationResult>> {
        let event: Value =
            serde_json::from_str(hook_payload).map_err(|err| GuardError::InvalidHookPayload {
                message: err.to_string(),
            })?;

        if event.get("hook_event_name").and_then(Value::as_str) != Some(PROMPT_EVENT) {
            return Ok(None);
        }

        let Some(prompt) = event.get("prompt").and_then(Value::as_str) else {
            return Ok(None);
        };
        let command = prompt.to_lowercase();

        if ON_COMMANDS.contains(&command.as_str()) {
            self.guard.enable()?;
            return Ok(Some(ValidationResult::block("TDD Guard enabled")));
        }

        if OFF_COMMANDS.contains(&command.as_str()) {
            self.guard.disable()?;
            return Ok(Some(ValidationResult::block("TDD Guard disabled")));
        }

        Ok(None)
    }

    /// Short-circuit for validation callers: a disabled guard yields a
    /// permissive empty-reason result, an enabled guard yields nothing.
    pub fn disabled_result(&self) -> Result<Option<ValidationResult>> {
        if self.guard.is_enabled()? {
            return Ok(None);
        }
        Ok(Some(ValidationResult::permissive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::MemoryGuardStore;

    fn handler() -> UserPromptHandler {
        UserPromptHandler::new(GuardManager::new(Box::new(MemoryGuardStore::new())))
    }

    fn prompt_event(prompt: &str) -> String {
        serde_json::json!({
            "hook_event_name": "UserPromptSubmit",
            "prompt": prompt,
        })
        .to_string()
    }

    #[test]
    fn test_enable_command_flips_state_and_blocks() {
        let handler = handler();
        handler
            .process_user_command(&prompt_event("tdd-guard off"))
            .unwrap();

        let result = handler
            .process_user_command(&prompt_event("tdd-guard on"))
            .unwrap()
            .expect("command should produce a result");

        assert_eq!(result.decision, None);
        assert_eq!(result.reason, "TDD Guard enabled");
        assert_eq!(result.continue_, Some(false));
        assert_eq!(result.stop_reason.as_deref(), Some("TDD Guard enabled"));
        assert!(handler.disabled_result().unwrap().is_none());
    }

    #[test]
    fn test_disable_command_flips_state_and_blocks() {
        let handler = handler();
        let result = handler
            .process_user_command(&prompt_event("tdd-guard-superpowers off"))
            .unwrap()
            .expect("command should produce a result");

        assert_eq!(result.reason, "TDD Guard disabled");
        assert_eq!(result.stop_reason.as_deref(), Some("TDD Guard disabled"));
        assert!(handler.disabled_result().unwrap().is_some());
    }

    #[test]
    fn test_matching_is_case_insensitive_but_exact() {
        let handler = handler();

        // Lowercasing makes this match the enable set.
        assert!(handler
            .process_user_command(&prompt_event("TDD Guard ON"))
            .unwrap()
            .is_some());

        // Missing hyphen: not a command, the prompt passes through.
        assert!(handler
            .process_user_command(&prompt_event("tdd guard on"))
            .unwrap()
            .is_none());

        // Extra text around a command is not a command either.
        assert!(handler
            .process_user_command(&prompt_event("please run tdd-guard on"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_non_prompt_events_are_inert() {
        let handler = handler();
        let payload = serde_json::json!({
            "hook_event_name": "SomeOtherEvent",
            "prompt": "tdd-guard on",
        })
        .to_string();

        assert!(handler.process_user_command(&payload).unwrap().is_none());
        // The ignored command must not have flipped state.
        assert!(handler.disabled_result().unwrap().is_none());
    }

    #[test]
    fn test_prompt_event_without_prompt_is_inert() {
        let handler = handler();
        let payload = serde_json::json!({"hook_event_name": "UserPromptSubmit"}).to_string();

        assert!(handler.process_user_command(&payload).unwrap().is_none());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let handler = handler();
        let err = handler.process_user_command("{not json").unwrap_err();

        assert!(matches!(err, GuardError::InvalidHookPayload { .. }));
    }

    #[test]
    fn test_disabled_result_is_permissive_and_empty() {
        let handler = handler();
        handler
            .process_user_command(&prompt_event("tdd-guard off"))
            .unwrap();

        let result = handler.disabled_result().unwrap().expect("disabled");
        assert_eq!(result.decision, None);
        assert_eq!(result.reason, "");
        assert_eq!(result.continue_, None);
        assert_eq!(result.stop_reason, None);
    }

    #[test]
    fn test_block_result_wire_format() {
        let result = ValidationResult::block("TDD Guard enabled");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["reason"], "TDD Guard enabled");
        assert_eq!(json["continue"], false);
        assert_eq!(json["stopReason"], "TDD Guard enabled");
        assert!(json.get("decision").is_none());
    }

    #[test]
    fn test_permissive_result_omits_optional_fields() {
        let json = serde_json::to_value(ValidationResult::permissive()).unwrap();

        assert_eq!(json["reason"], "");
        assert!(json.get("continue").is_none());
        assert!(json.get("stopReason").is_none());
    }
}
