//! End-to-end guard toggle flow over the file-backed store.

use tdd_guard::{select_linter, Config, GuardManager, UserPromptHandler};

fn prompt(text: &str) -> String {
    serde_json::json!({
        "hook_event_name": "UserPromptSubmit",
        "prompt": text,
    })
    .to_string()
}

#[test]
fn guard_commands_persist_across_handler_instances() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new().with_data_dir(dir.path());

    let handler = UserPromptHandler::new(GuardManager::for_config(&config));
    let result = handler
        .process_user_command(&prompt("tdd-guard off"))
        .unwrap()
        .expect("disable command should produce a result");
    assert_eq!(result.reason, "TDD Guard disabled");

    // A fresh handler over the same data dir sees the persisted state.
    let handler = UserPromptHandler::new(GuardManager::for_config(&config));
    let disabled = handler.disabled_result().unwrap().expect("guard is off");
    assert_eq!(disabled.reason, "");

    handler
        .process_user_command(&prompt("TDD-Guard ON"))
        .unwrap()
        .expect("enable command should produce a result");

    let handler = UserPromptHandler::new(GuardManager::for_config(&config));
    assert!(handler.disabled_result().unwrap().is_none());
}

#[test]
fn unconfigured_linter_selects_no_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new().with_data_dir(dir.path());

    assert!(select_linter(&config).is_none());
    assert!(select_linter(&config.clone().with_linter_type("unsupported-tool")).is_none());
    assert!(select_linter(&config.with_linter_type("biome")).is_some());
}
