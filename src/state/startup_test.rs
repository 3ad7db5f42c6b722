use std::cell::RefCell;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn variable(env: &str, value: &str) -> ServerVariable {
    ServerVariable {
        name: env.to_owned(),
        description: String::new(),
        env_variable: env.to_owned(),
        default_value: String::new(),
        server_value: value.to_owned(),
        is_editable: true,
        rules: vec!["required".to_owned(), "string".to_owned()],
    }
}

fn loaded() -> StartupState {
    let mut state = StartupState::for_server("srv-1");
    state.load(StartupData {
        variables: vec![variable("A", "1"), variable("B", "2"), variable("C", "3")],
        invocation: "./run A=1 B=2 C=3".to_owned(),
        raw_startup_command: "./run A={{A}} B={{B}} C={{C}}".to_owned(),
        docker_images: BTreeMap::new(),
    });
    state
}

struct CellStore(RefCell<StartupState>);

impl StartupStore for CellStore {
    fn server_uuid(&self) -> String {
        self.0.borrow().server_uuid.clone()
    }

    fn mutate(&self, update: &mut dyn FnMut(&mut StartupState), revalidate: bool) {
        let mut state = self.0.borrow_mut();
        update(&mut state);
        if revalidate {
            state.revalidate_seq += 1;
        }
    }
}

// =============================================================
// StartupState
// =============================================================

#[test]
fn for_server_starts_loading() {
    let state = StartupState::for_server("srv-1");
    assert_eq!(state.server_uuid, "srv-1");
    assert!(state.loading);
    assert!(state.variables.is_empty());
}

#[test]
fn load_clears_loading_and_error() {
    let mut state = StartupState::for_server("srv-1");
    state.error = Some("boom".to_owned());
    state.load(StartupData::default());
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn apply_variable_update_replaces_only_matching_entry() {
    let mut state = loaded();
    let before = state.clone();
    let update = VariableUpdate {
        variable: variable("B", "20"),
        invocation: "./run A=1 B=20 C=3".to_owned(),
        raw_startup_command: None,
    };

    assert!(state.apply_variable_update(&update));

    assert_eq!(state.variable("B"), Some(&update.variable));
    assert_eq!(state.variable("A"), before.variable("A"));
    assert_eq!(state.variable("C"), before.variable("C"));
    assert_eq!(state.variables.len(), 3);
    assert_eq!(state.invocation, "./run A=1 B=20 C=3");
    assert_eq!(state.raw_startup_command, before.raw_startup_command);
}

#[test]
fn apply_variable_update_keeps_order() {
    let mut state = loaded();
    state.apply_variable_update(&VariableUpdate {
        variable: variable("A", "9"),
        invocation: String::new(),
        raw_startup_command: None,
    });
    let order: Vec<&str> = state.variables.iter().map(|v| v.env_variable.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn apply_variable_update_for_unknown_variable_only_sets_invocation() {
    let mut state = loaded();
    let variables = state.variables.clone();
    let replaced = state.apply_variable_update(&VariableUpdate {
        variable: variable("Z", "0"),
        invocation: "./run".to_owned(),
        raw_startup_command: Some("./run".to_owned()),
    });
    assert!(!replaced);
    assert_eq!(state.variables, variables);
    assert_eq!(state.invocation, "./run");
    assert_eq!(state.raw_startup_command, "./run");
}

// =============================================================
// StartupStore
// =============================================================

#[test]
fn store_mutate_without_revalidate_keeps_seq() {
    let store = CellStore(RefCell::new(loaded()));
    store.mutate(&mut |s| s.invocation = "x".to_owned(), false);
    assert_eq!(store.0.borrow().invocation, "x");
    assert_eq!(store.0.borrow().revalidate_seq, 0);
}

#[test]
fn store_replace_with_revalidate_bumps_seq() {
    let store = CellStore(RefCell::new(loaded()));
    store.replace(StartupState::for_server("srv-2"), true);
    assert_eq!(store.server_uuid(), "srv-2");
    assert_eq!(store.0.borrow().revalidate_seq, 1);
}
