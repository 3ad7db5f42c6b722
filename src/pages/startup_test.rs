use super::*;
use crate::net::types::ServerVariable;

fn data() -> StartupData {
    StartupData {
        variables: vec![ServerVariable {
            name: "Port".to_owned(),
            env_variable: "SERVER_PORT".to_owned(),
            server_value: "25565".to_owned(),
            is_editable: true,
            ..ServerVariable::default()
        }],
        invocation: "./run --port=25565".to_owned(),
        ..StartupData::default()
    }
}

#[test]
fn server_changed_compares_uuid() {
    let state = StartupState::for_server("srv-1");
    assert!(!server_changed(&state, "srv-1"));
    assert!(server_changed(&state, "srv-2"));
}

#[test]
fn apply_startup_result_loads_data() {
    let mut state = StartupState::for_server("srv-1");
    apply_startup_result(&mut state, "srv-1", Ok(data()));
    assert!(!state.loading);
    assert_eq!(state.variables.len(), 1);
    assert_eq!(state.invocation, "./run --port=25565");
}

#[test]
fn apply_startup_result_records_error_and_stops_loading() {
    let mut state = StartupState::for_server("srv-1");
    let err = ApiError::Status {
        status: 404,
        detail: "The requested resource could not be found.".to_owned(),
    };
    apply_startup_result(&mut state, "srv-1", Err(err));
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("The requested resource could not be found.")
    );
}

#[test]
fn apply_startup_result_ignores_other_server() {
    let mut state = StartupState::for_server("srv-2");
    apply_startup_result(&mut state, "srv-1", Ok(data()));
    assert!(state.loading);
    assert!(state.variables.is_empty());
}

#[test]
fn permissions_from_failed_fetch_grant_nothing() {
    let perms = permissions_from_result(Err(ApiError::Network("offline".to_owned())));
    assert!(perms.granted.is_empty());
    assert!(!perms.has_all(&["startup.update"]));

    let perms = permissions_from_result(Ok(vec!["startup.update".to_owned()]));
    assert!(perms.has("startup.update"));
}
