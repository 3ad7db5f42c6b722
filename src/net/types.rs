//! Wire DTOs for the panel's client API startup endpoints.
//!
//! DESIGN
//! ======
//! The API wraps every resource in an `{ "attributes": … }` envelope and
//! ships validation rules as one pipe-separated string. Envelopes stay private
//! to this module; callers only see the flattened domain types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One startup variable exposed by the server's egg.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVariable {
    /// Display name.
    pub name: String,
    /// Free-form help text shown under the control.
    #[serde(default)]
    pub description: String,
    /// Environment variable identifier, unique within one server.
    pub env_variable: String,
    /// Value used when the server has no override.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub default_value: String,
    /// Value currently applied to the server.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub server_value: String,
    /// Whether users may change this variable at all.
    pub is_editable: bool,
    /// Validation rule tokens (e.g. `"required"`, `"in:a,b"`).
    #[serde(
        default,
        deserialize_with = "deserialize_rules",
        serialize_with = "serialize_rules"
    )]
    pub rules: Vec<String>,
}

/// Canonical result of a variable update: the stored record plus the
/// recomputed startup command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableUpdate {
    pub variable: ServerVariable,
    pub invocation: String,
    pub raw_startup_command: Option<String>,
}

/// Everything the startup page needs in one fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupData {
    pub variables: Vec<ServerVariable>,
    pub invocation: String,
    pub raw_startup_command: String,
    /// Display name → image reference.
    pub docker_images: BTreeMap<String, String>,
}

/// Request body for `PUT …/startup/variable`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateVariableRequest<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    attributes: T,
}

#[derive(Debug, Default, Deserialize)]
struct StartupMeta {
    #[serde(default)]
    startup_command: String,
    #[serde(default)]
    raw_startup_command: Option<String>,
    #[serde(default)]
    docker_images: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartupListResponse {
    #[serde(default)]
    data: Vec<Envelope<ServerVariable>>,
    #[serde(default)]
    meta: StartupMeta,
}

impl From<StartupListResponse> for StartupData {
    fn from(raw: StartupListResponse) -> Self {
        Self {
            variables: raw.data.into_iter().map(|e| e.attributes).collect(),
            invocation: raw.meta.startup_command,
            raw_startup_command: raw.meta.raw_startup_command.unwrap_or_default(),
            docker_images: raw.meta.docker_images,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VariableUpdateResponse {
    attributes: ServerVariable,
    meta: StartupMeta,
}

impl From<VariableUpdateResponse> for VariableUpdate {
    fn from(raw: VariableUpdateResponse) -> Self {
        Self {
            variable: raw.attributes,
            invocation: raw.meta.startup_command,
            raw_startup_command: raw.meta.raw_startup_command,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ServerMeta {
    #[serde(default)]
    user_permissions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServerResponse {
    #[serde(default)]
    meta: ServerMeta,
}

impl ServerResponse {
    pub(crate) fn into_permissions(self) -> Vec<String> {
        self.meta.user_permissions
    }
}

/// Error body returned by the panel API.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_rules<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rules {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<Rules>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Rules::List(list)) => list,
        Some(Rules::Joined(joined)) if joined.is_empty() => Vec::new(),
        Some(Rules::Joined(joined)) => joined.split('|').map(str::to_owned).collect(),
    })
}

fn serialize_rules<S>(rules: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&rules.join("|"))
}
