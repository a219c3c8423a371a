//! # Wire Models
//!
//! Plain data records for the server resources this kit exercises. Each
//! record is a JSON wire snapshot: mutated locally before submission, treated
//! as immutable once read back from the server.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A resource record addressable through the endpoint registry
///
/// Every model exposes the stable identifier used to build single-resource
/// locators. Semantic validity (non-empty names, identifier charset rules)
/// is the remote API's responsibility; models only guarantee serializability.
pub trait ApiModel: Serialize + DeserializeOwned + Send + Sync {
    /// Stable identifier used in locators
    fn id(&self) -> &str;
}

/// A project, optionally created as a copy of another project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_project: Option<SourceProject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_all_associated_settings: Option<bool>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source_project: None,
            copy_all_associated_settings: None,
        }
    }

    /// Turn this description into a copy of the project named by `locator`
    #[must_use]
    pub fn copy_of(mut self, locator: impl Into<String>) -> Self {
        self.source_project = Some(SourceProject {
            locator: locator.into(),
        });
        self.copy_all_associated_settings = Some(true);
        self
    }
}

impl ApiModel for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reference to the project a copy is created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceProject {
    pub locator: String,
}

/// A user account; `username` is the external locator key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // Write-only on the wire; the server never echoes it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Roles>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: None,
            password: Some(password.into()),
            roles: None,
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Roles) -> Self {
        self.roles = Some(roles);
        self
    }
}

impl ApiModel for User {
    fn id(&self) -> &str {
        &self.username
    }
}

/// Role assignments carried by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roles {
    pub role: Vec<Role>,
}

impl Roles {
    pub fn single(role: Role) -> Self {
        Self { role: vec![role] }
    }
}

/// A role grant scoped to a project subtree (`"g"` = global/root scope)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: String,
    pub scope: String,
}

impl Role {
    pub fn new(role_id: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            scope: scope.into(),
        }
    }
}

/// A build configuration belonging to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildType {
    pub id: String,
    pub name: String,
    pub project: ProjectRef,
}

impl BuildType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project: ProjectRef {
                id: project_id.into(),
            },
        }
    }
}

impl ApiModel for BuildType {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Identifier-only reference to an owning project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub id: String,
}
