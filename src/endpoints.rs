//! # Endpoint Registry
//!
//! Fixed mapping from logical resource names to URL templates and wire types.
//! The registry is the single source of truth binding a resource to both its
//! URL shape and its model, so call sites never cast.
//!
//! Typed descriptors are plain constants passed explicitly at the call site;
//! the binding between a logical resource and its wire type is visible and
//! checked by the compiler.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiModel, BuildType, Project, User};

/// Logical resource identifier with its URL template
///
/// Registration is static and fixed at process start; exactly one entry per
/// logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Projects,
    Users,
    BuildTypes,
}

impl EndpointKind {
    /// Every registered endpoint
    pub const ALL: [EndpointKind; 3] = [
        EndpointKind::Projects,
        EndpointKind::Users,
        EndpointKind::BuildTypes,
    ];

    /// Logical resource name as used in registry lookups
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EndpointKind::Projects => "projects",
            EndpointKind::Users => "users",
            EndpointKind::BuildTypes => "buildTypes",
        }
    }

    /// Collection URL template, relative to the server base URL
    #[must_use]
    pub fn url(&self) -> &'static str {
        match self {
            EndpointKind::Projects => "/app/rest/projects",
            EndpointKind::Users => "/app/rest/users",
            EndpointKind::BuildTypes => "/app/rest/buildTypes",
        }
    }

    /// Resolve a logical name to its registry entry
    pub fn resolve(name: &str) -> ApiResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ApiError::UnknownEndpoint(name.to_string()))
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry entry binding a logical resource to its URL shape and wire type
///
/// Obtained through the typed constants ([`PROJECTS`], [`USERS`],
/// [`BUILD_TYPES`]); the model type is fixed per descriptor for the lifetime
/// of the process.
#[derive(Debug)]
pub struct Endpoint<M: ApiModel> {
    kind: EndpointKind,
    _model: PhantomData<fn() -> M>,
}

// Manual impls: the descriptor is copyable regardless of the model type.
impl<M: ApiModel> Clone for Endpoint<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ApiModel> Copy for Endpoint<M> {}

impl<M: ApiModel> Endpoint<M> {
    const fn new(kind: EndpointKind) -> Self {
        Self {
            kind,
            _model: PhantomData,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn url(&self) -> &'static str {
        self.kind.url()
    }
}

/// Project resource descriptor
pub const PROJECTS: Endpoint<Project> = Endpoint::new(EndpointKind::Projects);
/// User resource descriptor
pub const USERS: Endpoint<User> = Endpoint::new(EndpointKind::Users);
/// Build configuration resource descriptor
pub const BUILD_TYPES: Endpoint<BuildType> = Endpoint::new(EndpointKind::BuildTypes);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(
            EndpointKind::resolve("projects").unwrap(),
            EndpointKind::Projects
        );
        assert_eq!(EndpointKind::resolve("users").unwrap(), EndpointKind::Users);
        assert_eq!(
            EndpointKind::resolve("buildTypes").unwrap(),
            EndpointKind::BuildTypes
        );
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let err = EndpointKind::resolve("vcsRoots").unwrap_err();
        assert!(matches!(err, ApiError::UnknownEndpoint(name) if name == "vcsRoots"));
    }

    #[test]
    fn test_one_descriptor_per_logical_name() {
        let names: HashSet<_> = EndpointKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), EndpointKind::ALL.len());
    }

    #[test]
    fn test_typed_constants_bind_url_templates() {
        assert_eq!(PROJECTS.url(), "/app/rest/projects");
        assert_eq!(USERS.url(), "/app/rest/users");
        assert_eq!(BUILD_TYPES.url(), "/app/rest/buildTypes");
    }
}
