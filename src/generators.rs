//! # Test Data Generation
//!
//! Collision-resistant identifiers, names, and ready-to-submit entity
//! instances. Correctness under parallel test runs depends on these values
//! never colliding across invocations; everything here is uuid-backed.
//!
//! Generated identifiers stay inside the server's identifier alphabet
//! (latin letters, digits, underscores, letter first) so a generated value
//! never trips validation a test did not mean to trip.

use uuid::Uuid;

use crate::models::{BuildType, Project, Role, Roles, User};

const TEST_PREFIX: &str = "test_";

/// Random identifier: `test_` followed by a uuid, hex only
#[must_use]
pub fn random_id() -> String {
    format!("{TEST_PREFIX}{}", Uuid::new_v4().simple())
}

/// Random identifier of exactly `length` characters, latin letters only
///
/// Useful for probing length boundaries, where every character must be valid
/// so only the length is under test.
#[must_use]
pub fn random_id_of_length(length: usize) -> String {
    let mut out = String::with_capacity(length);
    while out.len() < length {
        for byte in Uuid::new_v4().as_bytes() {
            if out.len() == length {
                break;
            }
            out.push((b'a' + byte % 26) as char);
        }
    }
    out
}

/// Random human-readable name
#[must_use]
pub fn random_name() -> String {
    format!("Test project {}", Uuid::new_v4().simple())
}

/// A populated project description ready to submit
#[must_use]
pub fn project() -> Project {
    Project::new(random_id(), random_name())
}

/// A populated user with credentials and no roles
#[must_use]
pub fn user() -> User {
    User::new(random_id(), Uuid::new_v4().simple().to_string())
}

/// A populated user holding a single globally-scoped role
#[must_use]
pub fn user_with_role(role_id: &str) -> User {
    user().with_roles(Roles::single(Role::new(role_id, "g")))
}

/// A populated build configuration under `project_id`
#[must_use]
pub fn build_type(project_id: &str) -> BuildType {
    BuildType::new(
        format!("{project_id}_{}", Uuid::new_v4().simple()),
        random_name(),
        project_id,
    )
}
