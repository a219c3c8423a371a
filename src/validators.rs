//! # Well-Known Failure Specifications
//!
//! One factory per failure scenario the server is known to produce, each
//! parameterized by the offending value so the expected diagnostic is
//! reconstructed from the input rather than hard-coded per test. This keeps
//! the relationship between input and expected message explicit and
//! auditable.
//!
//! The server answers most of these as plain text; a subset of paths uses the
//! structured `{"errors":[{"message":…}]}` envelope instead. Where the
//! envelope is known to vary, the factory matches both shapes through a
//! disjunction.

use reqwest::StatusCode;

use crate::validation::{BodyPredicate, ResponseSpec};

const TEXT_PLAIN: &str = "text/plain";

/// Identifier policy line the server appends to every invalid-ID diagnostic
pub const ID_POLICY: &str = "ID should start with a latin letter and contain only latin letters, \
                             digits and underscores (at most 225 characters).";

/// Server-side cap on identifier length
pub const MAX_ID_LENGTH: usize = 225;

/// Internal id of the root project scope
pub const ROOT_SCOPE: &str = "_Root";

/// Expected response for either error envelope carrying `message`
///
/// Matches a plain-text body containing the message, or a structured envelope
/// whose first error equals it exactly. Neither shape is authoritative.
pub fn error_envelope(status: StatusCode, message: impl Into<String>) -> ResponseSpec {
    let message = message.into();
    ResponseSpec::new(status).with_body(BodyPredicate::AnyOf(vec![
        BodyPredicate::Contains(message.clone()),
        BodyPredicate::json_path_equals("/errors/0/message", message),
    ]))
}

/// 400: creating a second project with an identifier already in use
pub fn project_id_already_used(project_id: &str) -> ResponseSpec {
    ResponseSpec::new(StatusCode::BAD_REQUEST)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::Contains(format!(
            "Project ID \"{project_id}\" is already used by another project"
        )))
}

/// 400: creating a second project with a name already in use
pub fn project_name_already_used(project_name: &str) -> ResponseSpec {
    ResponseSpec::new(StatusCode::BAD_REQUEST)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::Contains(format!(
            "Project with this name already exists: {project_name}"
        )))
}

/// 400: creating a project with an empty name
///
/// The wording varies with the rest of the payload ("name cannot be empty"
/// vs. "Project name cannot be empty"); the common suffix covers both.
pub fn project_name_empty() -> ResponseSpec {
    ResponseSpec::new(StatusCode::BAD_REQUEST)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::contains("name cannot be empty"))
}

/// 500: a whitespace-only name passes the emptiness check and fails deeper in
///
/// Distinct failure class from [`project_name_empty`]; the two must be
/// asserted separately.
pub fn project_name_whitespace_only() -> ResponseSpec {
    ResponseSpec::new(StatusCode::INTERNAL_SERVER_ERROR)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::contains("Given project name is empty."))
}

/// 500: creating a project with an empty identifier
pub fn project_id_empty() -> ResponseSpec {
    ResponseSpec::new(StatusCode::INTERNAL_SERVER_ERROR)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::contains("Project ID must not be empty."))
}

/// 500: identifier contains a character outside latin letters/digits/underscore
///
/// The wording names the first offending character; the server distinguishes
/// non-latin letters from other unsupported characters.
pub fn project_id_invalid_character(project_id: &str) -> ResponseSpec {
    let clause = match first_invalid_character(project_id) {
        Some(c) if c.is_alphabetic() => format!("contains non-latin letter '{c}'"),
        Some(c) => format!("contains unsupported character '{c}'"),
        // Caller passed a well-formed id; only the policy line can be expected.
        None => {
            return ResponseSpec::new(StatusCode::INTERNAL_SERVER_ERROR)
                .with_content_type(TEXT_PLAIN)
                .with_body(BodyPredicate::contains(ID_POLICY));
        }
    };
    ResponseSpec::new(StatusCode::INTERNAL_SERVER_ERROR)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::Contains(format!(
            "Project ID \"{project_id}\" is invalid: {clause}. {ID_POLICY}"
        )))
}

/// 500: identifier starts with a digit, underscore, or other non-letter
pub fn project_id_starts_with_non_letter(project_id: &str) -> ResponseSpec {
    let Some(first) = project_id.chars().next() else {
        return project_id_empty();
    };
    ResponseSpec::new(StatusCode::INTERNAL_SERVER_ERROR)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::Contains(format!(
            "Project ID \"{project_id}\" is invalid: starts with non-letter character '{first}'. \
             {ID_POLICY}"
        )))
}

/// 500: identifier exceeds [`MAX_ID_LENGTH`]; the actual length is named
pub fn project_id_too_long(project_id: &str) -> ResponseSpec {
    let length = project_id.chars().count();
    ResponseSpec::new(StatusCode::INTERNAL_SERVER_ERROR)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::Contains(format!(
            "Project ID \"{project_id}\" is invalid: it is {length} characters long while the \
             maximum length is {MAX_ID_LENGTH}. {ID_POLICY}"
        )))
}

/// 404: no project under the given locator
///
/// The server wording varies across call shapes for the same logical failure.
pub fn project_not_found(locator: &str) -> ResponseSpec {
    ResponseSpec::new(StatusCode::NOT_FOUND)
        .with_content_type(TEXT_PLAIN)
        .with_body(BodyPredicate::AnyOf(vec![
            BodyPredicate::Contains(format!(
                "Project cannot be found by external id '{locator}'"
            )),
            BodyPredicate::Contains(format!(
                "No project found by name or internal/external id '{locator}'."
            )),
        ]))
}

/// 403: the caller lacks `permission` in the project with `internal_id`
pub fn permission_denied(permission: &str, internal_id: &str) -> ResponseSpec {
    error_envelope(
        StatusCode::FORBIDDEN,
        format!("You do not have \"{permission}\" permission in project with internal id: {internal_id}"),
    )
}

/// 403: a non-administrative role cannot create projects under the root scope
pub fn project_create_access_denied() -> ResponseSpec {
    permission_denied("Create subproject", ROOT_SCOPE)
}

/// 401: unauthenticated request, regardless of body content
pub fn unauthorized() -> ResponseSpec {
    ResponseSpec::new(StatusCode::UNAUTHORIZED)
}

// First character outside the identifier alphabet, if any.
fn first_invalid_character(id: &str) -> Option<char> {
    id.chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, CONTENT_TYPE};
    use reqwest::StatusCode;

    use crate::outcome::RequestOutcome;

    fn text_outcome(status: StatusCode, body: &str) -> RequestOutcome {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "text/plain; charset=UTF-8".parse().unwrap());
        RequestOutcome::new("create projects", status, headers, body)
    }

    fn json_outcome(status: StatusCode, body: &str) -> RequestOutcome {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        RequestOutcome::new("create projects", status, headers, body)
    }

    #[test]
    fn test_duplicate_id_message_embeds_the_identifier() {
        let outcome = text_outcome(
            StatusCode::BAD_REQUEST,
            "Project ID \"proj_1\" is already used by another project",
        );
        assert!(project_id_already_used("proj_1").matches(&outcome).is_ok());
        assert!(project_id_already_used("proj_2").matches(&outcome).is_err());
    }

    #[test]
    fn test_charset_wording_tracks_character_class() {
        // '@' is not a letter anywhere: "unsupported character".
        let body = "Project ID \"test@id\" is invalid: contains unsupported character '@'. \
                    ID should start with a latin letter and contain only latin letters, digits \
                    and underscores (at most 225 characters).";
        let outcome = text_outcome(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(project_id_invalid_character("test@id").matches(&outcome).is_ok());

        // A cyrillic letter is a letter, just not latin: "non-latin letter".
        let body = "Project ID \"тест\" is invalid: contains non-latin letter 'т'. \
                    ID should start with a latin letter and contain only latin letters, digits \
                    and underscores (at most 225 characters).";
        let outcome = text_outcome(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(project_id_invalid_character("тест").matches(&outcome).is_ok());
    }

    #[test]
    fn test_non_letter_prefix_names_the_first_character() {
        let body = "Project ID \"1abc\" is invalid: starts with non-letter character '1'. \
                    ID should start with a latin letter and contain only latin letters, digits \
                    and underscores (at most 225 characters).";
        let outcome = text_outcome(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(project_id_starts_with_non_letter("1abc").matches(&outcome).is_ok());
    }

    #[test]
    fn test_length_overflow_names_the_actual_length() {
        let id = "a".repeat(226);
        let body = format!(
            "Project ID \"{id}\" is invalid: it is 226 characters long while the maximum \
             length is 225. {ID_POLICY}"
        );
        let outcome = text_outcome(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert!(project_id_too_long(&id).matches(&outcome).is_ok());
    }

    #[test]
    fn test_not_found_accepts_both_server_wordings() {
        let spec = project_not_found("ghost");
        let first = text_outcome(
            StatusCode::NOT_FOUND,
            "Project cannot be found by external id 'ghost'",
        );
        let second = text_outcome(
            StatusCode::NOT_FOUND,
            "No project found by name or internal/external id 'ghost'.",
        );
        assert!(spec.matches(&first).is_ok());
        assert!(spec.matches(&second).is_ok());
    }

    #[test]
    fn test_permission_denied_names_permission_and_scope() {
        let spec = project_create_access_denied();
        let outcome = text_outcome(
            StatusCode::FORBIDDEN,
            "You do not have \"Create subproject\" permission in project with internal id: _Root",
        );
        assert!(spec.matches(&outcome).is_ok());
    }

    #[test]
    fn test_error_envelope_accepts_both_shapes() {
        let spec = error_envelope(StatusCode::FORBIDDEN, "Access denied");
        let text = text_outcome(StatusCode::FORBIDDEN, "Access denied. Check the roles.");
        let json = json_outcome(
            StatusCode::FORBIDDEN,
            r#"{"errors":[{"message":"Access denied"}]}"#,
        );
        assert!(spec.matches(&text).is_ok());
        assert!(spec.matches(&json).is_ok());
    }

    #[test]
    fn test_unauthorized_ignores_body_content() {
        let spec = unauthorized();
        assert!(spec
            .matches(&text_outcome(StatusCode::UNAUTHORIZED, "anything at all"))
            .is_ok());
        assert!(spec
            .matches(&text_outcome(StatusCode::FORBIDDEN, "anything at all"))
            .is_err());
    }

    #[test]
    fn test_name_failure_classes_are_distinct() {
        let empty = text_outcome(StatusCode::BAD_REQUEST, "Project name cannot be empty.");
        let whitespace = text_outcome(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Given project name is empty.",
        );
        assert!(project_name_empty().matches(&empty).is_ok());
        assert!(project_name_empty().matches(&whitespace).is_err());
        assert!(project_name_whitespace_only().matches(&whitespace).is_ok());
        assert!(project_name_whitespace_only().matches(&empty).is_err());
    }
}
