use crate::error::ApiError;
use crate::services::{ChangeRequests, Resource, Systems, path_segment};

/// **VALUE**: Identifiers are encoded so they can never leave their segment.
///
/// **BUG THIS CATCHES**: Would catch `../get-systems` being resolved by URL
/// parsing into a path of another resource family.
#[test]
fn given_ids_with_reserved_characters_when_encoded_then_single_segment() {
    assert_eq!(path_segment("CHG-1").unwrap(), "CHG-1");
    assert_eq!(path_segment("../x").unwrap(), "..%2Fx");
    assert_eq!(path_segment("a/b?c").unwrap(), "a%2Fb%3Fc");
    assert_eq!(path_segment("x#y z").unwrap(), "x%23y%20z");
}

#[test]
fn given_dot_segments_when_encoded_then_invalid_identifier() {
    for id in ["", ".", ".."] {
        assert!(
            matches!(path_segment(id), Err(ApiError::InvalidIdentifier { .. })),
            "'{id}' must be rejected"
        );
    }
}

#[test]
fn given_family_when_item_path_built_then_prefix_and_encoded_id() {
    assert_eq!(
        ChangeRequests::item_path("../get-systems").unwrap(),
        "/change-requests/..%2Fget-systems"
    );
    assert_eq!(Systems::item_path("SYS 1").unwrap(), "/systems/SYS%201");
}
