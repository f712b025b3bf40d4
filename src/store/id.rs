//! Identifier generation for stored entities.

use uuid::Uuid;

/// Produce a fresh unique entity id.
///
/// Ids are opaque strings; callers must not parse them.
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}
