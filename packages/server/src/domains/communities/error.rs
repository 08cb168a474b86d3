use thiserror::Error;

/// Failures surfaced by community operations.
///
/// Operations log a diagnostic at their boundary and propagate these
/// unchanged; translation into API responses happens in the resolver layer.
#[derive(Error, Debug)]
pub enum CommunityError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("user {user_id} is already a member of community {community_id}")]
    AlreadyMember {
        community_id: String,
        user_id: String,
    },

    #[error("storage error: {0}")]
    Store(#[from] anyhow::Error),
}
