//! Typed ID definitions for all domain entities.
//!
//! Type aliases over [`Id`] give each entity its own incompatible ID type,
//! so a `UserId` can never be passed where a `CommunityId` is expected.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Community entities.
pub struct Community;

/// Marker type for User entities.
pub struct User;

/// Marker type for Thread entities (posts and replies).
pub struct Thread;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Community entities.
pub type CommunityId = Id<Community>;

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Thread entities.
pub type ThreadId = Id<Thread>;
