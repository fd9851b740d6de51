//! Entity trait: identity that persists across state changes.

use std::fmt::Debug;
use std::hash::Hash;

/// A domain object addressed by a stable identifier.
///
/// Repositories key their storage on [`Entity::id`].
pub trait Entity {
    /// Strongly typed identifier.
    type Id: Copy + Eq + Hash + Debug + Send + Sync;

    /// Return the entity identifier.
    fn id(&self) -> Self::Id;
}
