//! Generic CRUD repository capability for surrounding booking flows.
//!
//! The allocation engine never depends on this port; it uses the narrow
//! [`RoomReader`](super::RoomReader) and
//! [`BookingReadWriter`](super::BookingReadWriter) ports instead. Adapters
//! implement both so administrative flows can edit and remove records.

use crate::domain::Entity;

/// Repository over entities of type `T`, keyed by [`Entity::id`].
pub trait Repository<T: Entity>: Send + Sync {
    /// Adapter-specific failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return every stored entity in insertion order.
    fn get_all(&self) -> Result<Vec<T>, Self::Error>;

    /// Fetch one entity, returning `None` when it does not exist.
    fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error>;

    /// Store a new entity. Fails when the identifier is already taken.
    fn add(&self, entity: T) -> Result<(), Self::Error>;

    /// Replace an existing entity. Fails when the identifier is unknown.
    fn edit(&self, entity: T) -> Result<(), Self::Error>;

    /// Delete an entity. Fails when the identifier is unknown.
    fn remove(&self, id: T::Id) -> Result<(), Self::Error>;
}
