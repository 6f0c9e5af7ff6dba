use uuid::Uuid;

use crate::location::Location;

/// An entity owned by the host. Only what block drop queries need.
pub trait Entity: Send + Sync {
    fn get_entity_id(&self) -> i32;

    fn get_unique_id(&self) -> Uuid;

    fn get_location(&self) -> Location;
}
