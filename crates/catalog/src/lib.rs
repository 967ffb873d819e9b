mod error;
mod seed;
mod ship;
mod store;

pub use error::{CatalogError, FieldParseError, Result};
pub use ship::{Crew, Engine, Ship, ShipQuery, Size, Weapon};
pub use store::{Catalog, ShipMatch};
