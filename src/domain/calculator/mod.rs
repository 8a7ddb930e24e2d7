//! Calculator aggregate: value objects, the history entities and the
//! percentage service.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
