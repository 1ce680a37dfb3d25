//! `offerkit-core` — shared building blocks for the offerings model.
//!
//! Pure primitives only: identity traits, typed identifiers and the parse
//! error model. No IO happens in this crate.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{ParseError, ParseResult};
pub use id::{EventId, SessionId};
pub use value_object::ValueObject;
