//! Access the fields of a struct by their position in declaration order.
//!
//! `#[derive(Positional)]` (from `positional_derive`) describes a struct as a
//! balanced tree of fields, searches that tree for every position the struct
//! has, and implements [`HasPosition<I>`] once per position it finds. Asking
//! for a position the struct does not have is a compile error.
//!
//! Positions start at [`BASE_INDEX`]:
//!
//! ```
//! use positional::{get_position, set_position};
//! use positional_derive::Positional;
//!
//! #[derive(Positional, Debug, PartialEq)]
//! struct Human {
//!     name: &'static str,
//!     age: u32,
//!     address: &'static str,
//! }
//!
//! let human = Human { name: "Tunyasz", age: 50, address: "London" };
//! assert_eq!(*get_position::<1, _>(&human), "Tunyasz");
//!
//! let human = set_position::<2, _>(30, set_position::<1, _>("Tamas", human));
//! assert_eq!(human, Human { name: "Tamas", age: 30, address: "London" });
//! ```
//!
//! The same search is available at runtime through [`field_at`], for
//! positions that are not known until then.

mod error;
mod locate;
mod position;
mod repr;
mod shape;

pub mod lens;

pub use error::PositionNotFound;
pub use lens::{Compose, Identity, Lens, Position};
pub use locate::{Accessor, Accessors, Direction};
pub use position::{field_at, field_count, get_position, get_position_mut, set_position, FieldInfo, HasPosition, Positional};
pub use repr::{ConstructorKind, Repr};
pub use shape::{Leaves, Pair, ProductShape, Record};

/// Position of the first field of every record.
pub const BASE_INDEX: usize = 1;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;

    pub use crate::position::cached_record;
}
