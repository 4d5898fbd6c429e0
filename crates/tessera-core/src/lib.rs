//! Core containers and capabilities for the Tessera workspace.
//!
//! This is the leaf crate with zero internal dependencies. It provides the
//! ordered containers every grid is built on:
//!
//! - [`Comparator`]: the three-way comparison capability, with
//!   [`NaturalOrder`] and [`ByDeref`] adapters.
//! - [`OrderedStore`]: a strictly ordered sequence whose
//!   [`unify`](OrderedStore::unify) collapses equivalent values onto one
//!   resident element.
//! - [`OrderedMap`]: a key/value map over one ordered store, searched with
//!   [`Slot`] wildcard queries.
//! - [`Shape`]: a totally ordered description of element, function and
//!   tuple types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod comparator;
pub mod coord;
pub mod map;
pub mod shape;
pub mod store;

pub use comparator::{ByDeref, Comparator, NaturalOrder};
pub use coord::Coord;
pub use map::{EntryOrder, OrderedMap, Slot};
pub use shape::Shape;
pub use store::OrderedStore;
