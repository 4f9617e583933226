//! In-process event bus for view invalidation.
//!
//! Every successful mutation publishes a [`DomainEvent`] keyed by entity
//! type and id. Read-side caches (asset lists, the operations view)
//! subscribe and drop their cached projections for the named entity,
//! so invalidation is event-driven rather than time-based.

pub mod bus;

pub use bus::{DomainEvent, EventBus};
