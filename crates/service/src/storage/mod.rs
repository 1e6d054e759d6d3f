//! Storage abstractions for the service layer
//!
//! The bookstore keeps everything in process memory; the store here is the
//! single place that owns a lock around shared map state.

pub mod memory_map_store;
