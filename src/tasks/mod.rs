//! Background Tasks Module
//!
//! Detached work the cache runs off the caller's path.
//!
//! # Tasks
//! - Sweep: removes entries that outlived the in-memory store's life window

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
