#![no_std]

//! A string queue backed by a singly linked list.
//!
//! See [`queue`] for the container itself and [`queue::handle`] for the
//! entry points that accept an absent queue.

extern crate alloc;

pub mod error;
pub mod queue;

pub use error::{QueueError, Result};
pub use queue::list::Queue;
