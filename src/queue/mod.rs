//! # String Queue
//!
//! A FIFO queue of owned strings implemented as a singly linked list with both
//! head and tail references and a cached element count. Despite the name it
//! accepts insertion at either end; removal happens at the head.
//!
//! ## Core Components
//!
//! - [`list::Queue`]: the container and its operations.
//! - [`iter::Iter`]: a borrowing iterator over the queued values in list order.
//! - [`handle`]: entry points that accept an absent queue and report failure
//!   through their return value.
//!
//! ## Storage
//!
//! Nodes are kept in an arena owned by the queue and linked by slot index.
//! Reversal and sorting only rewrite links: no node is allocated, freed or
//! moved. Slots vacated by removal are recycled by later insertions.
//!
//! # Examples
//!
//! ```
//! use mola_queue::Queue;
//!
//! let mut queue = Queue::new();
//! assert!(queue.insert_tail("banana"));
//! assert!(queue.insert_tail("apple"));
//! assert!(queue.insert_tail("cherry"));
//!
//! queue.sort();
//!
//! let mut buf = [0u8; 8];
//! assert!(queue.remove_head(Some(&mut buf)));
//! assert_eq!(&buf[..6], b"apple\0");
//!
//! assert_eq!(queue.pop_head().as_deref(), Some("banana"));
//! assert_eq!(queue.pop_head().as_deref(), Some("cherry"));
//! assert!(!queue.remove_head(None));
//! assert_eq!(queue.size(), 0);
//! ```

pub mod handle;
pub mod iter;
pub mod list;
mod node;
mod sort;

#[cfg(test)]
mod tests;
