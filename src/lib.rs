//! # Ring Buffer
//!
//! A fixed-capacity circular buffer with insertion and removal at both ends.
//!
//! [`RingBuffer`] never grows.  When it is full, inserting at one end evicts the element
//! at the other end, so the buffer always holds the most recent `capacity` insertions.
//! Overflow is the defined behaviour, not an error.
//!
//! ## Key Features
//!
//! * **Both ends:** `push`/`pop` work the tail, `unshift`/`shift` work the front.
//!   Each end behaves as a stack, and the two together behave as a queue.
//! * **Overwrite on overflow:** `push_back`/`push_front` hand back the evicted element;
//!   the variadic `push`/`unshift` drop it.
//! * **Ordered traversal:** `map`/`map_rev` rewrite elements in place and `each`/`each_rev`
//!   visit them, front-to-back or back-to-front.  All four return the buffer for chaining.
//! * **Sequence conversion:** `to_vec`/`into_vec` and `from_vec`/`TryFrom<Vec<T>>`.
//!   Converting from a `Vec` always yields a *full* buffer sized to the `Vec`.
//!
//! ## Capacity Constraints
//!
//! Capacity must be at least 1.  [`RingBuffer::new`] panics on zero;
//! [`RingBuffer::try_new`] and [`RingBuffer::from_vec`] return
//! [`RingBufferError::ZeroCapacity`].
//!
//! ## Cargo Features
//!
//! * `log`: emit `trace`/`debug` records through the `log` facade (target `ring_buffer`)
//!   on construction and on eviction.  Off by default.
//!
//! ## Examples
//!
//! ### Stack at the tail
//!
//! ```rust
//! use ring_buffer::RingBuffer;
//!
//! // Capacity 3: the fourth push evicts "1".
//! let mut ring = RingBuffer::new(3);
//! ring.push(["1", "2", "3", "4"]);
//!
//! assert!(ring.is_full());
//! assert_eq!(ring.pop(), "4");
//! assert_eq!(ring.pop(), "3");
//! assert_eq!(ring.pop(), "2");
//! assert!(ring.is_empty());
//! ```
//!
//! ### Queue through both ends
//!
//! ```rust
//! use ring_buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::new(3);
//! ring.push([1, 2, 3, 4]);
//!
//! assert_eq!(ring.shift(), 2);
//! assert_eq!(ring.pop_front(), Some(3));
//! assert_eq!(ring.len(), 1);
//! ```
//!
//! ### Traversal and conversion
//!
//! ```rust
//! use ring_buffer::RingBuffer;
//!
//! let mut ring = RingBuffer::new(4);
//! ring.push([1, 2, 3]).map(|x| x * 10);
//!
//! let mut seen = Vec::new();
//! ring.each_rev(|x| seen.push(*x));
//! assert_eq!(seen, vec![30, 20, 10]);
//!
//! // A partially filled buffer comes back full and smaller.
//! let compact = RingBuffer::from_vec(ring.to_vec()).unwrap();
//! assert_eq!(compact.capacity(), 3);
//! assert!(compact.is_full());
//! ```

// --- Module Declarations ---

#[macro_use]
mod devlog;

pub mod buffer;
pub mod error;

// --- Re-exports ---

pub use buffer::{IntoIter, Iter, IterMut, RingBuffer};
pub use error::RingBufferError;
