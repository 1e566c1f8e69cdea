//! Reusable byte buffers for renderers that must buffer a whole body.
//!
//! The pool is built once (usually at startup, see
//! [`RenderSettings::buffer_pool`](crate::RenderSettings::buffer_pool)) and
//! shared by reference with every renderer that needs it. A buffer is checked
//! out through [`BufferPool::acquire`] and goes back to the pool when the
//! returned [`PooledBuffer`] is dropped, on success and error paths alike.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use serde::Deserialize;

/// Configuration for buffer pool behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
	/// Maximum number of idle buffers kept for reuse
	pub max_idle: usize,
	/// Capacity of freshly allocated buffers
	pub buffer_capacity: usize,
	/// Buffers that grew beyond this capacity are shrunk before reuse
	pub max_retained_capacity: usize,
}

impl Default for PoolConfig {
	fn default() -> Self {
		Self {
			max_idle: 32,
			buffer_capacity: 512,
			max_retained_capacity: 64 * 1024,
		}
	}
}

/// Thread-safe pool of growable byte buffers.
#[derive(Debug, Default)]
pub struct BufferPool {
	idle: Mutex<Vec<Vec<u8>>>,
	in_use: AtomicUsize,
	config: PoolConfig,
}

impl BufferPool {
	/// Creates a pool with the default configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a pool with a custom configuration
	///
	/// # Examples
	///
	/// ```
	/// use rendition_renderers::{BufferPool, PoolConfig};
	///
	/// let pool = BufferPool::with_config(PoolConfig {
	///     max_idle: 4,
	///     ..PoolConfig::default()
	/// });
	/// assert_eq!(pool.config().max_idle, 4);
	/// ```
	pub fn with_config(config: PoolConfig) -> Self {
		Self {
			idle: Mutex::new(Vec::new()),
			in_use: AtomicUsize::new(0),
			config,
		}
	}

	pub fn config(&self) -> &PoolConfig {
		&self.config
	}

	/// Checks out an empty buffer, reusing an idle one when available
	///
	/// # Examples
	///
	/// ```
	/// use rendition_renderers::BufferPool;
	///
	/// let pool = BufferPool::new();
	/// {
	///     let mut buffer = pool.acquire();
	///     buffer.extend_from_slice(b"scratch");
	///     assert_eq!(pool.in_use(), 1);
	/// }
	/// assert_eq!(pool.in_use(), 0);
	/// assert_eq!(pool.idle(), 1);
	///
	/// // Reused buffers come back empty
	/// assert!(pool.acquire().is_empty());
	/// ```
	pub fn acquire(&self) -> PooledBuffer<'_> {
		let reused = self.idle.lock().pop();
		let buffer = reused.unwrap_or_else(|| Vec::with_capacity(self.config.buffer_capacity));
		self.in_use.fetch_add(1, Ordering::AcqRel);
		PooledBuffer { pool: self, buffer }
	}

	/// Number of idle buffers waiting for reuse
	pub fn idle(&self) -> usize {
		self.idle.lock().len()
	}

	/// Number of buffers currently checked out
	pub fn in_use(&self) -> usize {
		self.in_use.load(Ordering::Acquire)
	}

	fn release(&self, mut buffer: Vec<u8>) {
		self.in_use.fetch_sub(1, Ordering::AcqRel);

		buffer.clear();
		if buffer.capacity() > self.config.max_retained_capacity {
			tracing::trace!(
				capacity = buffer.capacity(),
				target_capacity = self.config.buffer_capacity,
				"Shrinking oversized pool buffer"
			);
			buffer.shrink_to(self.config.buffer_capacity);
		}

		let mut idle = self.idle.lock();
		if idle.len() < self.config.max_idle {
			idle.push(buffer);
		} else {
			tracing::trace!(max_idle = self.config.max_idle, "Pool full, dropping buffer");
		}
	}
}

/// A buffer checked out of a [`BufferPool`], returned to it on drop
#[derive(Debug)]
pub struct PooledBuffer<'a> {
	pool: &'a BufferPool,
	buffer: Vec<u8>,
}

impl Deref for PooledBuffer<'_> {
	type Target = Vec<u8>;

	fn deref(&self) -> &Vec<u8> {
		&self.buffer
	}
}

impl DerefMut for PooledBuffer<'_> {
	fn deref_mut(&mut self) -> &mut Vec<u8> {
		&mut self.buffer
	}
}

impl Drop for PooledBuffer<'_> {
	fn drop(&mut self) {
		self.pool.release(std::mem::take(&mut self.buffer));
	}
}
