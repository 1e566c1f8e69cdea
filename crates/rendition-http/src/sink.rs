//! Render destinations.
//!
//! Renderers never probe a writer for header support at runtime. The caller
//! says up front which kind of destination it hands over:
//!
//! - [`Sink::Body`] is any [`Write`]. Only body bytes are produced, which is
//!   what nested rendering or rendering into a buffer for inspection wants.
//! - [`Sink::Response`] is a [`ResponseWriter`]. The renderer's [`Head`] is
//!   applied before the first body byte.

use std::fmt;
use std::io::{self, Write};

use http::header::{HeaderName, HeaderValue};
use http::StatusCode;

use crate::head::Head;

/// A writable response that also exposes its header map and status line.
///
/// Implementations must ignore header and status changes once the head has
/// been committed, which happens on the first [`ResponseWriter::write_status`]
/// call or the first body write, whichever comes first.
pub trait ResponseWriter: Write {
	/// Returns the current value of a header, if set
	fn header(&self, name: &HeaderName) -> Option<&HeaderValue>;

	/// Sets a header, replacing any earlier value
	fn set_header(&mut self, name: HeaderName, value: HeaderValue);

	/// Writes the status line and commits the head
	fn write_status(&mut self, status: StatusCode);
}

/// Destination handed to a renderer for a single render call
pub enum Sink<'a> {
	/// Body bytes only; heads are skipped
	Body(&'a mut dyn Write),
	/// Header-capable response; heads are applied
	Response(&'a mut dyn ResponseWriter),
}

impl<'a> Sink<'a> {
	/// Wraps a plain writer
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, Sink};
	/// use std::io::Write;
	///
	/// let mut buffer = Vec::new();
	/// let mut sink = Sink::body(&mut buffer);
	/// sink.write_head(&Head::json());
	/// sink.write_all(b"{}").unwrap();
	///
	/// assert_eq!(buffer, b"{}");
	/// ```
	pub fn body<W: Write>(writer: &'a mut W) -> Self {
		Sink::Body(writer)
	}

	/// Wraps a header-capable writer
	pub fn response<W: ResponseWriter>(writer: &'a mut W) -> Self {
		Sink::Response(writer)
	}

	/// Whether heads written to this sink reach a response
	pub fn is_response(&self) -> bool {
		matches!(self, Sink::Response(_))
	}

	/// Applies `head` when the sink is a response; no-op otherwise.
	pub fn write_head(&mut self, head: &Head) {
		if let Sink::Response(writer) = self {
			head.write(&mut **writer);
		}
	}

	/// Applies `head` without replacing a content type set upstream.
	pub fn write_head_preserving(&mut self, head: &Head) {
		if let Sink::Response(writer) = self {
			head.write_preserving(&mut **writer);
		}
	}
}

impl Write for Sink<'_> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self {
			Sink::Body(writer) => writer.write(buf),
			Sink::Response(writer) => writer.write(buf),
		}
	}

	fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
		match self {
			Sink::Body(writer) => writer.write_all(buf),
			Sink::Response(writer) => writer.write_all(buf),
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match self {
			Sink::Body(writer) => writer.flush(),
			Sink::Response(writer) => writer.flush(),
		}
	}
}

impl fmt::Debug for Sink<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Sink::Body(_) => f.write_str("Sink::Body"),
			Sink::Response(_) => f.write_str("Sink::Response"),
		}
	}
}

impl<'a> From<&'a mut Vec<u8>> for Sink<'a> {
	fn from(buffer: &'a mut Vec<u8>) -> Self {
		Sink::Body(buffer)
	}
}
