//! JSON renderer with buffered and streaming modes.

use std::io::Write;

use bytes::Bytes;
use rendition_http::{Head, Sink};
use serde::Serialize;

use crate::encode;
use crate::error::{RenderError, RenderResult};
use crate::renderer::Renderer;

/// JSON renderer
///
/// In the default buffered mode the value is fully encoded before anything
/// is written, so an encoding error leaves the sink untouched. Streaming
/// mode writes the head and prefix first and encodes straight into the sink;
/// an error there may leave a partial response behind.
///
/// Strings are HTML-escaped unless `unescape_html` is set, which lets `<`,
/// `>` and `&` through literally. U+2028 and U+2029 are always escaped.
/// Streaming mode always escapes and never indents.
///
/// Streaming hands the sink many small writes, roughly one per token. Wrap
/// an unbuffered transport writer in a [`std::io::BufWriter`] before
/// streaming into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json {
	pub head: Head,
	/// Pretty print with two-space indentation and a trailing newline
	pub indent: bool,
	/// Emit `<`, `>` and `&` literally; line separators stay escaped
	pub unescape_html: bool,
	/// Bytes written ahead of the payload, e.g. `)]}',\n`
	pub prefix: Bytes,
	/// Encode directly into the sink
	pub streaming: bool,
}

impl Default for Json {
	fn default() -> Self {
		Self::new(Head::json())
	}
}

impl Json {
	/// Creates a buffered, compact, escaping JSON renderer
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, Response, Sink, StatusCode};
	/// use rendition_renderers::{Json, Renderer};
	/// use serde_json::json;
	///
	/// let renderer = Json::new(Head::json().with_status(StatusCode::CREATED)).indent(true);
	///
	/// let mut response = Response::new();
	/// renderer.render(Sink::response(&mut response), &json!({"id": 7})).unwrap();
	///
	/// assert_eq!(response.status(), StatusCode::CREATED);
	/// assert_eq!(response.body(), b"{\n  \"id\": 7\n}\n");
	/// ```
	pub fn new(head: Head) -> Self {
		Self {
			head,
			indent: false,
			unescape_html: false,
			prefix: Bytes::new(),
			streaming: false,
		}
	}

	pub fn indent(mut self, indent: bool) -> Self {
		self.indent = indent;
		self
	}

	pub fn unescape_html(mut self, unescape_html: bool) -> Self {
		self.unescape_html = unescape_html;
		self
	}

	/// Sets the bytes written before the payload
	///
	/// # Examples
	///
	/// ```
	/// use rendition_renderers::{Json, Renderer};
	/// use rendition_http::Sink;
	///
	/// let renderer = Json::default().prefix(")]}',\n");
	///
	/// let mut buffer = Vec::new();
	/// renderer.render(Sink::body(&mut buffer), &[1, 2]).unwrap();
	/// assert_eq!(buffer, b")]}',\n[1,2]");
	/// ```
	pub fn prefix(mut self, prefix: impl Into<Bytes>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn streaming(mut self, streaming: bool) -> Self {
		self.streaming = streaming;
		self
	}

	fn render_buffered<T>(&self, mut sink: Sink<'_>, value: &T) -> RenderResult<()>
	where
		T: Serialize + ?Sized,
	{
		let mut body = Vec::new();
		encode::to_writer(&mut body, value, self.indent, !self.unescape_html)?;
		if self.indent {
			body.push(b'\n');
		}

		sink.write_head(&self.head);
		if !self.prefix.is_empty() {
			sink.write_all(&self.prefix)?;
		}
		sink.write_all(&body)?;

		tracing::trace!(renderer = "json", len = body.len(), "Rendered response body");
		Ok(())
	}

	fn render_streaming<T>(&self, mut sink: Sink<'_>, value: &T) -> RenderResult<()>
	where
		T: Serialize + ?Sized,
	{
		if self.indent || self.unescape_html {
			tracing::debug!(
				indent = self.indent,
				unescape_html = self.unescape_html,
				"Streaming JSON ignores indent and unescape_html"
			);
		}

		sink.write_head(&self.head);
		if !self.prefix.is_empty() {
			sink.write_all(&self.prefix)?;
		}
		encode::to_writer(&mut sink, value, false, true).map_err(RenderError::from_stream)?;
		sink.write_all(b"\n")?;

		tracing::trace!(renderer = "json", streaming = true, "Rendered response body");
		Ok(())
	}
}

impl<T> Renderer<T> for Json
where
	T: Serialize + ?Sized,
{
	fn render(&self, sink: Sink<'_>, value: &T) -> RenderResult<()> {
		if self.streaming {
			self.render_streaming(sink, value)
		} else {
			self.render_buffered(sink, value)
		}
	}
}
