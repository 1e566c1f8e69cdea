use std::io::Write;

use rendition_http::{Head, Sink};
use serde::Serialize;

use crate::encode;
use crate::error::RenderResult;
use crate::renderer::Renderer;

/// JSONP renderer
///
/// Wraps the HTML-escaped JSON encoding of the value in a call to
/// `callback`: `callback(<json>);`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jsonp {
	pub head: Head,
	/// Pretty print the payload and end the body with a newline
	pub indent: bool,
	pub callback: String,
}

impl Jsonp {
	/// Creates a JSONP renderer calling `callback`
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, Sink};
	/// use rendition_renderers::{Jsonp, Renderer};
	/// use serde_json::json;
	///
	/// let renderer = Jsonp::new(Head::jsonp(), "cb");
	///
	/// let mut buffer = Vec::new();
	/// renderer.render(Sink::body(&mut buffer), &json!({"a": 1})).unwrap();
	/// assert_eq!(buffer, b"cb({\"a\":1});");
	/// ```
	pub fn new(head: Head, callback: impl Into<String>) -> Self {
		Self {
			head,
			indent: false,
			callback: callback.into(),
		}
	}

	pub fn indent(mut self, indent: bool) -> Self {
		self.indent = indent;
		self
	}
}

impl<T> Renderer<T> for Jsonp
where
	T: Serialize + ?Sized,
{
	fn render(&self, mut sink: Sink<'_>, value: &T) -> RenderResult<()> {
		let mut body = Vec::with_capacity(self.callback.len() + 16);
		body.extend_from_slice(self.callback.as_bytes());
		body.push(b'(');
		encode::to_writer(&mut body, value, self.indent, true)?;
		body.extend_from_slice(b");");
		if self.indent {
			body.push(b'\n');
		}

		sink.write_head(&self.head);
		sink.write_all(&body)?;

		tracing::trace!(
			renderer = "jsonp",
			callback = %self.callback,
			len = body.len(),
			"Rendered response body"
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::header::CONTENT_TYPE;
	use rendition_http::{Response, StatusCode};
	use rstest::rstest;
	use serde_json::json;

	use crate::error::ErrorKind;

	#[rstest]
	fn test_wraps_payload_in_callback() {
		let mut response = Response::new();
		Jsonp::new(Head::jsonp(), "cb")
			.render(Sink::response(&mut response), &json!({"a": 1}))
			.unwrap();

		assert_eq!(response.body(), b"cb({\"a\":1});");
		assert_eq!(
			response.headers()[CONTENT_TYPE],
			"application/javascript; charset=UTF-8"
		);
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[rstest]
	fn test_indented_payload_ends_with_newline() {
		let mut buffer = Vec::new();
		Jsonp::new(Head::jsonp(), "handle")
			.indent(true)
			.render(Sink::body(&mut buffer), &json!({"a": 1}))
			.unwrap();

		assert_eq!(buffer, b"handle({\n  \"a\": 1\n});\n");
	}

	#[rstest]
	fn test_payload_is_html_escaped() {
		let mut buffer = Vec::new();
		Jsonp::new(Head::jsonp(), "cb")
			.render(Sink::body(&mut buffer), &json!("</script>"))
			.unwrap();

		assert_eq!(buffer, b"cb(\"\\u003c/script\\u003e\");");
	}

	struct Unserializable;

	impl Serialize for Unserializable {
		fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
			Err(serde::ser::Error::custom("nope"))
		}
	}

	#[rstest]
	fn test_failure_writes_nothing() {
		let mut response = Response::new();
		let error = Jsonp::new(Head::jsonp(), "cb")
			.render(Sink::response(&mut response), &Unserializable)
			.unwrap_err();

		assert_eq!(error.kind(), ErrorKind::EncodingFailure);
		assert!(!response.is_committed());
		assert!(response.body().is_empty());
	}
}
