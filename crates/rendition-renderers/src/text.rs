use std::io::Write;

use rendition_http::{Head, Sink};
use serde_json::Value;

use crate::error::{RenderError, RenderResult};
use crate::renderer::Renderer;

/// Plain text renderer
///
/// Like [`Data`](crate::Data), it leaves a content type set upstream alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	pub head: Head,
}

impl Default for Text {
	fn default() -> Self {
		Self { head: Head::text() }
	}
}

impl Text {
	/// Creates a text renderer with the given head
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, StatusCode};
	/// use rendition_renderers::Text;
	///
	/// let renderer = Text::new(Head::text().with_status(StatusCode::NOT_FOUND));
	/// assert_eq!(renderer.head.status, StatusCode::NOT_FOUND);
	/// ```
	pub fn new(head: Head) -> Self {
		Self { head }
	}
}

impl Renderer<str> for Text {
	fn render(&self, mut sink: Sink<'_>, value: &str) -> RenderResult<()> {
		sink.write_head_preserving(&self.head);
		sink.write_all(value.as_bytes())?;
		tracing::trace!(renderer = "text", len = value.len(), "Rendered response body");
		Ok(())
	}
}

impl Renderer<Value> for Text {
	fn render(&self, sink: Sink<'_>, value: &Value) -> RenderResult<()> {
		match value {
			Value::String(text) => Renderer::<str>::render(self, sink, text),
			other => Err(RenderError::invalid_input("text", "a string", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::header::CONTENT_TYPE;
	use rendition_http::{HeaderValue, Response, StatusCode};
	use rstest::rstest;
	use serde_json::json;

	use crate::error::ErrorKind;

	#[rstest]
	fn test_writes_text_with_default_head() {
		let mut response = Response::new();
		Text::default()
			.render(Sink::response(&mut response), "hello, world")
			.unwrap();

		assert_eq!(response.body(), b"hello, world");
		assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=UTF-8");
	}

	#[rstest]
	fn test_keeps_preset_content_type() {
		let mut response =
			Response::new().with_header(CONTENT_TYPE, HeaderValue::from_static("text/custom"));

		Text::new(Head::text().with_status(StatusCode::IM_A_TEAPOT))
			.render(Sink::response(&mut response), "short and stout")
			.unwrap();

		assert_eq!(response.headers()[CONTENT_TYPE], "text/custom");
		assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
	}

	#[rstest]
	fn test_dynamic_string() {
		let mut buffer = Vec::new();
		Text::default()
			.render(Sink::body(&mut buffer), &json!("plain"))
			.unwrap();
		assert_eq!(buffer, b"plain");
	}

	#[rstest]
	#[case(json!(1))]
	#[case(json!(["a"]))]
	#[case(json!({"text": "a"}))]
	fn test_dynamic_rejects_non_strings(#[case] value: Value) {
		let mut response = Response::new();
		let error = Text::default()
			.render(Sink::response(&mut response), &value)
			.unwrap_err();

		assert_eq!(error.kind(), ErrorKind::InvalidInputKind);
		assert!(!response.is_committed());
		assert!(response.body().is_empty());
	}
}
