use std::io::Write;

use rendition_http::{Head, Sink};
use serde_json::Value;

use crate::error::{RenderError, RenderResult};
use crate::renderer::Renderer;

/// Raw byte renderer
///
/// Writes the bytes verbatim. A content type already set on the response
/// wins over the configured one, so handlers can serve arbitrary media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
	pub head: Head,
}

impl Default for Data {
	fn default() -> Self {
		Self { head: Head::data() }
	}
}

impl Data {
	/// Creates a data renderer with the given head
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, StatusCode};
	/// use rendition_renderers::Data;
	///
	/// let renderer = Data::new(Head::from_static("image/png", StatusCode::OK));
	/// assert_eq!(renderer.head.content_type, "image/png");
	/// ```
	pub fn new(head: Head) -> Self {
		Self { head }
	}
}

impl Renderer<[u8]> for Data {
	fn render(&self, mut sink: Sink<'_>, value: &[u8]) -> RenderResult<()> {
		sink.write_head_preserving(&self.head);
		sink.write_all(value)?;
		tracing::trace!(renderer = "data", len = value.len(), "Rendered response body");
		Ok(())
	}
}

impl Renderer<Value> for Data {
	fn render(&self, sink: Sink<'_>, value: &Value) -> RenderResult<()> {
		match value {
			Value::String(text) => Renderer::<[u8]>::render(self, sink, text.as_bytes()),
			Value::Array(items) => {
				let bytes = items
					.iter()
					.map(|item| {
						item.as_u64()
							.and_then(|n| u8::try_from(n).ok())
							.ok_or_else(|| RenderError::invalid_input("data", "a byte sequence", value))
					})
					.collect::<RenderResult<Vec<u8>>>()?;
				Renderer::<[u8]>::render(self, sink, &bytes)
			}
			other => Err(RenderError::invalid_input("data", "a byte sequence", other)),
		}
	}
}
