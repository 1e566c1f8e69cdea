use rendition_http::Sink;

use crate::error::RenderResult;

/// Uniform render contract shared by every format.
///
/// A renderer is a configured, immutable value: its head and format options
/// are fixed at construction and only the destination and the value vary
/// per call. `T` is the kind of value the renderer accepts, e.g. `[u8]` for
/// [`Data`](crate::Data), `str` for [`Text`](crate::Text), or any
/// `Serialize` type for the encoders.
///
/// # Examples
///
/// ```
/// use rendition_http::{Response, Sink};
/// use rendition_renderers::{Renderer, Text};
///
/// let mut response = Response::new();
/// Text::default().render(Sink::response(&mut response), "hello").unwrap();
/// assert_eq!(response.body(), b"hello");
/// ```
pub trait Renderer<T: ?Sized> {
	/// Encodes `value` and writes it, with headers when `sink` is a response
	fn render(&self, sink: Sink<'_>, value: &T) -> RenderResult<()>;
}
