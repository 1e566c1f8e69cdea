//! # Rendition
//!
//! Response renderers for Rust HTTP handlers.
//!
//! A handler picks a renderer, configures it once and calls it with a
//! destination and a value. The renderer encodes the value, writes the
//! content type and status when the destination is a response, and then
//! writes the body. Buffered renderers never touch the destination before
//! encoding has succeeded.
//!
//! ## Formats
//!
//! - [`Data`] - raw bytes
//! - [`Html`] - named templates from a shared, pre-compiled template set
//! - [`Json`] - buffered or streaming JSON, HTML-escaped unless told otherwise
//! - [`Jsonp`] - JSON wrapped in a callback invocation
//! - [`Text`] - plain strings
//! - `Xml` - serde values as XML
//!
//! ## Feature Flags
//!
//! - `minimal` - preset naming the always-built core (data, JSON, JSONP and
//!   text); it enables nothing on its own
//! - `templates` - [`tera`](https://docs.rs/tera) as a [`TemplateSet`]
//! - `serialize-xml` - the XML renderer (via `quick-xml`)
//! - `full` (default) - all of the above
//!
//! ## Quick Example
//!
//! ```
//! use rendition::prelude::*;
//! use serde_json::json;
//!
//! let settings = RenderSettings::from_toml_str("indent_json = true").unwrap();
//! let renderer = settings.json(StatusCode::CREATED).unwrap();
//!
//! let mut response = Response::new();
//! renderer.render(response.sink(), &json!({"id": 1})).unwrap();
//!
//! let response = response.into_http();
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(response.body().as_ref(), b"{\n  \"id\": 1\n}\n");
//! ```

pub mod http;
pub mod renderers;

// Re-export HTTP plumbing
pub use rendition_http::{
	Head, HeadError, HeaderMap, HeaderName, HeaderValue, Response, ResponseWriter, Sink, StatusCode,
	content_type,
};

// Re-export renderers
pub use rendition_renderers::{
	BufferPool, Data, ErrorKind, Html, Json, Jsonp, PoolConfig, PooledBuffer, RenderError,
	RenderResult, RenderSettings, Renderer, TemplateSet, Text,
};
#[cfg(feature = "serialize-xml")]
pub use rendition_renderers::Xml;

/// Prelude module for convenient imports
///
/// Import everything commonly needed with:
/// ```rust
/// use rendition::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		Data, Head, Html, Json, Jsonp, RenderError, RenderResult, RenderSettings, Renderer,
		Response, ResponseWriter, Sink, StatusCode, TemplateSet, Text,
	};

	#[cfg(feature = "serialize-xml")]
	pub use crate::Xml;

	pub use serde::Serialize;
}
