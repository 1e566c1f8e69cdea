//! Format renderers for rendition.
//!
//! Every renderer is an immutable configuration value implementing
//! [`Renderer`]. A call encodes the value, applies the renderer's head when
//! the sink is a response, and writes the body:
//!
//! - [`Data`] - raw bytes
//! - [`Html`] - a named template from a shared [`TemplateSet`]
//! - [`Json`] - buffered or streaming JSON, HTML-escaped by default
//! - [`Jsonp`] - JSON wrapped in a callback invocation
//! - [`Text`] - plain strings
//! - [`Xml`] - serde values as XML (feature `xml`)
//!
//! Buffered renderers encode fully before touching the sink, so a failure
//! leaves it untouched. [`RenderSettings`] builds consistently configured
//! renderers from a TOML document.
//!
//! # Examples
//!
//! ```
//! use rendition_http::{Response, StatusCode};
//! use rendition_renderers::{RenderSettings, Renderer};
//! use serde_json::json;
//!
//! let settings = RenderSettings::default();
//! let renderer = settings.json(StatusCode::OK).unwrap();
//!
//! let mut response = Response::new();
//! renderer.render(response.sink(), &json!({"ok": true})).unwrap();
//!
//! assert_eq!(response.body(), br#"{"ok":true}"#);
//! ```

pub mod data;
mod encode;
pub mod error;
pub mod html;
pub mod json;
pub mod jsonp;
pub mod pool;
pub mod renderer;
pub mod settings;
pub mod template;
pub mod text;
#[cfg(feature = "xml")]
pub mod xml;

pub use data::Data;
pub use error::{ErrorKind, RenderError, RenderResult};
pub use html::Html;
pub use json::Json;
pub use jsonp::Jsonp;
pub use pool::{BufferPool, PoolConfig, PooledBuffer};
pub use renderer::Renderer;
pub use settings::RenderSettings;
pub use template::TemplateSet;
pub use text::Text;
#[cfg(feature = "xml")]
pub use xml::Xml;
