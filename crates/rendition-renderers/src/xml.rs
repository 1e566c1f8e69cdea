//! XML renderer backed by `quick-xml`'s serde serializer.

use std::io::Write;

use bytes::Bytes;
use quick_xml::se::Serializer;
use rendition_http::{Head, Sink};
use serde::Serialize;

use crate::error::RenderResult;
use crate::renderer::Renderer;

/// XML renderer
///
/// Structs are written under their type name. Maps (including JSON objects)
/// have no natural element name and need `root` to be set. The same goes
/// for bare primitives such as a `String` or a number: without `root` they
/// fail to encode instead of getting a type-named element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xml {
	pub head: Head,
	/// Indent nested elements by two spaces and end with a newline
	pub indent: bool,
	/// Bytes written ahead of the document, e.g. an XML declaration
	pub prefix: Bytes,
	/// Element name wrapping the value
	pub root: Option<String>,
}

impl Default for Xml {
	fn default() -> Self {
		Self::new(Head::xml())
	}
}

impl Xml {
	/// Creates a compact XML renderer without prefix or root tag
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, Sink};
	/// use rendition_renderers::{Renderer, Xml};
	/// use serde::Serialize;
	///
	/// #[derive(Serialize)]
	/// struct Ping {
	///     seq: u32,
	/// }
	///
	/// let mut buffer = Vec::new();
	/// Xml::new(Head::xml())
	///     .render(Sink::body(&mut buffer), &Ping { seq: 3 })
	///     .unwrap();
	/// assert_eq!(buffer, b"<Ping><seq>3</seq></Ping>");
	/// ```
	pub fn new(head: Head) -> Self {
		Self {
			head,
			indent: false,
			prefix: Bytes::new(),
			root: None,
		}
	}

	pub fn indent(mut self, indent: bool) -> Self {
		self.indent = indent;
		self
	}

	pub fn prefix(mut self, prefix: impl Into<Bytes>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Sets the element name wrapping the value
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::Sink;
	/// use rendition_renderers::{Renderer, Xml};
	/// use std::collections::BTreeMap;
	///
	/// let value = BTreeMap::from([("id", 1)]);
	///
	/// let mut buffer = Vec::new();
	/// Xml::default()
	///     .root("item")
	///     .render(Sink::body(&mut buffer), &value)
	///     .unwrap();
	/// assert_eq!(buffer, b"<item><id>1</id></item>");
	/// ```
	pub fn root(mut self, root: impl Into<String>) -> Self {
		self.root = Some(root.into());
		self
	}

	fn encode<T>(&self, value: &T) -> RenderResult<String>
	where
		T: Serialize + ?Sized,
	{
		let mut out = String::new();
		let mut serializer = match self.root.as_deref() {
			Some(root) => Serializer::with_root(&mut out, Some(root))?,
			None => Serializer::new(&mut out),
		};
		if self.indent {
			serializer.indent(' ', 2);
		}
		value.serialize(serializer)?;

		if self.indent {
			out.push('\n');
		}
		Ok(out)
	}
}

impl<T> Renderer<T> for Xml
where
	T: Serialize + ?Sized,
{
	fn render(&self, mut sink: Sink<'_>, value: &T) -> RenderResult<()> {
		let body = self.encode(value)?;

		sink.write_head(&self.head);
		if !self.prefix.is_empty() {
			sink.write_all(&self.prefix)?;
		}
		sink.write_all(body.as_bytes())?;

		tracing::trace!(renderer = "xml", len = body.len(), "Rendered response body");
		Ok(())
	}
}
