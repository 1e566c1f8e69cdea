//! JSON encoding shared by the JSON and JSONP renderers.
//!
//! By default `<`, `>` and `&` inside strings are written as `\u003c`,
//! `\u003e` and `\u0026` (U+2028 and U+2029 are escaped too), so a JSON body
//! that ends up inside an HTML `<script>` element cannot close it or open
//! an entity. Turning HTML escaping off writes `<`, `>` and `&` literally;
//! the two line separators are escaped in every mode.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

/// Encodes `value` into `writer`.
///
/// `indent` selects two-space pretty printing; `escape_html` controls the
/// `<`, `>` and `&` escapes described in the module docs.
pub(crate) fn to_writer<W, T>(
	writer: W,
	value: &T,
	indent: bool,
	escape_html: bool,
) -> serde_json::Result<()>
where
	W: Write,
	T: Serialize + ?Sized,
{
	if indent {
		let formatter = PrettyFormatter::with_indent(b"  ");
		serialize(writer, value, HtmlSafe::new(formatter, escape_html))
	} else {
		serialize(writer, value, HtmlSafe::new(CompactFormatter, escape_html))
	}
}

fn serialize<W, T, F>(writer: W, value: &T, formatter: F) -> serde_json::Result<()>
where
	W: Write,
	T: Serialize + ?Sized,
	F: Formatter,
{
	let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
	value.serialize(&mut serializer)
}

/// Formatter adapter that applies the HTML-safe string escapes
struct HtmlSafe<F> {
	inner: F,
	/// Escape `<`, `>` and `&` as well as the line separators
	html: bool,
}

impl<F> HtmlSafe<F> {
	fn new(inner: F, html: bool) -> Self {
		Self { inner, html }
	}
}

impl<F: Formatter> Formatter for HtmlSafe<F> {
	fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		let mut start = 0;
		for (index, ch) in fragment.char_indices() {
			let escaped: &[u8] = match ch {
				'<' | '>' | '&' if !self.html => continue,
				'<' => b"\\u003c",
				'>' => b"\\u003e",
				'&' => b"\\u0026",
				'\u{2028}' => b"\\u2028",
				'\u{2029}' => b"\\u2029",
				_ => continue,
			};
			if start < index {
				self.inner.write_string_fragment(writer, &fragment[start..index])?;
			}
			writer.write_all(escaped)?;
			start = index + ch.len_utf8();
		}
		if start < fragment.len() {
			self.inner.write_string_fragment(writer, &fragment[start..])?;
		}
		Ok(())
	}

	// Layout hooks delegate so the wrapped formatter keeps its indentation.

	fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.begin_array(writer)
	}

	fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.end_array(writer)
	}

	fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.begin_array_value(writer, first)
	}

	fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.end_array_value(writer)
	}

	fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.begin_object(writer)
	}

	fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.end_object(writer)
	}

	fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.begin_object_key(writer, first)
	}

	fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.end_object_key(writer)
	}

	fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.begin_object_value(writer)
	}

	fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
	where
		W: ?Sized + Write,
	{
		self.inner.end_object_value(writer)
	}
}
