use std::io::{self, Write};

use bytes::{Bytes, BytesMut};
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};

use crate::sink::{ResponseWriter, Sink};

/// Buffered response that enforces the head-before-body ordering.
///
/// Headers may be changed freely until the head is committed, either by an
/// explicit [`ResponseWriter::write_status`] or implicitly (as `200 OK`) by
/// the first body write. Later header or status changes are ignored and
/// reported through `tracing`.
#[derive(Debug, Default)]
pub struct Response {
	status: StatusCode,
	headers: HeaderMap,
	body: BytesMut,
	committed: bool,
}

impl Response {
	/// Create an empty, uncommitted response
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Response, StatusCode};
	///
	/// let response = Response::new();
	/// assert_eq!(response.status(), StatusCode::OK);
	/// assert!(response.body().is_empty());
	/// assert!(!response.is_committed());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Presets a header, as an upstream middleware would
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{HeaderValue, Response};
	/// use http::header::CONTENT_TYPE;
	///
	/// let response = Response::new()
	///     .with_header(CONTENT_TYPE, HeaderValue::from_static("image/png"));
	/// assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
	/// ```
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.set_header(name, value);
		self
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	pub fn body(&self) -> &[u8] {
		&self.body
	}

	/// Whether the head has been written
	pub fn is_committed(&self) -> bool {
		self.committed
	}

	/// Borrow this response as a header-capable render destination
	pub fn sink(&mut self) -> Sink<'_> {
		Sink::response(self)
	}

	/// Converts into an [`http::Response`] for the transport layer
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, Response, StatusCode};
	/// use std::io::Write;
	///
	/// let mut response = Response::new();
	/// let mut sink = response.sink();
	/// sink.write_head(&Head::text().with_status(StatusCode::CREATED));
	/// sink.write_all(b"created").unwrap();
	///
	/// let response = response.into_http();
	/// assert_eq!(response.status(), StatusCode::CREATED);
	/// assert_eq!(response.body().as_ref(), b"created");
	/// ```
	pub fn into_http(self) -> http::Response<Bytes> {
		let mut response = http::Response::new(self.body.freeze());
		*response.status_mut() = self.status;
		*response.headers_mut() = self.headers;
		response
	}
}

impl ResponseWriter for Response {
	fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
		self.headers.get(name)
	}

	fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
		if self.committed {
			tracing::warn!(header = %name, "Ignoring header change after the response head was written");
			return;
		}
		self.headers.insert(name, value);
	}

	fn write_status(&mut self, status: StatusCode) {
		if self.committed {
			tracing::warn!(
				current = self.status.as_u16(),
				requested = status.as_u16(),
				"Ignoring superfluous status write"
			);
			return;
		}
		self.status = status;
		self.committed = true;
	}
}

impl Write for Response {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.committed = true;
		self.body.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> From<&'a mut Response> for Sink<'a> {
	fn from(response: &'a mut Response) -> Self {
		Sink::Response(response)
	}
}
