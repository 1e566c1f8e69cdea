//! Response head (content type and status) written ahead of a body.

use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue, InvalidHeaderValue};

use crate::sink::ResponseWriter;

/// Errors raised while building a [`Head`] from untrusted parts
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum HeadError {
	#[error("Invalid content type {value:?}: {source}")]
	InvalidContentType {
		value: String,
		#[source]
		source: InvalidHeaderValue,
	},

	#[error("Invalid status code: {0}")]
	InvalidStatus(u16),
}

/// Content type and status code applied to a response before its body.
///
/// A head is fixed when a renderer is configured and is written at most once
/// per render call, strictly before the first body byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
	pub content_type: HeaderValue,
	pub status: StatusCode,
}

impl Head {
	/// Creates a head from already validated parts
	pub fn new(content_type: HeaderValue, status: StatusCode) -> Self {
		Self {
			content_type,
			status,
		}
	}

	/// Creates a head from a static content type
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, StatusCode};
	///
	/// let head = Head::from_static("application/problem+json", StatusCode::BAD_REQUEST);
	/// assert_eq!(head.status, StatusCode::BAD_REQUEST);
	/// ```
	pub const fn from_static(content_type: &'static str, status: StatusCode) -> Self {
		Self {
			content_type: HeaderValue::from_static(content_type),
			status,
		}
	}

	/// Creates a head from a content type string and a numeric status
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::Head;
	///
	/// let head = Head::try_new("text/csv", 201).unwrap();
	/// assert_eq!(head.status.as_u16(), 201);
	///
	/// assert!(Head::try_new("text/csv", 1000).is_err());
	/// assert!(Head::try_new("text/\ncsv", 200).is_err());
	/// ```
	pub fn try_new(content_type: &str, status: u16) -> Result<Self, HeadError> {
		let status = StatusCode::from_u16(status).map_err(|_| HeadError::InvalidStatus(status))?;
		Self::with_content_type(content_type, status)
	}

	/// Creates a head from a content type string and a typed status
	pub fn with_content_type(content_type: &str, status: StatusCode) -> Result<Self, HeadError> {
		let value =
			HeaderValue::from_str(content_type).map_err(|source| HeadError::InvalidContentType {
				value: content_type.to_string(),
				source,
			})?;
		Ok(Self::new(value, status))
	}

	/// `200 OK` with `application/octet-stream`
	pub const fn data() -> Self {
		Self::from_static("application/octet-stream", StatusCode::OK)
	}

	/// `200 OK` with `text/html; charset=UTF-8`
	pub const fn html() -> Self {
		Self::from_static("text/html; charset=UTF-8", StatusCode::OK)
	}

	/// `200 OK` with `application/json; charset=UTF-8`
	pub const fn json() -> Self {
		Self::from_static("application/json; charset=UTF-8", StatusCode::OK)
	}

	/// `200 OK` with `application/javascript; charset=UTF-8`
	pub const fn jsonp() -> Self {
		Self::from_static("application/javascript; charset=UTF-8", StatusCode::OK)
	}

	/// `200 OK` with `text/plain; charset=UTF-8`
	pub const fn text() -> Self {
		Self::from_static("text/plain; charset=UTF-8", StatusCode::OK)
	}

	/// `200 OK` with `text/xml; charset=UTF-8`
	pub const fn xml() -> Self {
		Self::from_static("text/xml; charset=UTF-8", StatusCode::OK)
	}

	/// Replaces the status, keeping the content type
	///
	/// # Examples
	///
	/// ```
	/// use rendition_http::{Head, StatusCode};
	///
	/// let head = Head::json().with_status(StatusCode::CREATED);
	/// assert_eq!(head.status, StatusCode::CREATED);
	/// assert_eq!(head.content_type, "application/json; charset=UTF-8");
	/// ```
	pub fn with_status(mut self, status: StatusCode) -> Self {
		self.status = status;
		self
	}

	/// Sets the content type, overwriting any earlier value, then writes the status.
	pub fn write(&self, writer: &mut dyn ResponseWriter) {
		writer.set_header(CONTENT_TYPE, self.content_type.clone());
		writer.write_status(self.status);
	}

	/// Like [`Head::write`], but a non-empty content type already present on
	/// the writer wins over ours.
	pub fn write_preserving(&self, writer: &mut dyn ResponseWriter) {
		let preset = writer
			.header(&CONTENT_TYPE)
			.is_some_and(|value| !value.is_empty());
		if !preset {
			writer.set_header(CONTENT_TYPE, self.content_type.clone());
		}
		writer.write_status(self.status);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Response;
	use rstest::rstest;

	#[rstest]
	#[case(Head::data(), "application/octet-stream")]
	#[case(Head::html(), "text/html; charset=UTF-8")]
	#[case(Head::json(), "application/json; charset=UTF-8")]
	#[case(Head::jsonp(), "application/javascript; charset=UTF-8")]
	#[case(Head::text(), "text/plain; charset=UTF-8")]
	#[case(Head::xml(), "text/xml; charset=UTF-8")]
	fn test_default_heads(#[case] head: Head, #[case] expected: &str) {
		assert_eq!(head.content_type, expected);
		assert_eq!(head.status, StatusCode::OK);
	}

	#[rstest]
	fn test_write_overrides_existing_content_type() {
		let mut response =
			Response::new().with_header(CONTENT_TYPE, HeaderValue::from_static("text/custom"));

		Head::json().write(&mut response);

		assert_eq!(response.headers()[CONTENT_TYPE], "application/json; charset=UTF-8");
		assert_eq!(response.status(), StatusCode::OK);
		assert!(response.is_committed());
	}

	#[rstest]
	fn test_write_preserving_keeps_existing_content_type() {
		let mut response =
			Response::new().with_header(CONTENT_TYPE, HeaderValue::from_static("text/custom"));

		Head::text()
			.with_status(StatusCode::ACCEPTED)
			.write_preserving(&mut response);

		assert_eq!(response.headers()[CONTENT_TYPE], "text/custom");
		assert_eq!(response.status(), StatusCode::ACCEPTED);
	}

	#[rstest]
	fn test_write_preserving_treats_empty_value_as_absent() {
		let mut response =
			Response::new().with_header(CONTENT_TYPE, HeaderValue::from_static(""));

		Head::data().write_preserving(&mut response);

		assert_eq!(response.headers()[CONTENT_TYPE], "application/octet-stream");
	}

	#[rstest]
	fn test_try_new_rejects_invalid_parts() {
		assert!(matches!(
			Head::try_new("text/plain", 99),
			Err(HeadError::InvalidStatus(99))
		));
		assert!(matches!(
			Head::try_new("text/\u{7f}plain", 200),
			Err(HeadError::InvalidContentType { .. })
		));
	}
}
