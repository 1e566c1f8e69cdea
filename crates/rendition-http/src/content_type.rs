//! Default media types used by the built-in renderers.

/// Raw binary payloads
pub const BINARY: &str = "application/octet-stream";
/// HTML documents
pub const HTML: &str = "text/html";
/// JSON documents
pub const JSON: &str = "application/json";
/// JSONP scripts
pub const JSONP: &str = "application/javascript";
/// Plain text
pub const TEXT: &str = "text/plain";
/// XML documents
pub const XML: &str = "text/xml";

/// Charset appended to textual media types unless disabled
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Qualifies a media type with a charset parameter.
///
/// # Examples
///
/// ```
/// use rendition_http::content_type::{self, with_charset};
///
/// assert_eq!(
///     with_charset(content_type::JSON, "UTF-8"),
///     "application/json; charset=UTF-8"
/// );
/// ```
pub fn with_charset(media_type: &str, charset: &str) -> String {
	format!("{}; charset={}", media_type, charset)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(HTML, "text/html; charset=UTF-8")]
	#[case(TEXT, "text/plain; charset=UTF-8")]
	#[case(XML, "text/xml; charset=UTF-8")]
	fn test_with_default_charset(#[case] media_type: &str, #[case] expected: &str) {
		assert_eq!(with_charset(media_type, DEFAULT_CHARSET), expected);
	}

	#[rstest]
	fn test_with_custom_charset() {
		assert_eq!(
			with_charset(JSONP, "ISO-8859-1"),
			"application/javascript; charset=ISO-8859-1"
		);
	}
}
