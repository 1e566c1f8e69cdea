//! Error types for rendering operations.

use rendition_http::HeadError;
use serde_json::Value;

/// Broad classification of a [`RenderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The value's runtime kind does not match what the renderer accepts
	InvalidInputKind,
	/// The serializer rejected the value
	EncodingFailure,
	/// The named template is missing or failed while executing
	TemplateExecutionFailure,
	/// The sink rejected a write
	WriteFailure,
	/// A head or settings value could not be built
	Configuration,
}

/// Errors returned by renderers.
///
/// Renderers never log or swallow errors; every failure is handed back to
/// the caller of `render`.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	#[error("{renderer} renderer expected {expected}, got {found}")]
	InvalidInputKind {
		renderer: &'static str,
		expected: &'static str,
		found: &'static str,
	},

	#[error("JSON encoding error: {0}")]
	Json(#[from] serde_json::Error),

	#[cfg(feature = "xml")]
	#[error("XML encoding error: {0}")]
	Xml(#[from] quick_xml::SeError),

	#[error("Template {name:?} failed: {source}")]
	Template {
		name: String,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	#[error("Write error: {0}")]
	Write(#[from] std::io::Error),

	#[error("Invalid head: {0}")]
	Head(#[from] HeadError),

	#[error("Invalid settings: {0}")]
	Settings(#[from] toml::de::Error),
}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

impl RenderError {
	/// Wraps a template engine failure for the template `name`
	pub fn template(
		name: impl Into<String>,
		source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
	) -> Self {
		RenderError::Template {
			name: name.into(),
			source: source.into(),
		}
	}

	pub(crate) fn invalid_input(renderer: &'static str, expected: &'static str, value: &Value) -> Self {
		RenderError::InvalidInputKind {
			renderer,
			expected,
			found: value_kind(value),
		}
	}

	/// Splits a JSON error raised while encoding straight into a sink into
	/// the sink's I/O failure and a genuine encoding failure.
	pub(crate) fn from_stream(err: serde_json::Error) -> Self {
		if err.is_io() {
			RenderError::Write(err.into())
		} else {
			RenderError::Json(err)
		}
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			RenderError::InvalidInputKind { .. } => ErrorKind::InvalidInputKind,
			RenderError::Json(_) => ErrorKind::EncodingFailure,
			#[cfg(feature = "xml")]
			RenderError::Xml(_) => ErrorKind::EncodingFailure,
			RenderError::Template { .. } => ErrorKind::TemplateExecutionFailure,
			RenderError::Write(_) => ErrorKind::WriteFailure,
			RenderError::Head(_) | RenderError::Settings(_) => ErrorKind::Configuration,
		}
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
