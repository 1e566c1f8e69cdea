//! Shared render options loaded from configuration.
//!
//! Applications usually keep one [`RenderSettings`] for the whole process and
//! build every renderer configuration through its factory methods, so the
//! charset and formatting choices stay consistent across handlers.
//!
//! ```toml
//! charset = "UTF-8"
//! indent_json = true
//! prefix_json = "while(1);"
//! xml_root = "response"
//!
//! [pool]
//! max_idle = 64
//! ```

use std::sync::Arc;

use http::StatusCode;
use rendition_http::Head;
use rendition_http::content_type::{self, with_charset};
use serde::Deserialize;

use crate::data::Data;
use crate::error::RenderResult;
use crate::html::Html;
use crate::json::Json;
use crate::jsonp::Jsonp;
use crate::pool::{BufferPool, PoolConfig};
use crate::template::TemplateSet;
use crate::text::Text;
#[cfg(feature = "xml")]
use crate::xml::Xml;

/// Process-wide render options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Charset appended to textual content types
	pub charset: String,
	/// Leave the charset parameter off every content type
	pub disable_charset: bool,
	pub indent_json: bool,
	pub indent_xml: bool,
	/// Written before every JSON body
	pub prefix_json: String,
	/// Written before every XML body
	pub prefix_xml: String,
	/// Emit `<`, `>` and `&` literally in JSON strings
	pub unescape_html: bool,
	pub streaming_json: bool,
	pub html_content_type: String,
	pub xml_content_type: String,
	/// Root element for XML values without a natural element name
	pub xml_root: Option<String>,
	pub pool: PoolConfig,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			charset: content_type::DEFAULT_CHARSET.to_string(),
			disable_charset: false,
			indent_json: false,
			indent_xml: false,
			prefix_json: String::new(),
			prefix_xml: String::new(),
			unescape_html: false,
			streaming_json: false,
			html_content_type: content_type::HTML.to_string(),
			xml_content_type: content_type::XML.to_string(),
			xml_root: None,
			pool: PoolConfig::default(),
		}
	}
}

impl RenderSettings {
	/// Parses settings from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use rendition_renderers::RenderSettings;
	///
	/// let settings = RenderSettings::from_toml_str("indent_json = true").unwrap();
	/// assert!(settings.indent_json);
	/// assert_eq!(settings.charset, "UTF-8");
	/// ```
	pub fn from_toml_str(source: &str) -> RenderResult<Self> {
		let settings = toml::from_str(source)?;
		Ok(settings)
	}

	/// Qualifies `media_type` with the configured charset unless disabled
	///
	/// # Examples
	///
	/// ```
	/// use rendition_renderers::RenderSettings;
	///
	/// let mut settings = RenderSettings::default();
	/// assert_eq!(settings.content_type("text/csv"), "text/csv; charset=UTF-8");
	///
	/// settings.disable_charset = true;
	/// assert_eq!(settings.content_type("text/csv"), "text/csv");
	/// ```
	pub fn content_type(&self, media_type: &str) -> String {
		if self.disable_charset || self.charset.is_empty() {
			media_type.to_string()
		} else {
			with_charset(media_type, &self.charset)
		}
	}

	fn head(&self, media_type: &str, status: StatusCode) -> RenderResult<Head> {
		Ok(Head::with_content_type(&self.content_type(media_type), status)?)
	}

	/// Builds a pool sized by the `pool` section
	pub fn buffer_pool(&self) -> BufferPool {
		BufferPool::with_config(self.pool.clone())
	}

	/// Raw bytes as `application/octet-stream`, never charset-qualified
	pub fn data(&self, status: StatusCode) -> RenderResult<Data> {
		Ok(Data::new(Head::with_content_type(content_type::BINARY, status)?))
	}

	pub fn html<T: TemplateSet>(
		&self,
		status: StatusCode,
		name: impl Into<String>,
		templates: Arc<T>,
		pool: Arc<BufferPool>,
	) -> RenderResult<Html<T>> {
		let head = self.head(&self.html_content_type, status)?;
		Ok(Html::new(head, name, templates, pool))
	}

	/// # Examples
	///
	/// ```
	/// use rendition_http::StatusCode;
	/// use rendition_renderers::RenderSettings;
	///
	/// let settings = RenderSettings::from_toml_str(r#"
	///     indent_json = true
	///     prefix_json = ")]}',"
	/// "#).unwrap();
	///
	/// let renderer = settings.json(StatusCode::OK).unwrap();
	/// assert!(renderer.indent);
	/// assert_eq!(renderer.prefix, ")]}',");
	/// assert_eq!(renderer.head.content_type, "application/json; charset=UTF-8");
	/// ```
	pub fn json(&self, status: StatusCode) -> RenderResult<Json> {
		Ok(Json::new(self.head(content_type::JSON, status)?)
			.indent(self.indent_json)
			.unescape_html(self.unescape_html)
			.prefix(self.prefix_json.clone())
			.streaming(self.streaming_json))
	}

	pub fn jsonp(&self, status: StatusCode, callback: impl Into<String>) -> RenderResult<Jsonp> {
		Ok(Jsonp::new(self.head(content_type::JSONP, status)?, callback).indent(self.indent_json))
	}

	pub fn text(&self, status: StatusCode) -> RenderResult<Text> {
		Ok(Text::new(self.head(content_type::TEXT, status)?))
	}

	#[cfg(feature = "xml")]
	pub fn xml(&self, status: StatusCode) -> RenderResult<Xml> {
		let mut renderer = Xml::new(self.head(&self.xml_content_type, status)?)
			.indent(self.indent_xml)
			.prefix(self.prefix_xml.clone());
		renderer.root = self.xml_root.clone();
		Ok(renderer)
	}
}
