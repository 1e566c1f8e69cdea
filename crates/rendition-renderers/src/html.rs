use std::fmt;
use std::io::Write;
use std::sync::Arc;

use rendition_http::{Head, Sink};
use serde::Serialize;

use crate::error::RenderResult;
use crate::pool::BufferPool;
use crate::renderer::Renderer;
use crate::template::TemplateSet;

/// HTML template renderer
///
/// The template runs into a buffer borrowed from the shared pool. Only a
/// fully successful execution reaches the sink, so a failing template never
/// produces partial output. The buffer goes back to the pool either way.
pub struct Html<T> {
	pub head: Head,
	/// Name of the template to execute
	pub name: String,
	templates: Arc<T>,
	pool: Arc<BufferPool>,
}

impl<T: TemplateSet> Html<T> {
	/// Creates a renderer for template `name`
	///
	/// # Examples
	///
	/// ```
	/// # #[cfg(feature = "templates")]
	/// # fn main() {
	/// use std::sync::Arc;
	///
	/// use rendition_http::{Head, Response, Sink};
	/// use rendition_renderers::{BufferPool, Html, Renderer};
	/// use serde_json::json;
	///
	/// let mut tera = tera::Tera::default();
	/// tera.add_raw_template("index.html", "<p>{{ greeting }}</p>").unwrap();
	///
	/// let renderer = Html::new(
	///     Head::html(),
	///     "index.html",
	///     Arc::new(tera),
	///     Arc::new(BufferPool::new()),
	/// );
	///
	/// let mut response = Response::new();
	/// renderer
	///     .render(Sink::response(&mut response), &json!({"greeting": "hi"}))
	///     .unwrap();
	/// assert_eq!(response.body(), b"<p>hi</p>");
	/// # }
	/// # #[cfg(not(feature = "templates"))]
	/// # fn main() {}
	/// ```
	pub fn new(head: Head, name: impl Into<String>, templates: Arc<T>, pool: Arc<BufferPool>) -> Self {
		Self {
			head,
			name: name.into(),
			templates,
			pool,
		}
	}

	pub fn templates(&self) -> &Arc<T> {
		&self.templates
	}

	pub fn pool(&self) -> &Arc<BufferPool> {
		&self.pool
	}
}

impl<T> Clone for Html<T> {
	fn clone(&self) -> Self {
		Self {
			head: self.head.clone(),
			name: self.name.clone(),
			templates: Arc::clone(&self.templates),
			pool: Arc::clone(&self.pool),
		}
	}
}

impl<T> fmt::Debug for Html<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Html")
			.field("head", &self.head)
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

impl<T, B> Renderer<B> for Html<T>
where
	T: TemplateSet,
	B: Serialize + ?Sized,
{
	fn render(&self, mut sink: Sink<'_>, value: &B) -> RenderResult<()> {
		let mut out = self.pool.acquire();
		self.templates.execute(&self.name, value, &mut out)?;

		sink.write_head(&self.head);
		sink.write_all(&out)?;

		tracing::trace!(
			renderer = "html",
			template = %self.name,
			len = out.len(),
			"Rendered response body"
		);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::header::CONTENT_TYPE;
	use rendition_http::{Response, StatusCode};
	use rstest::{fixture, rstest};
	use serde_json::json;

	use crate::error::{ErrorKind, RenderError};

	/// Templates that write part of their output before failing
	struct Scripted;

	impl TemplateSet for Scripted {
		fn execute<B>(&self, name: &str, binding: &B, out: &mut Vec<u8>) -> RenderResult<()>
		where
			B: Serialize + ?Sized,
		{
			let binding = serde_json::to_value(binding)?;
			match name {
				"greet" => {
					let who = binding["name"].as_str().unwrap_or("stranger");
					write!(out, "<p>Hello, {who}</p>")?;
					Ok(())
				}
				"partial" => {
					out.extend_from_slice(b"<p>half");
					Err(RenderError::template(name, "exploded midway"))
				}
				_ => Err(RenderError::template(name, "no such template")),
			}
		}
	}

	#[fixture]
	fn pool() -> Arc<BufferPool> {
		Arc::new(BufferPool::new())
	}

	#[rstest]
	fn test_renders_template_with_head(pool: Arc<BufferPool>) {
		let renderer = Html::new(
			Head::html().with_status(StatusCode::CREATED),
			"greet",
			Arc::new(Scripted),
			pool,
		);

		let mut response = Response::new();
		renderer
			.render(Sink::response(&mut response), &json!({"name": "Ada"}))
			.unwrap();

		assert_eq!(response.body(), b"<p>Hello, Ada</p>");
		assert_eq!(response.status(), StatusCode::CREATED);
		assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=UTF-8");
	}

	#[rstest]
	#[case("partial")]
	#[case("missing")]
	fn test_failure_writes_nothing_and_releases_buffer(pool: Arc<BufferPool>, #[case] name: &str) {
		let renderer = Html::new(Head::html(), name, Arc::new(Scripted), Arc::clone(&pool));

		let mut response = Response::new();
		let error = renderer
			.render(Sink::response(&mut response), &json!({}))
			.unwrap_err();

		assert_eq!(error.kind(), ErrorKind::TemplateExecutionFailure);
		assert!(!response.is_committed());
		assert!(response.body().is_empty());
		assert!(response.headers().is_empty());
		assert_eq!(pool.in_use(), 0);
		assert_eq!(pool.idle(), 1);
	}

	#[rstest]
	fn test_reused_buffer_does_not_leak_previous_output(pool: Arc<BufferPool>) {
		let failing = Html::new(Head::html(), "partial", Arc::new(Scripted), Arc::clone(&pool));
		let greeting = Html::new(Head::html(), "greet", Arc::new(Scripted), pool);

		let mut discarded = Vec::new();
		assert!(failing.render(Sink::body(&mut discarded), &json!({})).is_err());

		let mut buffer = Vec::new();
		greeting
			.render(Sink::body(&mut buffer), &json!({"name": "Bo"}))
			.unwrap();
		assert_eq!(buffer, b"<p>Hello, Bo</p>");
	}

	#[rstest]
	fn test_clone_shares_templates_and_pool(pool: Arc<BufferPool>) {
		let renderer = Html::new(Head::html(), "greet", Arc::new(Scripted), pool);
		let cloned = renderer.clone();

		assert!(Arc::ptr_eq(renderer.templates(), cloned.templates()));
		assert!(Arc::ptr_eq(renderer.pool(), cloned.pool()));
	}

	#[rstest]
	fn test_debug_omits_shared_state(pool: Arc<BufferPool>) {
		let renderer = Html::new(Head::html(), "greet", Arc::new(Scripted), pool);
		let debug = format!("{renderer:?}");

		assert!(debug.starts_with("Html {"));
		assert!(debug.contains("\"greet\""));
	}
}
