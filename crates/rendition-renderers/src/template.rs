//! Compiled template sets used by the HTML renderer.

use serde::Serialize;

use crate::error::RenderResult;
#[cfg(feature = "templates")]
use crate::error::RenderError;

/// A set of pre-compiled templates addressable by name.
///
/// Implementations are loaded and compiled by their owner and shared
/// read-only between renderers, so `execute` takes `&self` and must be safe
/// to call from several threads at once. A name that is not in the set is an
/// execution error like any other.
pub trait TemplateSet: Send + Sync {
	/// Executes template `name` against `binding`, appending the output to `out`
	fn execute<B>(&self, name: &str, binding: &B, out: &mut Vec<u8>) -> RenderResult<()>
	where
		B: Serialize + ?Sized;
}

#[cfg(feature = "templates")]
impl TemplateSet for tera::Tera {
	fn execute<B>(&self, name: &str, binding: &B, out: &mut Vec<u8>) -> RenderResult<()>
	where
		B: Serialize + ?Sized,
	{
		let context =
			tera::Context::from_serialize(binding).map_err(|e| RenderError::template(name, e))?;
		self.render_to(name, &context, out)
			.map_err(|e| RenderError::template(name, e))
	}
}
