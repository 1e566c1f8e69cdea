//! Format renderers module.
//!
//! Re-exports every renderer together with the settings, pool and error
//! types they share.

pub use rendition_renderers::*;
