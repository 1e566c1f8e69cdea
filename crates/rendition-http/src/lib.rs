//! HTTP plumbing shared by the rendition renderers.
//!
//! This crate defines the pieces every renderer writes through:
//!
//! - [`Head`] - the content type and status applied before a body
//! - [`Sink`] - where rendered bytes go, either a plain [`std::io::Write`]
//!   or a header-capable [`ResponseWriter`]
//! - [`Response`] - a buffered [`ResponseWriter`] that can be turned into an
//!   [`http::Response`] once rendering is done
//!
//! # Examples
//!
//! ```
//! use rendition_http::{Head, Response, Sink};
//! use std::io::Write;
//!
//! let mut response = Response::new();
//! let mut sink = Sink::response(&mut response);
//! sink.write_head(&Head::text());
//! sink.write_all(b"hello").unwrap();
//!
//! assert_eq!(response.body(), b"hello");
//! assert_eq!(
//!     response.headers()["content-type"],
//!     "text/plain; charset=UTF-8"
//! );
//! ```

pub mod content_type;
pub mod head;
pub mod response;
pub mod sink;

pub use head::{Head, HeadError};
pub use response::Response;
pub use sink::{ResponseWriter, Sink};

/// Re-exported so downstream crates agree on header and status types
pub use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
