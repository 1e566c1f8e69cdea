//! Response heads, sinks and the buffered reference response.
//!
//! # Examples
//!
//! ```
//! use rendition::http::{Head, Response, Sink, StatusCode};
//! use std::io::Write;
//!
//! let mut response = Response::new();
//! let mut sink = Sink::response(&mut response);
//! sink.write_head(&Head::html().with_status(StatusCode::NOT_FOUND));
//! sink.write_all(b"<h1>Not Found</h1>").unwrap();
//!
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! ```

pub use rendition_http::*;
