//! Facade integration tests
//!
//! Drives every renderer through `rendition::prelude` and converts the
//! result into an `http::Response` the way a transport layer would.

use std::sync::Arc;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use rendition::prelude::*;
use rendition::{BufferPool, ErrorKind};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn settings() -> RenderSettings {
	RenderSettings::default()
}

fn finish(response: Response) -> http::Response<Bytes> {
	response.into_http()
}

#[rstest]
fn test_json_response(settings: RenderSettings) {
	let mut response = Response::new();
	settings
		.json(StatusCode::OK)
		.unwrap()
		.render(response.sink(), &json!({"user": "<admin>"}))
		.unwrap();

	let response = finish(response);
	assert_eq!(response.headers()[CONTENT_TYPE], "application/json; charset=UTF-8");
	assert_eq!(
		response.body(),
		&Bytes::from_static(b"{\"user\":\"\\u003cadmin\\u003e\"}")
	);
}

#[rstest]
fn test_html_response(settings: RenderSettings) {
	let mut tera = tera::Tera::default();
	tera.add_raw_template("profile.html", "<p>{{ user }}</p>")
		.unwrap();
	let pool = Arc::new(settings.buffer_pool());
	let renderer = settings
		.html(StatusCode::OK, "profile.html", Arc::new(tera), Arc::clone(&pool))
		.unwrap();

	let mut response = Response::new();
	renderer
		.render(response.sink(), &json!({"user": "ferris"}))
		.unwrap();

	let response = finish(response);
	assert_eq!(response.headers()[CONTENT_TYPE], "text/html; charset=UTF-8");
	assert_eq!(response.body(), &Bytes::from_static(b"<p>ferris</p>"));
	assert_eq!(pool.in_use(), 0);
}

#[rstest]
#[case(StatusCode::OK)]
#[case(StatusCode::BAD_REQUEST)]
fn test_text_response_status(settings: RenderSettings, #[case] status: StatusCode) {
	let mut response = Response::new();
	settings
		.text(status)
		.unwrap()
		.render(response.sink(), "plain")
		.unwrap();

	assert_eq!(finish(response).status(), status);
}

#[rstest]
fn test_dynamic_text_rejects_objects(settings: RenderSettings) {
	let mut response = Response::new();
	let error = settings
		.text(StatusCode::OK)
		.unwrap()
		.render(response.sink(), &json!({"not": "text"}))
		.unwrap_err();

	assert_eq!(error.kind(), ErrorKind::InvalidInputKind);
	assert!(finish(response).body().is_empty());
}

#[rstest]
fn test_shared_pool_is_reused_across_renderers() {
	let pool = Arc::new(BufferPool::new());
	let mut tera = tera::Tera::default();
	tera.add_raw_templates(vec![("a.html", "A{{ n }}"), ("b.html", "B{{ n }}")])
		.unwrap();
	let tera = Arc::new(tera);

	let a = Html::new(Head::html(), "a.html", Arc::clone(&tera), Arc::clone(&pool));
	let b = Html::new(Head::html(), "b.html", tera, Arc::clone(&pool));

	for n in 0..3 {
		let mut out = Vec::new();
		a.render(Sink::body(&mut out), &json!({"n": n})).unwrap();
		b.render(Sink::body(&mut out), &json!({"n": n})).unwrap();
		assert_eq!(out, format!("A{n}B{n}").into_bytes());
	}

	assert_eq!(pool.idle(), 1);
	assert_eq!(pool.in_use(), 0);
}
