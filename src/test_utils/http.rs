use axum::{
    body::Body,
    http::header::{CONTENT_TYPE, HeaderName},
    response::Response,
};
use axum_htmx::HX_REDIRECT;

#[track_caller]
fn must_get_header<'a>(response: &'a Response<Body>, header: &HeaderName) -> &'a str {
    response
        .headers()
        .get(header)
        .unwrap_or_else(|| panic!("Headers missing {header}"))
        .to_str()
        .expect("Could not convert header to str")
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(must_get_header(response, &CONTENT_TYPE), content_type);
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(must_get_header(response, &HX_REDIRECT), endpoint);
}
