use super::*;

#[test]
fn catalog_failed_message_formats_status() {
    assert_eq!(catalog_failed_message(503), "course catalog request failed: 503");
}

#[test]
fn courses_endpoint_is_under_api() {
    assert_eq!(COURSES_ENDPOINT, "/api/courses");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_courses_is_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(fetch_courses());
    assert_eq!(result, Err("not available on server".to_owned()));
}
