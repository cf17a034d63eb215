use rawhttp::HttpResponse;

#[test]
fn test_response_display() {
    let response = HttpResponse::new(200, "hello");
    assert_eq!(response.to_string(), "status code: 200\nbody: hello");
}

#[test]
fn test_response_display_empty_body() {
    let response = HttpResponse::new(500, "");
    assert_eq!(response.to_string(), "status code: 500\nbody: ");
}

#[test]
fn test_response_equality() {
    assert_eq!(HttpResponse::new(200, "a"), HttpResponse::new(200, "a".to_string()));
    assert_ne!(HttpResponse::new(200, "a"), HttpResponse::new(201, "a"));
}
