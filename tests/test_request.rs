use rawhttp::http::request::{Method, Request, RequestArgs, RequestBuilder};
use rawhttp::http::writer::{build_get, build_post, build_request};

fn args_ab() -> RequestArgs {
    RequestArgs::new().with("a", "1").with("b", "2")
}

#[test]
fn test_build_get_appends_args_with_trailing_ampersand() {
    let bytes = build_get("example.com", "/x", &args_ab());
    let request_str = String::from_utf8(bytes).unwrap();

    assert!(request_str.starts_with("GET /x?a=1&b=2& HTTP/1.1\r\n"));
}

#[test]
fn test_build_get_exact_wire_format() {
    let bytes = build_get("example.com", "/x", &args_ab());

    assert_eq!(
        bytes,
        b"GET /x?a=1&b=2& HTTP/1.1\r\nHost: example.com\r\nConnection: close\r\n\r\n".to_vec()
    );
}

#[test]
fn test_build_get_without_args_leaves_path_alone() {
    let bytes = build_get("example.com", "/search?q=1", &RequestArgs::new());
    let request_str = String::from_utf8(bytes).unwrap();

    assert!(request_str.starts_with("GET /search?q=1 HTTP/1.1\r\n"));
}

#[test]
fn test_build_get_has_no_body() {
    let bytes = build_get("example.com", "/", &args_ab());
    assert!(bytes.ends_with(b"\r\n\r\n"));
}

#[test]
fn test_build_post_exact_wire_format() {
    let bytes = build_post("example.com", "/submit", &args_ab());

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "POST /submit HTTP/1.1\r\n\
         Host: example.com\r\n\
         Connection: close\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: 8\r\n\
         \r\n\
         a=1&b=2&"
    );
}

#[test]
fn test_build_post_without_args_sends_zero_length() {
    let bytes = build_post("example.com", "/", &RequestArgs::new());
    let request_str = String::from_utf8(bytes).unwrap();

    assert!(request_str.contains("Content-Length: 0\r\n"));
    assert!(request_str.ends_with("\r\n\r\n"));
}

#[test]
fn test_build_post_content_length_counts_bytes() {
    let args = RequestArgs::new().with("name", "café");
    let request = Request::post("example.com", "/", &args);

    // "name=café&" is 10 chars but 11 bytes
    assert_eq!(request.header("Content-Length"), Some("11"));
    assert_eq!(request.body.len(), 11);
}

#[test]
fn test_build_post_keeps_path_query_on_request_line() {
    let bytes = build_post("example.com", "/form?x=1", &args_ab());
    let request_str = String::from_utf8(bytes).unwrap();

    assert!(request_str.starts_with("POST /form?x=1 HTTP/1.1\r\n"));
}

#[test]
fn test_args_are_not_encoded() {
    let args = RequestArgs::new().with("q", "a b&c");
    let bytes = build_get("example.com", "/", &args);
    let request_str = String::from_utf8(bytes).unwrap();

    assert!(request_str.starts_with("GET /?q=a b&c& HTTP/1.1"));
}

#[test]
fn test_args_preserve_insertion_order_and_duplicates() {
    let args: RequestArgs = vec![("z", "1"), ("a", "2"), ("z", "3")].into_iter().collect();

    assert_eq!(args.len(), 3);
    assert_eq!(args.to_form_string(), "z=1&a=2&z=3&");
}

#[test]
fn test_build_request_dispatches_on_method() {
    let get = build_request(Method::Get, "h", "/p", &args_ab());
    let post = build_request(Method::Post, "h", "/p", &args_ab());

    assert_eq!(get, build_get("h", "/p", &args_ab()));
    assert_eq!(post, build_post("h", "/p", &args_ab()));
}

#[test]
fn test_request_header_order_is_stable() {
    let request = Request::post("example.com", "/", &args_ab());
    let names: Vec<&str> = request.headers.iter().map(|(k, _)| k.as_str()).collect();

    assert_eq!(
        names,
        vec!["Host", "Connection", "Content-Type", "Content-Length"]
    );
}

#[test]
fn test_request_builder_defaults_version() {
    let request = RequestBuilder::new(Method::Get, "/").build();

    assert_eq!(request.version, "HTTP/1.1");
    assert!(request.headers.is_empty());
    assert!(request.body.is_empty());
}

#[test]
fn test_method_parsing() {
    assert_eq!(Method::parse("GET"), Some(Method::Get));
    assert_eq!(Method::parse("POST"), Some(Method::Post));
    assert_eq!(Method::parse("PUT"), None);

    assert_eq!(Method::from_token("POST"), Method::Post);
    assert_eq!(Method::from_token("GET"), Method::Get);
    assert_eq!(Method::from_token("PUT"), Method::Get);
    assert_eq!(Method::from_token("post"), Method::Get);
    assert_eq!(Method::from_token(""), Method::Get);
}
