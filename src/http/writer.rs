use crate::http::request::{Method, Request, RequestArgs};

fn serialize_request(req: &Request) -> Vec<u8> {
    let mut buf = Vec::with_capacity(128 + req.body.len());

    // Request line
    let request_line = format!("{} {} {}\r\n", req.method, req.path, req.version);
    buf.extend_from_slice(request_line.as_bytes());

    // Headers
    for (k, v) in &req.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&req.body);

    buf
}

/// Wire bytes of a GET request. Args are appended to `path` as `key=value&`.
pub fn build_get(host: &str, path: &str, args: &RequestArgs) -> Vec<u8> {
    serialize_request(&Request::get(host, path, args))
}

/// Wire bytes of a form-encoded POST request.
pub fn build_post(host: &str, path: &str, args: &RequestArgs) -> Vec<u8> {
    serialize_request(&Request::post(host, path, args))
}

pub fn build_request(method: Method, host: &str, path: &str, args: &RequestArgs) -> Vec<u8> {
    serialize_request(&Request::new(method, host, path, args))
}
