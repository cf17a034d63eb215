/// HTTP request methods the client can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - args travel in the query string
    Get,
    /// POST - args travel as a form-encoded body
    Post,
}

impl Method {
    /// Parses a method token strictly.
    ///
    /// # Example
    ///
    /// ```
    /// # use rawhttp::http::request::Method;
    /// assert_eq!(Method::parse("POST"), Some(Method::Post));
    /// assert_eq!(Method::parse("post"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            _ => None,
        }
    }

    /// Maps a method token permissively: `"POST"` is POST, anything else is GET.
    ///
    /// ```
    /// # use rawhttp::http::request::Method;
    /// assert_eq!(Method::from_token("DELETE"), Method::Get);
    /// ```
    pub fn from_token(token: &str) -> Self {
        Self::parse(token).unwrap_or(Method::Get)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered key/value arguments for a request.
///
/// Order is serialization order and duplicate keys are kept. Keys and values
/// are written verbatim, without percent-encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestArgs {
    pairs: Vec<(String, String)>,
}

impl RequestArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes every pair as `key=value&`, keeping the trailing `&`.
    pub fn to_form_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('&');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for RequestArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// An outgoing HTTP request before serialization.
///
/// Headers are a list rather than a map so they go out in the order they
/// were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// Request target, including any query string
    pub path: String,
    /// HTTP version (always "HTTP/1.1" for requests built here)
    pub version: String,
    /// Header lines in wire order
    pub headers: Vec<(String, String)>,
    /// Entity body, empty for GET
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Method,
    path: String,
    version: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: "HTTP/1.1".to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            version: self.version,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Request {
    /// Builds a GET for `path` on `host`, appending args as a query string.
    pub fn get(host: &str, path: &str, args: &RequestArgs) -> Self {
        let mut target = path.to_string();
        if !args.is_empty() {
            target.push('?');
            target.push_str(&args.to_form_string());
        }

        RequestBuilder::new(Method::Get, target)
            .header("Host", host)
            .header("Connection", "close")
            .build()
    }

    /// Builds a form-encoded POST for `path` on `host`.
    pub fn post(host: &str, path: &str, args: &RequestArgs) -> Self {
        let body = args.to_form_string().into_bytes();

        RequestBuilder::new(Method::Post, path)
            .header("Host", host)
            .header("Connection", "close")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Content-Length", body.len().to_string())
            .body(body)
            .build()
    }

    pub fn new(method: Method, host: &str, path: &str, args: &RequestArgs) -> Self {
        match method {
            Method::Get => Self::get(host, path, args),
            Method::Post => Self::post(host, path, args),
        }
    }

    /// Retrieves the first header with the given name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
