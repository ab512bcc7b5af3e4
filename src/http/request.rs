/// HTTP request methods.
///
/// Only GET is served; the other known methods are recognized so they can be
/// answered with 501 Not Implemented. Anything else is `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, including empty or malformed ones
    Unsupported,
}

impl Method {
    /// Classifies a method token.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Unsupported);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "PATCH" => Method::PATCH,
            _ => Method::Unsupported,
        }
    }
}

/// The target of a request, split into path components and a raw query.
///
/// Components are never empty, except for the root path `/` which is a
/// single empty component. Nothing is percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    /// Path components, originally separated by `/`
    pub components: Vec<String>,
    /// Everything after the first `?`, verbatim (empty if absent)
    pub query: String,
}

impl Path {
    /// Decomposes an origin-form request target.
    ///
    /// Empty segments (from `//` or a trailing `/`) are dropped. Text before
    /// the first `/` does not form a component.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::request::Path;
    /// let path = Path::parse("/a//b/?x=1");
    /// assert_eq!(path.components, vec!["a", "b"]);
    /// assert_eq!(path.query, "x=1");
    ///
    /// assert_eq!(Path::parse("/").components, vec![""]);
    /// ```
    pub fn parse(target: &str) -> Self {
        if target == "/" {
            return Self {
                components: vec![String::new()],
                query: String::new(),
            };
        }

        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        let components = path
            .split('/')
            .skip(1)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            components,
            query: query.to_string(),
        }
    }
}

/// A parsed request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The decomposed request target
    pub path: Path,
}
