use docserve::http::request::{Method, Path};

#[test]
fn test_method_from_known_tokens() {
    let methods = vec![
        ("GET", Method::GET),
        ("HEAD", Method::HEAD),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("PATCH", Method::PATCH),
    ];

    for (token, expected) in methods {
        assert_eq!(Method::from_token(token), expected);
    }
}

#[test]
fn test_method_is_case_sensitive() {
    assert_eq!(Method::from_token("get"), Method::Unsupported);
    assert_eq!(Method::from_token("Post"), Method::Unsupported);
}

#[test]
fn test_method_unknown_and_empty_tokens() {
    assert_eq!(Method::from_token(""), Method::Unsupported);
    assert_eq!(Method::from_token("OPTIONS"), Method::Unsupported);
    assert_eq!(Method::from_token("GET\r\n"), Method::Unsupported);
}

#[test]
fn test_parse_root_path() {
    let path = Path::parse("/");

    assert_eq!(path.components, vec![String::new()]);
    assert_eq!(path.query, "");
}

#[test]
fn test_parse_path_with_query() {
    let path = Path::parse("/a/b?x=1");

    assert_eq!(path.components, vec!["a", "b"]);
    assert_eq!(path.query, "x=1");
}

#[test]
fn test_parse_path_collapses_empty_segments() {
    let path = Path::parse("/a//b/");

    assert_eq!(path.components, vec!["a", "b"]);
    assert_eq!(path.query, "");
}

#[test]
fn test_parse_path_preserves_order_and_count() {
    let path = Path::parse("/one/two/three/four.txt");
    assert_eq!(path.components, vec!["one", "two", "three", "four.txt"]);
}

#[test]
fn test_parse_path_query_is_verbatim() {
    let path = Path::parse("/search?q=a%20b&x=?y");

    assert_eq!(path.components, vec!["search"]);
    assert_eq!(path.query, "q=a%20b&x=?y");
}

#[test]
fn test_parse_path_no_percent_decoding() {
    let path = Path::parse("/my%20file.txt");
    assert_eq!(path.components, vec!["my%20file.txt"]);
}

#[test]
fn test_parse_path_keeps_dot_dot() {
    let path = Path::parse("/a/../b");
    assert_eq!(path.components, vec!["a", "..", "b"]);
}

#[test]
fn test_parse_root_with_query_has_no_components() {
    let path = Path::parse("/?x=1");

    assert!(path.components.is_empty());
    assert_eq!(path.query, "x=1");
}

#[test]
fn test_parse_slash_before_query() {
    let path = Path::parse("/docs/?page=2");

    assert_eq!(path.components, vec!["docs"]);
    assert_eq!(path.query, "page=2");
}

#[test]
fn test_parse_empty_target() {
    let path = Path::parse("");

    assert!(path.components.is_empty());
    assert_eq!(path.query, "");
}

#[test]
fn test_parse_target_without_leading_slash() {
    assert_eq!(Path::parse("a/b").components, vec!["b"]);
    assert!(Path::parse("abc").components.is_empty());
}
