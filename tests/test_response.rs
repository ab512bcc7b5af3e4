use docserve::http::response::{ResponseHead, StatusCode, TRANSFER_INCOMPLETE, is_recovered};
use docserve::http::writer::serialize_head;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_recovered_classification() {
    assert!(is_recovered(200));
    assert!(is_recovered(404));
    assert!(is_recovered(499));
    assert!(!is_recovered(500));
    assert!(!is_recovered(501));
    assert!(!is_recovered(199));
    assert!(!is_recovered(TRANSFER_INCOMPLETE));
}

#[test]
fn test_fixed_status_lines() {
    let cases = [
        (StatusCode::NotFound, "HTTP/1.1 404 Not Found\r\n\r\n"),
        (StatusCode::InternalServerError, "HTTP/1.1 500 Internal Server Error\r\n\r\n"),
        (StatusCode::NotImplemented, "HTTP/1.1 501 Not Implemented\r\n\r\n"),
    ];

    for (status, expected) in cases {
        let bytes = serialize_head(&ResponseHead::new(status));
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }
}

#[test]
fn test_file_head_headers_in_order() {
    let head = ResponseHead::file(1234, "image/png");

    assert_eq!(head.status, StatusCode::Ok);
    assert_eq!(
        head.headers,
        vec![
            ("Content-Length".to_string(), "1234".to_string()),
            ("Content-Type".to_string(), "image/png".to_string()),
        ]
    );
}
