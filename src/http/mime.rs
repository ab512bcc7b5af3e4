//! Content type inference from file extensions.
//!
//! Table based on the MDN list of common MIME types. Lookups are exact and
//! case-sensitive; the extension includes its leading dot.

use std::path::Path;

/// Content type for anything not in the table.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

static MIME_TYPES: &[(&str, &str)] = &[
    (".aac", "audio/aac"),
    (".abw", "application/x-abiword"),
    (".arc", "application/x-freearc"),
    (".avif", "image/avif"),
    (".avi", "video/x-msvideo"),
    (".azw", "application/vnd.amazon.ebook"),
    (".bmp", "image/bmp"),
    (".bz", "application/x-bzip"),
    (".bz2", "application/x-bzip2"),
    (".cda", "application/x-cdf"),
    (".csh", "application/x-csh"),
    (".css", "text/css"),
    (".csv", "text/csv"),
    (".doc", "application/msword"),
    (".docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    (".eot", "application/vnd.ms-fontobject"),
    (".epub", "application/epub+zip"),
    (".gz", "application/gzip"),
    (".gif", "image/gif"),
    (".htm", "text/html"),
    (".html", "text/html"),
    (".ico", "image/vnd.microsoft.icon"),
    (".ics", "text/calendar"),
    (".jar", "application/java-archive"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".js", "text/javascript"),
    (".mjs", "text/javascript"),
    (".json", "application/json"),
    (".jsonld", "application/ld+json"),
    (".mid", "audio/midi"),
    (".midi", "audio/midi"),
    (".mp3", "audio/mpeg"),
    (".mp4", "video/mp4"),
    (".mpeg", "video/mpeg"),
    (".mpkg", "application/vnd.apple.installer+xml"),
    (".odp", "application/vnd.oasis.opendocument.presentation"),
    (".ods", "application/vnd.oasis.opendocument.spreadsheet"),
    (".odt", "application/vnd.oasis.opendocument.text"),
    (".oga", "audio/ogg"),
    (".ogv", "video/ogg"),
    (".ogx", "application/ogg"),
    (".opus", "audio/opus"),
    (".otf", "font/otf"),
    (".png", "image/png"),
    (".pdf", "application/pdf"),
    (".php", "application/x-httpd-php"),
    (".ppt", "application/vnd.ms-powerpoint"),
    (".pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    (".rar", "application/vnd.rar"),
    (".rtf", "application/rtf"),
    (".sh", "application/x-sh"),
    (".svg", "image/svg+xml"),
    (".tar", "application/x-tar"),
    (".tif", "image/tiff"),
    (".tiff", "image/tiff"),
    (".ts", "video/mp2t"),
    (".ttf", "font/ttf"),
    (".txt", "text/plain"),
    (".vsd", "application/vnd.visio"),
    (".wav", "audio/wav"),
    (".weba", "audio/webm"),
    (".webm", "video/webm"),
    (".webp", "image/webp"),
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".xhtml", "application/xhtml+xml"),
    (".xls", "application/vnd.ms-excel"),
    (".xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    (".xml", "application/xml"),
    (".xul", "application/vnd.mozilla.xul+xml"),
    (".zip", "application/zip"),
    (".3gp", "video/3gpp"),
    (".3g2", "video/3gpp2"),
    (".7z", "application/x-7z-compressed"),
];

/// Looks up the content type for an extension such as `".html"`.
///
/// Never fails: unknown or missing extensions map to
/// `application/octet-stream`.
///
/// ```
/// # use docserve::http::mime::guess_mime_type;
/// assert_eq!(guess_mime_type(Some(".html")), "text/html");
/// assert_eq!(guess_mime_type(None), "application/octet-stream");
/// ```
pub fn guess_mime_type(extension: Option<&str>) -> &'static str {
    extension
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// The substring starting at the last `.` of `path`, if any.
///
/// The whole path is searched, so a dot in a directory name counts when the
/// file itself has none.
pub fn extension_of(path: &str) -> Option<&str> {
    path.rfind('.').map(|idx| &path[idx..])
}

/// Content type for a filesystem path, by its extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let text = path.to_string_lossy();
    guess_mime_type(extension_of(&text))
}
