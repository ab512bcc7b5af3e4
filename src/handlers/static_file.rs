//! Serving files from the root directory.

use std::ffi::OsStr;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt, AsyncWrite};
use tracing::{error, warn};

use crate::http::connection::Connection;
use crate::http::mime::mime_for_path;
use crate::http::request;
use crate::http::response::{ResponseHead, StatusCode, TRANSFER_INCOMPLETE};
use crate::http::writer::{send_internal_error, send_not_found, serialize_head};

const INDEX_FILE: &str = "index.html";

/// Joins `root` and the path components with `/`.
///
/// The root is used byte-for-byte, so it need not be valid UTF-8. No
/// component is normalized, so `..` is passed through untouched.
pub fn join_components(root: &Path, components: &[String]) -> PathBuf {
    let mut file_path = root.as_os_str().to_os_string();

    for component in components {
        if !ends_with_separator(&file_path) {
            file_path.push("/");
        }
        file_path.push(component);
    }

    PathBuf::from(file_path)
}

fn ends_with_separator(path: &OsStr) -> bool {
    path.as_encoded_bytes().ends_with(b"/")
}

/// Maps request components to a file path, falling back to `index.html`
/// when the joined path is a directory.
pub async fn resolve(root: &Path, components: &[String]) -> PathBuf {
    let mut file_path = join_components(root, components).into_os_string();

    let is_dir = fs::metadata(&file_path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    if is_dir {
        if !ends_with_separator(&file_path) {
            file_path.push("/");
        }
        file_path.push(INDEX_FILE);
    }

    PathBuf::from(file_path)
}

/// Sends the file named by `path` as a 200 response.
///
/// Returns 404/500 when the file cannot be opened or sized, 200 when the
/// whole body was written, and [`TRANSFER_INCOMPLETE`] otherwise.
pub async fn serve<S>(path: &request::Path, conn: &mut Connection<S>, root: &Path) -> u16
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let file_path = resolve(root, &path.components).await;

    let mut file = match File::open(&file_path).await {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "The file could not be opened");
            return send_not_found(conn).await;
        }
    };

    let size = match file_size(&mut file).await {
        Ok(size) => size,
        Err(e) => {
            error!(path = %file_path.display(), error = %e, "Can't get file size");
            return send_internal_error(conn).await;
        }
    };

    let head = serialize_head(&ResponseHead::file(size, mime_for_path(&file_path)));
    if let Err(e) = conn.send_all(&head).await {
        error!(peer = ?conn.peer(), error = %e, "Error sending response data");
        return TRANSFER_INCOMPLETE;
    }

    let mut content = Vec::with_capacity(size as usize);
    if let Err(e) = file.take(size).read_to_end(&mut content).await {
        warn!(path = %file_path.display(), error = %e, "Error reading file");
    }
    if content.len() as u64 != size {
        warn!(path = %file_path.display(), expected = size, read = content.len(), "Couldn't read entire file");
    }

    let mut remaining = &content[..];
    while !remaining.is_empty() {
        match conn.send(remaining).await {
            Ok(0) => {
                warn!(peer = ?conn.peer(), "Couldn't send data: connection closed");
                break;
            }
            Ok(n) => remaining = &remaining[n..],
            Err(e) => {
                warn!(peer = ?conn.peer(), error = %e, "Couldn't send data");
                break;
            }
        }
    }

    if remaining.is_empty() {
        StatusCode::Ok.as_u16()
    } else {
        TRANSFER_INCOMPLETE
    }
}

/// Size in bytes, found by seeking to the end; the file is rewound after.
async fn file_size(file: &mut File) -> std::io::Result<u64> {
    let size = file.seek(SeekFrom::End(0)).await?;
    file.rewind().await?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn join_root_component() {
        let joined = join_components(Path::new("/srv"), &components(&[""]));
        assert_eq!(joined.as_os_str(), "/srv/");
        let joined = join_components(Path::new("/srv/"), &components(&[""]));
        assert_eq!(joined.as_os_str(), "/srv/");
    }

    #[test]
    fn join_nested_components() {
        let joined = join_components(Path::new("/srv/www"), &components(&["a", "b.txt"]));
        assert_eq!(joined.as_os_str(), "/srv/www/a/b.txt");
        assert_eq!(join_components(Path::new("/srv"), &[]).as_os_str(), "/srv");
    }

    #[cfg(unix)]
    #[test]
    fn join_keeps_non_utf8_root_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new(OsStr::from_bytes(b"/srv/site-\xff"));
        let joined = join_components(root, &components(&["a.txt"]));
        assert_eq!(joined.as_os_str().as_bytes(), b"/srv/site-\xff/a.txt");
    }
}
