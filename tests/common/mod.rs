//! Shared helpers for the end-to-end tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use docserve::http::connection::{Connection, Disposition};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// A scratch directory tree, removed on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("docserve-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, relative: &str, content: &[u8]) {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file, content).unwrap();
    }

    pub fn mkdir(&self, relative: &str) {
        fs::create_dir_all(self.path.join(relative)).unwrap();
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Sends `request` over an in-memory stream and collects the full response.
pub async fn exchange(root: &Path, request: &[u8]) -> (Disposition, Vec<u8>) {
    exchange_with(root, request, 2048, 64 * 1024).await
}

/// Like [`exchange`] with explicit receive buffer and pipe capacities.
pub async fn exchange_with(
    root: &Path,
    request: &[u8],
    buffer_capacity: usize,
    pipe_capacity: usize,
) -> (Disposition, Vec<u8>) {
    let (mut client, server) = tokio::io::duplex(pipe_capacity);

    let server_side = async {
        let mut conn = Connection::new(server);
        conn.run(root, buffer_capacity).await
    };

    let client_side = async {
        client.write_all(request).await.unwrap();
        let mut response = Vec::new();
        client.read_to_end(&mut response).await.unwrap();
        response
    };

    tokio::join!(server_side, client_side)
}
