use bytes::BytesMut;

use crate::config::DEFAULT_BUFFER_CAPACITY;

/// A receive buffer with a fixed capacity.
///
/// Filled by exactly one read; anything a client sends beyond `capacity`
/// bytes in that read is never seen.
#[derive(Debug)]
pub struct Buffer {
    data: BytesMut,
    capacity: usize,
}

impl Buffer {
    /// Creates an empty buffer. A capacity of 0 selects the default.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_BUFFER_CAPACITY
        } else {
            capacity
        };

        Self {
            data: BytesMut::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The full-capacity region a read should fill.
    pub(crate) fn fill_region(&mut self) -> &mut [u8] {
        self.data.clear();
        self.data.resize(self.capacity, 0);
        &mut self.data[..]
    }

    /// Records how many bytes the last read produced.
    pub(crate) fn set_len(&mut self, len: usize) {
        self.data.truncate(len.min(self.capacity));
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the buffer, returning its contents as text.
    ///
    /// Text stops at the first NUL byte; invalid UTF-8 is replaced.
    pub fn into_text(self) -> String {
        let bytes = &self.data[..];
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_uses_default() {
        assert_eq!(Buffer::new(0).capacity(), DEFAULT_BUFFER_CAPACITY);
        assert_eq!(Buffer::new(16).capacity(), 16);
    }

    #[test]
    fn text_stops_at_nul() {
        let mut buf = Buffer::new(16);
        buf.fill_region()[..6].copy_from_slice(b"GET\0/x");
        buf.set_len(6);

        assert_eq!(buf.len(), 6);
        assert_eq!(buf.into_text(), "GET");
    }
}
