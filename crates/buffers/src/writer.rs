//! Binary buffer writer over an auto-growing buffer.

/// A binary buffer writer that appends little-endian data to an owned,
/// auto-growing buffer.
///
/// # Example
///
/// ```
/// use dc6_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u32(0xEEEE_EEEE);
/// writer.buf(&[0x02, 0x08, 0x05]);
/// assert_eq!(writer.flush().len(), 7);
/// ```
#[derive(Default)]
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.data.push(val);
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes raw bytes verbatim.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Consumes the writer, returning the written bytes.
    pub fn flush(self) -> Vec<u8> {
        self.data
    }
}
