use actions_relay_shared::types::ActionKind;
use alloy::primitives::{Address, Bytes};

use crate::errors::EncodingError;
use crate::header::header;
use crate::layout::min_payload_len;

/// Append-only buffer that lays out one payload: header first, then fields in call order.
pub(crate) struct PayloadWriter {
    buf: Vec<u8>,
}

impl PayloadWriter {
    pub(crate) fn new(kind: ActionKind) -> Self {
        let mut buf = Vec::with_capacity(min_payload_len(kind));
        buf.extend_from_slice(&header(kind));
        Self { buf }
    }

    pub(crate) fn put_bool(&mut self, value: bool) -> &mut Self {
        self.buf.push(u8::from(value));
        self
    }

    pub(crate) fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub(crate) fn put_u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn put_u64(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn put_u128(&mut self, value: u128) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn put_address(&mut self, value: &Address) -> &mut Self {
        self.buf.extend_from_slice(value.as_slice());
        self
    }

    /// Appends raw UTF-8 text with no length prefix. Only valid as the last field.
    pub(crate) fn put_text(&mut self, value: &str, max: usize) -> Result<&mut Self, EncodingError> {
        if value.len() > max {
            return Err(EncodingError::NameTooLong {
                len: value.len(),
                max,
            });
        }
        self.buf.extend_from_slice(value.as_bytes());
        Ok(self)
    }

    pub(crate) fn finish(self) -> Bytes {
        Bytes::from(self.buf)
    }
}
