use actions_relay_shared::types::ActionKind;
use alloy::primitives::Address;

use crate::errors::DecodingError;
use crate::layout::{ADDRESS_LEN, fixed_fields_len, has_variable_tail};

/// Cursor over the field section of a payload whose header was already parsed.
pub(crate) struct PayloadReader<'a> {
    fields: &'a [u8],
    position: usize,
}

impl<'a> PayloadReader<'a> {
    /// Checks the field section length against the static layout of `kind`.
    pub(crate) fn new(kind: ActionKind, fields: &'a [u8]) -> Result<Self, DecodingError> {
        let expected = fixed_fields_len(kind);
        if fields.len() < expected {
            return Err(DecodingError::Truncated {
                kind,
                expected,
                actual: fields.len(),
            });
        }
        if !has_variable_tail(kind) && fields.len() > expected {
            return Err(DecodingError::TrailingBytes {
                kind,
                extra: fields.len() - expected,
            });
        }
        Ok(Self {
            fields,
            position: 0,
        })
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.fields[self.position..self.position + N]);
        self.position += N;
        out
    }

    pub(crate) fn bool(&mut self) -> Result<bool, DecodingError> {
        match self.take::<1>()[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodingError::InvalidBool(other)),
        }
    }

    pub(crate) fn u8(&mut self) -> u8 {
        self.take::<1>()[0]
    }

    pub(crate) fn u32(&mut self) -> u32 {
        u32::from_be_bytes(self.take())
    }

    pub(crate) fn u64(&mut self) -> u64 {
        u64::from_be_bytes(self.take())
    }

    pub(crate) fn u128(&mut self) -> u128 {
        u128::from_be_bytes(self.take())
    }

    pub(crate) fn address(&mut self) -> Address {
        Address::from(self.take::<ADDRESS_LEN>())
    }

    /// Consumes every remaining byte as UTF-8 text.
    pub(crate) fn rest_as_text(&mut self, max: usize) -> Result<String, DecodingError> {
        let rest = &self.fields[self.position..];
        if rest.len() > max {
            return Err(DecodingError::NameTooLong {
                len: rest.len(),
                max,
            });
        }
        let text = std::str::from_utf8(rest).map_err(|_| DecodingError::InvalidUtf8)?;
        self.position = self.fields.len();
        Ok(text.to_owned())
    }
}
