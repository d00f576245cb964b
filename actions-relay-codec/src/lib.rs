//! # Actions Relay Codec
//! This crate maps typed actions to the binary payload understood by the execution
//! layer, and back.
//!
//! A payload is a 4-byte header (3-byte protocol prefix followed by the kind id)
//! and a fixed-order, fixed-width field encoding: big-endian integers, one byte per
//! boolean or enum, 20 raw bytes per account. The only variable-length field is the
//! trailing API wallet name. Everything in this crate is pure: identical inputs
//! always produce identical bytes.
pub mod decode;
pub mod encode;
pub mod envelope;
pub mod errors;
pub mod header;
pub mod layout;
mod reader;
mod writer;

pub use decode::decode;
pub use encode::{EncodeAction, encode};
pub use envelope::{CORE_WRITER_ADDRESS, RAW_ACTION_SELECTOR, raw_action_calldata};
pub use errors::{DecodingError, EncodingError};
pub use header::{HEADER_LEN, HEADER_PREFIX, header, parse_header};
pub use layout::{MAX_API_WALLET_NAME_LEN, fixed_fields_len, min_payload_len};
