//! Versioned payload header.
use actions_relay_shared::types::ActionKind;

use crate::errors::DecodingError;

/// Encoding version 1 followed by two reserved zero bytes.
pub const HEADER_PREFIX: [u8; 3] = [0x01, 0x00, 0x00];

pub const HEADER_LEN: usize = 4;

/// Returns the header placed in front of every payload of `kind`.
pub fn header(kind: ActionKind) -> [u8; HEADER_LEN] {
    let [a, b, c] = HEADER_PREFIX;
    [a, b, c, kind.id()]
}

/// Validates the header of `payload` and returns the kind it announces.
pub fn parse_header(payload: &[u8]) -> Result<ActionKind, DecodingError> {
    if payload.len() < HEADER_LEN {
        return Err(DecodingError::MissingHeader { len: payload.len() });
    }
    let prefix = [payload[0], payload[1], payload[2]];
    if prefix != HEADER_PREFIX {
        return Err(DecodingError::UnsupportedVersion(prefix));
    }
    Ok(ActionKind::try_from(payload[3])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions_relay_shared::ActionTypeError;

    #[test]
    fn test_header_ends_with_kind_id() {
        assert_eq!(header(ActionKind::LimitOrder), [0x01, 0x00, 0x00, 0x01]);
        assert_eq!(header(ActionKind::AddApiWallet), [0x01, 0x00, 0x00, 0x09]);
    }

    #[test]
    fn test_parse_header_errors() {
        assert_eq!(
            parse_header(&[0x01, 0x00]),
            Err(DecodingError::MissingHeader { len: 2 })
        );
        assert_eq!(
            parse_header(&[0x02, 0x00, 0x00, 0x01]),
            Err(DecodingError::UnsupportedVersion([0x02, 0x00, 0x00]))
        );
        assert_eq!(
            parse_header(&[0x01, 0x00, 0x00, 0x00]),
            Err(DecodingError::InvalidField(
                ActionTypeError::UnknownActionKind(0)
            ))
        );
    }

    #[test]
    fn test_parse_header_accepts_every_kind() {
        for kind in ActionKind::ALL {
            assert_eq!(parse_header(&header(kind)), Ok(kind));
        }
    }
}
