//! Receiver-side parsing of payloads.
//!
//! The relay itself never needs to read a payload back; this is the view of the
//! execution layer, used to validate payloads locally before anything is sent.
use actions_relay_shared::types::{
    Action, ActionKind, AddApiWallet, FinalizeEvmContract, FinalizeVariant, LimitOrder, SpotSend,
    StakingDeposit, StakingWithdraw, TimeInForce, TokenDelegate, UsdClassTransfer, VaultTransfer,
};

use crate::errors::DecodingError;
use crate::header::{HEADER_LEN, parse_header};
use crate::layout::MAX_API_WALLET_NAME_LEN;
use crate::reader::PayloadReader;

/// Parses a payload produced by [`crate::encode`] back into its action.
pub fn decode(payload: &[u8]) -> Result<Action, DecodingError> {
    let kind = parse_header(payload)?;
    let mut reader = PayloadReader::new(kind, &payload[HEADER_LEN..])?;

    let action = match kind {
        ActionKind::LimitOrder => Action::LimitOrder(LimitOrder {
            asset: reader.u32(),
            is_buy: reader.bool()?,
            limit_px: reader.u64(),
            sz: reader.u64(),
            reduce_only: reader.bool()?,
            tif: TimeInForce::try_from(reader.u8())?,
            cloid: reader.u128(),
        }),
        ActionKind::VaultTransfer => Action::VaultTransfer(VaultTransfer {
            vault: reader.address(),
            is_deposit: reader.bool()?,
            usd: reader.u64(),
        }),
        ActionKind::TokenDelegate => Action::TokenDelegate(TokenDelegate {
            validator: reader.address(),
            wei: reader.u64(),
            is_undelegate: reader.bool()?,
        }),
        ActionKind::StakingDeposit => Action::StakingDeposit(StakingDeposit { wei: reader.u64() }),
        ActionKind::StakingWithdraw => {
            Action::StakingWithdraw(StakingWithdraw { wei: reader.u64() })
        }
        ActionKind::SpotSend => Action::SpotSend(SpotSend {
            destination: reader.address(),
            token: reader.u64(),
            wei: reader.u64(),
        }),
        ActionKind::UsdClassTransfer => Action::UsdClassTransfer(UsdClassTransfer {
            ntl: reader.u64(),
            to_perp: reader.bool()?,
        }),
        ActionKind::FinalizeEvmContract => Action::FinalizeEvmContract(FinalizeEvmContract {
            token: reader.u64(),
            variant: FinalizeVariant::try_from(reader.u8())?,
            create_nonce: reader.u64(),
        }),
        ActionKind::AddApiWallet => Action::AddApiWallet(AddApiWallet {
            api_wallet: reader.address(),
            name: reader.rest_as_text(MAX_API_WALLET_NAME_LEN)?,
        }),
    };
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{EncodeAction, encode};
    use actions_relay_shared::ActionTypeError;
    use alloy::primitives::Address;

    #[test]
    fn test_decode_restores_limit_order() {
        let order = LimitOrder {
            asset: 42,
            is_buy: false,
            limit_px: 123_456,
            sz: 789,
            reduce_only: true,
            tif: TimeInForce::Ioc,
            cloid: u128::MAX - 1,
        };
        let payload = order.encode().unwrap();
        assert_eq!(decode(&payload), Ok(Action::LimitOrder(order)));
    }

    #[test]
    fn test_decode_restores_api_wallet_name() {
        let action = Action::AddApiWallet(AddApiWallet {
            api_wallet: Address::repeat_byte(0xab),
            name: "trading bot".to_string(),
        });
        let payload = encode(&action).unwrap();
        assert_eq!(decode(&payload), Ok(action));
    }

    #[test]
    fn test_decode_rejects_truncated_fields() {
        let payload = StakingDeposit { wei: 1 }.encode().unwrap();
        assert_eq!(
            decode(&payload[..payload.len() - 1]),
            Err(DecodingError::Truncated {
                kind: ActionKind::StakingDeposit,
                expected: 8,
                actual: 7,
            })
        );
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut payload = UsdClassTransfer {
            ntl: 1,
            to_perp: false,
        }
        .encode()
        .unwrap()
        .to_vec();
        payload.push(0);
        assert_eq!(
            decode(&payload),
            Err(DecodingError::TrailingBytes {
                kind: ActionKind::UsdClassTransfer,
                extra: 1,
            })
        );
    }

    #[test]
    fn test_decode_rejects_invalid_bool_and_enum_bytes() {
        let mut payload = UsdClassTransfer {
            ntl: 1,
            to_perp: true,
        }
        .encode()
        .unwrap()
        .to_vec();
        let last = payload.len() - 1;
        payload[last] = 2;
        assert_eq!(decode(&payload), Err(DecodingError::InvalidBool(2)));

        let mut payload = FinalizeEvmContract {
            token: 1,
            variant: FinalizeVariant::Create,
            create_nonce: 0,
        }
        .encode()
        .unwrap()
        .to_vec();
        payload[12] = 9;
        assert_eq!(
            decode(&payload),
            Err(DecodingError::InvalidField(
                ActionTypeError::InvalidFinalizeVariant(9)
            ))
        );
    }

    #[test]
    fn test_decode_rejects_non_utf8_name() {
        let mut payload = AddApiWallet {
            api_wallet: Address::ZERO,
            name: String::new(),
        }
        .encode()
        .unwrap()
        .to_vec();
        payload.extend_from_slice(&[0xff, 0xfe]);
        assert_eq!(decode(&payload), Err(DecodingError::InvalidUtf8));
    }
}
