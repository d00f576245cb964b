//! Per-kind field encoding.
use actions_relay_shared::types::{
    Action, ActionKind, AddApiWallet, FinalizeEvmContract, LimitOrder, SpotSend, StakingDeposit,
    StakingWithdraw, TokenDelegate, UsdClassTransfer, VaultTransfer,
};
use alloy::primitives::Bytes;

use crate::errors::EncodingError;
use crate::layout::MAX_API_WALLET_NAME_LEN;
use crate::writer::PayloadWriter;

/// Implemented by the parameters of every action kind.
pub trait EncodeAction {
    /// Kind announced in the payload header.
    const KIND: ActionKind;

    /// Produces the full payload: header followed by the fixed-order fields.
    fn encode(&self) -> Result<Bytes, EncodingError>;
}

impl EncodeAction for LimitOrder {
    const KIND: ActionKind = ActionKind::LimitOrder;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer
            .put_u32(self.asset)
            .put_bool(self.is_buy)
            .put_u64(self.limit_px)
            .put_u64(self.sz)
            .put_bool(self.reduce_only)
            .put_u8(self.tif.into())
            .put_u128(self.cloid);
        Ok(writer.finish())
    }
}

impl EncodeAction for VaultTransfer {
    const KIND: ActionKind = ActionKind::VaultTransfer;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer
            .put_address(&self.vault)
            .put_bool(self.is_deposit)
            .put_u64(self.usd);
        Ok(writer.finish())
    }
}

impl EncodeAction for TokenDelegate {
    const KIND: ActionKind = ActionKind::TokenDelegate;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer
            .put_address(&self.validator)
            .put_u64(self.wei)
            .put_bool(self.is_undelegate);
        Ok(writer.finish())
    }
}

impl EncodeAction for StakingDeposit {
    const KIND: ActionKind = ActionKind::StakingDeposit;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer.put_u64(self.wei);
        Ok(writer.finish())
    }
}

impl EncodeAction for StakingWithdraw {
    const KIND: ActionKind = ActionKind::StakingWithdraw;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer.put_u64(self.wei);
        Ok(writer.finish())
    }
}

impl EncodeAction for SpotSend {
    const KIND: ActionKind = ActionKind::SpotSend;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer
            .put_address(&self.destination)
            .put_u64(self.token)
            .put_u64(self.wei);
        Ok(writer.finish())
    }
}

impl EncodeAction for UsdClassTransfer {
    const KIND: ActionKind = ActionKind::UsdClassTransfer;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer.put_u64(self.ntl).put_bool(self.to_perp);
        Ok(writer.finish())
    }
}

impl EncodeAction for FinalizeEvmContract {
    const KIND: ActionKind = ActionKind::FinalizeEvmContract;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer
            .put_u64(self.token)
            .put_u8(self.variant.into())
            .put_u64(self.create_nonce);
        Ok(writer.finish())
    }
}

impl EncodeAction for AddApiWallet {
    const KIND: ActionKind = ActionKind::AddApiWallet;

    fn encode(&self) -> Result<Bytes, EncodingError> {
        let mut writer = PayloadWriter::new(Self::KIND);
        writer
            .put_address(&self.api_wallet)
            .put_text(&self.name, MAX_API_WALLET_NAME_LEN)?;
        Ok(writer.finish())
    }
}

/// Encodes any action into the payload forwarded to the receiver.
pub fn encode(action: &Action) -> Result<Bytes, EncodingError> {
    match action {
        Action::LimitOrder(params) => params.encode(),
        Action::VaultTransfer(params) => params.encode(),
        Action::TokenDelegate(params) => params.encode(),
        Action::StakingDeposit(params) => params.encode(),
        Action::StakingWithdraw(params) => params.encode(),
        Action::SpotSend(params) => params.encode(),
        Action::UsdClassTransfer(params) => params.encode(),
        Action::FinalizeEvmContract(params) => params.encode(),
        Action::AddApiWallet(params) => params.encode(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::header::header;
    use crate::layout::min_payload_len;
    use actions_relay_shared::types::{FinalizeVariant, TimeInForce};
    use alloy::hex::FromHex;
    use alloy::primitives::Address;

    fn validator() -> Address {
        Address::from_hex("0x1234567890123456789012345678901234567890").unwrap()
    }

    fn sample_actions() -> Vec<Action> {
        vec![
            Action::LimitOrder(LimitOrder {
                asset: 1,
                is_buy: true,
                limit_px: 100_000_000_000,
                sz: 10_000_000_000,
                reduce_only: false,
                tif: TimeInForce::Gtc,
                cloid: 0,
            }),
            Action::VaultTransfer(VaultTransfer {
                vault: validator(),
                is_deposit: true,
                usd: 1_000_000_000,
            }),
            Action::TokenDelegate(TokenDelegate {
                validator: validator(),
                wei: 1_000_000_000_000_000_000,
                is_undelegate: false,
            }),
            Action::StakingDeposit(StakingDeposit {
                wei: 1_000_000_000_000_000_000,
            }),
            Action::StakingWithdraw(StakingWithdraw {
                wei: 500_000_000_000_000_000,
            }),
            Action::SpotSend(SpotSend {
                destination: validator(),
                token: 1,
                wei: 1_000_000_000_000_000_000,
            }),
            Action::UsdClassTransfer(UsdClassTransfer {
                ntl: 1_000_000_000,
                to_perp: true,
            }),
            Action::FinalizeEvmContract(FinalizeEvmContract {
                token: 1,
                variant: FinalizeVariant::Create,
                create_nonce: 0,
            }),
            Action::AddApiWallet(AddApiWallet {
                api_wallet: Address::from_hex("0xabcdef1234567890abcdef1234567890abcdef12")
                    .unwrap(),
                name: "Test API Wallet".to_string(),
            }),
        ]
    }

    #[test]
    fn test_every_kind_starts_with_its_header_and_has_layout_length() {
        for action in sample_actions() {
            let kind = action.kind();
            let payload = encode(&action).unwrap();
            assert_eq!(&payload[..4], &header(kind), "{kind}");

            let expected = match &action {
                Action::AddApiWallet(params) => min_payload_len(kind) + params.name.len(),
                _ => min_payload_len(kind),
            };
            assert_eq!(payload.len(), expected, "{kind}");
        }
    }

    #[test]
    fn test_encoding_is_idempotent() {
        for action in sample_actions() {
            assert_eq!(encode(&action).unwrap(), encode(&action).unwrap());
        }
    }

    #[test]
    fn test_limit_order_layout() {
        let payload = encode(&sample_actions()[0]).unwrap();
        let mut expected = vec![0x01, 0x00, 0x00, 0x01];
        expected.extend_from_slice(&1u32.to_be_bytes());
        expected.push(1);
        expected.extend_from_slice(&100_000_000_000u64.to_be_bytes());
        expected.extend_from_slice(&10_000_000_000u64.to_be_bytes());
        expected.push(0);
        expected.push(2);
        expected.extend_from_slice(&0u128.to_be_bytes());
        assert_eq!(&payload[..], expected.as_slice());
    }

    #[test]
    fn test_vault_transfer_layout() {
        let payload = encode(&sample_actions()[1]).unwrap();
        assert_eq!(&payload[4..24], validator().as_slice());
        assert_eq!(payload[24], 1);
        assert_eq!(&payload[25..], &1_000_000_000u64.to_be_bytes());
    }

    #[test]
    fn test_token_delegate_layout() {
        let action = TokenDelegate {
            validator: validator(),
            wei: 1_000_000_000_000_000_000,
            is_undelegate: true,
        };
        let payload = action.encode().unwrap();
        let mut expected = vec![0x01, 0x00, 0x00, 0x03];
        expected.extend_from_slice(validator().as_slice());
        expected.extend_from_slice(&1_000_000_000_000_000_000u64.to_be_bytes());
        expected.push(1);
        assert_eq!(&payload[..], expected.as_slice());
    }

    #[test]
    fn test_staking_layouts_differ_only_by_kind() {
        let deposit = StakingDeposit {
            wei: 1_000_000_000_000_000_000,
        }
        .encode()
        .unwrap();
        let mut expected = vec![0x01, 0x00, 0x00, 0x04];
        expected.extend_from_slice(&1_000_000_000_000_000_000u64.to_be_bytes());
        assert_eq!(&deposit[..], expected.as_slice());

        let withdraw = StakingWithdraw {
            wei: 500_000_000_000_000_000,
        }
        .encode()
        .unwrap();
        let mut expected = vec![0x01, 0x00, 0x00, 0x05];
        expected.extend_from_slice(&500_000_000_000_000_000u64.to_be_bytes());
        assert_eq!(&withdraw[..], expected.as_slice());
    }

    #[test]
    fn test_spot_send_layout() {
        let action = SpotSend {
            destination: validator(),
            token: 7,
            wei: 1_000_000_000_000_000_000,
        };
        let payload = action.encode().unwrap();
        let mut expected = vec![0x01, 0x00, 0x00, 0x06];
        expected.extend_from_slice(validator().as_slice());
        expected.extend_from_slice(&7u64.to_be_bytes());
        expected.extend_from_slice(&1_000_000_000_000_000_000u64.to_be_bytes());
        assert_eq!(&payload[..], expected.as_slice());
    }

    #[test]
    fn test_usd_class_transfer_layout() {
        let action = UsdClassTransfer {
            ntl: 1_000_000_000,
            to_perp: true,
        };
        let payload = action.encode().unwrap();
        let mut expected = vec![0x01, 0x00, 0x00, 0x07];
        expected.extend_from_slice(&1_000_000_000u64.to_be_bytes());
        expected.push(1);
        assert_eq!(&payload[..], expected.as_slice());

        let to_spot = UsdClassTransfer {
            ntl: 1_000_000_000,
            to_perp: false,
        };
        assert_eq!(to_spot.encode().unwrap()[12], 0);
    }

    #[test]
    fn test_every_sample_decodes_back() {
        for action in sample_actions() {
            let payload = encode(&action).unwrap();
            assert_eq!(decode(&payload), Ok(action));
        }
    }

    #[test]
    fn test_finalize_layout_uses_variant_byte() {
        let action = FinalizeEvmContract {
            token: 7,
            variant: FinalizeVariant::Custom,
            create_nonce: u64::MAX,
        };
        let payload = action.encode().unwrap();
        assert_eq!(&payload[4..12], &7u64.to_be_bytes());
        assert_eq!(payload[12], 3);
        assert_eq!(&payload[13..], &[0xffu8; 8]);
    }

    #[test]
    fn test_api_wallet_name_is_trailing_raw_bytes() {
        let action = AddApiWallet {
            api_wallet: Address::ZERO,
            name: "bot".to_string(),
        };
        let payload = action.encode().unwrap();
        assert_eq!(&payload[24..], b"bot");

        let unnamed = AddApiWallet {
            api_wallet: Address::ZERO,
            name: String::new(),
        };
        assert_eq!(
            unnamed.encode().unwrap().len(),
            min_payload_len(ActionKind::AddApiWallet)
        );
    }

    #[test]
    fn test_api_wallet_name_at_limit_is_accepted() {
        let action = AddApiWallet {
            api_wallet: Address::ZERO,
            name: "n".repeat(MAX_API_WALLET_NAME_LEN),
        };
        assert!(action.encode().is_ok());
    }

    #[test]
    fn test_api_wallet_name_over_limit_is_rejected() {
        let action = AddApiWallet {
            api_wallet: Address::ZERO,
            name: "n".repeat(MAX_API_WALLET_NAME_LEN + 1),
        };
        assert_eq!(
            action.encode(),
            Err(EncodingError::NameTooLong {
                len: MAX_API_WALLET_NAME_LEN + 1,
                max: MAX_API_WALLET_NAME_LEN,
            })
        );
    }
}
