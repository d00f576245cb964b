//! Static field widths of every action layout.
use actions_relay_shared::types::ActionKind;

use crate::header::HEADER_LEN;

pub const BOOL_LEN: usize = 1;
pub const U8_LEN: usize = 1;
pub const U32_LEN: usize = 4;
pub const U64_LEN: usize = 8;
pub const U128_LEN: usize = 16;
pub const ADDRESS_LEN: usize = 20;

/// Longest API wallet name, in UTF-8 bytes, accepted by the receiver.
pub const MAX_API_WALLET_NAME_LEN: usize = 32;

/// Length of the fixed-width part of the field encoding of `kind`.
///
/// For every kind except `AddApiWallet` this is the whole field encoding.
pub const fn fixed_fields_len(kind: ActionKind) -> usize {
    match kind {
        ActionKind::LimitOrder => {
            U32_LEN + BOOL_LEN + U64_LEN + U64_LEN + BOOL_LEN + U8_LEN + U128_LEN
        }
        ActionKind::VaultTransfer => ADDRESS_LEN + BOOL_LEN + U64_LEN,
        ActionKind::TokenDelegate => ADDRESS_LEN + U64_LEN + BOOL_LEN,
        ActionKind::StakingDeposit | ActionKind::StakingWithdraw => U64_LEN,
        ActionKind::SpotSend => ADDRESS_LEN + U64_LEN + U64_LEN,
        ActionKind::UsdClassTransfer => U64_LEN + BOOL_LEN,
        ActionKind::FinalizeEvmContract => U64_LEN + U8_LEN + U64_LEN,
        ActionKind::AddApiWallet => ADDRESS_LEN,
    }
}

/// Smallest payload the receiver can accept for `kind`.
pub const fn min_payload_len(kind: ActionKind) -> usize {
    HEADER_LEN + fixed_fields_len(kind)
}

/// Whether the layout of `kind` ends with a variable-length field.
pub const fn has_variable_tail(kind: ActionKind) -> bool {
    matches!(kind, ActionKind::AddApiWallet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lengths() {
        assert_eq!(fixed_fields_len(ActionKind::LimitOrder), 39);
        assert_eq!(fixed_fields_len(ActionKind::VaultTransfer), 29);
        assert_eq!(fixed_fields_len(ActionKind::TokenDelegate), 29);
        assert_eq!(fixed_fields_len(ActionKind::StakingDeposit), 8);
        assert_eq!(fixed_fields_len(ActionKind::StakingWithdraw), 8);
        assert_eq!(fixed_fields_len(ActionKind::SpotSend), 36);
        assert_eq!(fixed_fields_len(ActionKind::UsdClassTransfer), 9);
        assert_eq!(fixed_fields_len(ActionKind::FinalizeEvmContract), 17);
        assert_eq!(fixed_fields_len(ActionKind::AddApiWallet), 20);
        assert_eq!(min_payload_len(ActionKind::StakingDeposit), 12);
    }
}
