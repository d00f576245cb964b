use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ActionTypeError;

/// Identifies the operation family of an action.
///
/// The discriminant is the byte written in the last position of the payload
/// header. Values follow declaration order starting at 1; 0 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ActionKind {
    LimitOrder = 1,
    VaultTransfer = 2,
    TokenDelegate = 3,
    StakingDeposit = 4,
    StakingWithdraw = 5,
    SpotSend = 6,
    UsdClassTransfer = 7,
    FinalizeEvmContract = 8,
    AddApiWallet = 9,
}

impl ActionKind {
    /// Every kind, in wire id order.
    pub const ALL: [ActionKind; 9] = [
        ActionKind::LimitOrder,
        ActionKind::VaultTransfer,
        ActionKind::TokenDelegate,
        ActionKind::StakingDeposit,
        ActionKind::StakingWithdraw,
        ActionKind::SpotSend,
        ActionKind::UsdClassTransfer,
        ActionKind::FinalizeEvmContract,
        ActionKind::AddApiWallet,
    ];

    /// Returns the wire id of the kind.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable label stored alongside log records.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::LimitOrder => "LIMIT_ORDER",
            ActionKind::VaultTransfer => "VAULT_TRANSFER",
            ActionKind::TokenDelegate => "TOKEN_DELEGATE",
            ActionKind::StakingDeposit => "STAKING_DEPOSIT",
            ActionKind::StakingWithdraw => "STAKING_WITHDRAW",
            ActionKind::SpotSend => "SPOT_SEND",
            ActionKind::UsdClassTransfer => "USD_CLASS_TRANSFER",
            ActionKind::FinalizeEvmContract => "FINALIZE_EVM_CONTRACT",
            ActionKind::AddApiWallet => "ADD_API_WALLET",
        }
    }
}

impl TryFrom<u8> for ActionKind {
    type Error = ActionTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.id() == value)
            .ok_or(ActionTypeError::UnknownActionKind(value))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
