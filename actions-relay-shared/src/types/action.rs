use serde::{Deserialize, Serialize};

use super::action_kind::ActionKind;
use super::params::{
    AddApiWallet, FinalizeEvmContract, LimitOrder, SpotSend, StakingDeposit, StakingWithdraw,
    TokenDelegate, UsdClassTransfer, VaultTransfer,
};

/// Represents one action submitted through the relay, with its typed parameters.
///
/// Each variant maps to exactly one `ActionKind` and one binary layout. In JSON the
/// variant is keyed by the kind label, e.g. `{"STAKING_DEPOSIT": {"wei": 1}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    LimitOrder(LimitOrder),
    VaultTransfer(VaultTransfer),
    TokenDelegate(TokenDelegate),
    StakingDeposit(StakingDeposit),
    StakingWithdraw(StakingWithdraw),
    SpotSend(SpotSend),
    UsdClassTransfer(UsdClassTransfer),
    FinalizeEvmContract(FinalizeEvmContract),
    AddApiWallet(AddApiWallet),
}

impl Action {
    /// Returns the kind of the action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::LimitOrder(_) => ActionKind::LimitOrder,
            Action::VaultTransfer(_) => ActionKind::VaultTransfer,
            Action::TokenDelegate(_) => ActionKind::TokenDelegate,
            Action::StakingDeposit(_) => ActionKind::StakingDeposit,
            Action::StakingWithdraw(_) => ActionKind::StakingWithdraw,
            Action::SpotSend(_) => ActionKind::SpotSend,
            Action::UsdClassTransfer(_) => ActionKind::UsdClassTransfer,
            Action::FinalizeEvmContract(_) => ActionKind::FinalizeEvmContract,
            Action::AddApiWallet(_) => ActionKind::AddApiWallet,
        }
    }
}

macro_rules! impl_from_params {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Action {
                fn from(params: $variant) -> Self {
                    Action::$variant(params)
                }
            }
        )*
    };
}

impl_from_params!(
    LimitOrder,
    VaultTransfer,
    TokenDelegate,
    StakingDeposit,
    StakingWithdraw,
    SpotSend,
    UsdClassTransfer,
    FinalizeEvmContract,
    AddApiWallet,
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;

    #[test]
    fn test_kind_matches_variant() {
        let action = Action::from(StakingWithdraw { wei: 5 });
        assert_eq!(action.kind(), ActionKind::StakingWithdraw);

        let action = Action::from(AddApiWallet {
            api_wallet: Address::ZERO,
            name: String::new(),
        });
        assert_eq!(action.kind(), ActionKind::AddApiWallet);
    }

    #[test]
    fn test_json_is_keyed_by_label() {
        let action: Action =
            serde_json::from_str(r#"{"USD_CLASS_TRANSFER":{"ntl":1000000000,"to_perp":true}}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::UsdClassTransfer(UsdClassTransfer {
                ntl: 1_000_000_000,
                to_perp: true,
            })
        );
    }
}
