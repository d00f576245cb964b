//! One entry point per action kind, plus the fixed-parameter smoke tests.
use actions_relay_shared::types::{
    ActionId, AddApiWallet, FinalizeEvmContract, LimitOrder, SpotSend, StakingDeposit,
    StakingWithdraw, TokenDelegate, UsdClassTransfer, VaultTransfer,
};
use alloy::primitives::Address;

use super::ActionLog;
use crate::errors::ActionLogError;
use crate::presets;

impl ActionLog {
    pub async fn send_limit_order(
        &self,
        caller: Address,
        params: LimitOrder,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_vault_transfer(
        &self,
        caller: Address,
        params: VaultTransfer,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_token_delegate(
        &self,
        caller: Address,
        params: TokenDelegate,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_staking_deposit(
        &self,
        caller: Address,
        params: StakingDeposit,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_staking_withdraw(
        &self,
        caller: Address,
        params: StakingWithdraw,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_spot_send(
        &self,
        caller: Address,
        params: SpotSend,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_usd_class_transfer(
        &self,
        caller: Address,
        params: UsdClassTransfer,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    pub async fn send_finalize_evm_contract(
        &self,
        caller: Address,
        params: FinalizeEvmContract,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    /// Registers an API wallet. Names longer than
    /// [`actions_relay_codec::MAX_API_WALLET_NAME_LEN`] bytes are rejected.
    pub async fn send_add_api_wallet(
        &self,
        caller: Address,
        params: AddApiWallet,
    ) -> Result<ActionId, ActionLogError> {
        self.submit(caller, params.into()).await
    }

    /// Submits [`presets::test_limit_order`].
    pub async fn send_test_limit_order(&self, caller: Address) -> Result<ActionId, ActionLogError> {
        self.send_limit_order(caller, presets::test_limit_order()).await
    }

    /// Submits [`presets::test_vault_transfer`] with the caller as vault.
    pub async fn send_test_vault_transfer(
        &self,
        caller: Address,
    ) -> Result<ActionId, ActionLogError> {
        self.send_vault_transfer(caller, presets::test_vault_transfer(caller))
            .await
    }

    /// Submits [`presets::test_token_delegate`].
    pub async fn send_test_token_delegate(
        &self,
        caller: Address,
    ) -> Result<ActionId, ActionLogError> {
        self.send_token_delegate(caller, presets::test_token_delegate())
            .await
    }
}
