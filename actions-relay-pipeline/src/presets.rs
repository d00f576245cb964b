//! Sample parameters for smoke-testing a relay.
//!
//! Values mirror the actions a fresh deployment sends to check that the
//! execution layer accepts its payloads: prices and sizes scaled by 10^8, USD
//! amounts by 10^6, token amounts in 18-decimal wei.
use actions_relay_shared::types::{
    Action, LimitOrder, SpotSend, StakingDeposit, TimeInForce, TokenDelegate, VaultTransfer,
};
use alloy::primitives::{Address, address};

/// Validator receiving the sample delegation.
pub const SAMPLE_VALIDATOR: Address = address!("0x1234567890123456789012345678901234567890");

/// One unit of an 18-decimal token.
pub const ONE_TOKEN_WEI: u64 = 1_000_000_000_000_000_000;

/// Good-til-cancelled buy of 100 units of asset 1 at 1000.
pub fn test_limit_order() -> LimitOrder {
    LimitOrder {
        asset: 1,
        is_buy: true,
        limit_px: 100_000_000_000,
        sz: 10_000_000_000,
        reduce_only: false,
        tif: TimeInForce::Gtc,
        cloid: 0,
    }
}

/// Deposit of 1000 USD into `vault`.
pub fn test_vault_transfer(vault: Address) -> VaultTransfer {
    VaultTransfer {
        vault,
        is_deposit: true,
        usd: 1_000_000_000,
    }
}

/// Delegation of one token to [`SAMPLE_VALIDATOR`].
pub fn test_token_delegate() -> TokenDelegate {
    TokenDelegate {
        validator: SAMPLE_VALIDATOR,
        wei: ONE_TOKEN_WEI,
        is_undelegate: false,
    }
}

/// The batch submitted right after deploying a relay owned by `deployer`.
pub fn seed_actions(deployer: Address) -> Vec<Action> {
    vec![
        test_limit_order().into(),
        test_vault_transfer(deployer).into(),
        test_token_delegate().into(),
        StakingDeposit { wei: ONE_TOKEN_WEI }.into(),
        SpotSend {
            destination: deployer,
            token: 1,
            wei: ONE_TOKEN_WEI,
        }
        .into(),
    ]
}
