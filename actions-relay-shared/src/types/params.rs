//! Typed parameters for every action kind.
//!
//! Field names follow the vocabulary of the execution layer (`limit_px`, `sz`,
//! `cloid`, `ntl`, ...). Amounts are raw integers in the receiver's fixed-point
//! units; no scaling happens on this side.
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::ActionTypeError;

/// Order lifetime policy of a limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TimeInForce {
    /// Add liquidity only.
    Alo = 1,
    /// Good til cancelled.
    Gtc = 2,
    /// Immediate or cancel.
    Ioc = 3,
}

impl TryFrom<u8> for TimeInForce {
    type Error = ActionTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TimeInForce::Alo),
            2 => Ok(TimeInForce::Gtc),
            3 => Ok(TimeInForce::Ioc),
            other => Err(ActionTypeError::InvalidTimeInForce(other)),
        }
    }
}

impl From<TimeInForce> for u8 {
    fn from(value: TimeInForce) -> Self {
        value as u8
    }
}

/// Deployment flavour used when finalizing the EVM contract linked to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum FinalizeVariant {
    Create = 1,
    Create2 = 2,
    Custom = 3,
}

impl TryFrom<u8> for FinalizeVariant {
    type Error = ActionTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FinalizeVariant::Create),
            2 => Ok(FinalizeVariant::Create2),
            3 => Ok(FinalizeVariant::Custom),
            other => Err(ActionTypeError::InvalidFinalizeVariant(other)),
        }
    }
}

impl From<FinalizeVariant> for u8 {
    fn from(value: FinalizeVariant) -> Self {
        value as u8
    }
}

/// Places a limit order on a perpetual or spot asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub asset: u32,
    pub is_buy: bool,
    pub limit_px: u64,
    pub sz: u64,
    pub reduce_only: bool,
    pub tif: TimeInForce,
    /// Client order id, 0 when unused.
    pub cloid: u128,
}

/// Moves USD into or out of a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultTransfer {
    pub vault: Address,
    pub is_deposit: bool,
    pub usd: u64,
}

/// Delegates staked tokens to a validator, or undelegates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDelegate {
    pub validator: Address,
    pub wei: u64,
    pub is_undelegate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingDeposit {
    pub wei: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingWithdraw {
    pub wei: u64,
}

/// Sends a spot token to another account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotSend {
    pub destination: Address,
    pub token: u64,
    pub wei: u64,
}

/// Moves USD notional between the spot and perp balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsdClassTransfer {
    pub ntl: u64,
    pub to_perp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeEvmContract {
    pub token: u64,
    pub variant: FinalizeVariant,
    pub create_nonce: u64,
}

/// Registers an API wallet under a name. An empty name is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddApiWallet {
    pub api_wallet: Address,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_in_force_wire_values() {
        assert_eq!(u8::from(TimeInForce::Alo), 1);
        assert_eq!(u8::from(TimeInForce::Gtc), 2);
        assert_eq!(u8::from(TimeInForce::Ioc), 3);
        assert_eq!(
            TimeInForce::try_from(0),
            Err(ActionTypeError::InvalidTimeInForce(0))
        );
        assert_eq!(
            TimeInForce::try_from(4),
            Err(ActionTypeError::InvalidTimeInForce(4))
        );
    }

    #[test]
    fn test_finalize_variant_rejects_unknown_values() {
        assert_eq!(FinalizeVariant::try_from(2), Ok(FinalizeVariant::Create2));
        assert_eq!(
            FinalizeVariant::try_from(7),
            Err(ActionTypeError::InvalidFinalizeVariant(7))
        );
    }

    #[test]
    fn test_limit_order_deserializes_tif_from_byte() {
        let order: LimitOrder = serde_json::from_str(
            r#"{"asset":1,"is_buy":true,"limit_px":100000000000,"sz":10000000000,"reduce_only":false,"tif":2,"cloid":0}"#,
        )
        .unwrap();
        assert_eq!(order.tif, TimeInForce::Gtc);

        let invalid = serde_json::from_str::<LimitOrder>(
            r#"{"asset":1,"is_buy":true,"limit_px":1,"sz":1,"reduce_only":false,"tif":9,"cloid":0}"#,
        );
        assert!(invalid.is_err());
    }
}
