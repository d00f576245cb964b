mod action;
mod action_event;
mod action_kind;
mod action_record;
mod params;

pub use action::Action;
pub use action_event::ActionLogEvent;
pub use action_kind::ActionKind;
pub use action_record::{ActionId, ActionRecord, NewActionRecord};
pub use params::{
    AddApiWallet, FinalizeEvmContract, FinalizeVariant, LimitOrder, SpotSend, StakingDeposit,
    StakingWithdraw, TimeInForce, TokenDelegate, UsdClassTransfer, VaultTransfer,
};
