mod action_log;
mod dispatch;

pub use action_log::ActionLogError;
pub use dispatch::DispatchError;
