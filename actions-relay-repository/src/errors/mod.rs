mod action_log;

pub use action_log::ActionLogRepositoryError;
