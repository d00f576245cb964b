//! Configuration module for the Actions Relay.
//! Reads settings from the environment and wires the action log together.
mod dependencies;
mod settings;
mod submissions;

pub use dependencies::Dependencies;
pub use settings::Settings;
pub use submissions::{Submission, load_submissions, seed_submissions};
