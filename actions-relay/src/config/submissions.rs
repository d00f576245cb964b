//! Batches of submissions fed to the relay at start-up.

use std::path::Path;

use actions_relay_pipeline::presets::seed_actions;
use actions_relay_shared::types::Action;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::RelayError;

/// One action to submit, together with the account submitting it.
///
/// In JSON: `{"caller": "0x...", "action": {"STAKING_DEPOSIT": {"wei": 1}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub caller: Address,
    pub action: Action,
}

/// Reads a JSON array of submissions from `path`.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>, RelayError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// The deployment seed batch, submitted by `owner`.
pub fn seed_submissions(owner: Address) -> Vec<Submission> {
    seed_actions(owner)
        .into_iter()
        .map(|action| Submission {
            caller: owner,
            action,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actions_relay_shared::types::{FinalizeEvmContract, FinalizeVariant, StakingDeposit};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_submissions() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"caller": "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045", "action": {{"STAKING_DEPOSIT": {{"wei": 1000}}}}}},
                {{"caller": "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", "action": {{"FINALIZE_EVM_CONTRACT": {{"token": 1, "variant": 2, "create_nonce": 7}}}}}}
            ]"#
        )
        .unwrap();

        let submissions = load_submissions(file.path()).unwrap();
        assert_eq!(submissions.len(), 2);
        assert_eq!(
            submissions[0].action,
            Action::StakingDeposit(StakingDeposit { wei: 1000 })
        );
        assert_eq!(submissions[1].caller, Address::repeat_byte(0xaa));
        assert_eq!(
            submissions[1].action,
            Action::FinalizeEvmContract(FinalizeEvmContract {
                token: 1,
                variant: FinalizeVariant::Create2,
                create_nonce: 7,
            })
        );
    }

    #[test]
    fn test_load_submissions_rejects_unknown_kind() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"caller": "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", "action": {{"BURN": {{}}}}}}]"#
        )
        .unwrap();

        assert!(matches!(
            load_submissions(file.path()),
            Err(RelayError::Json(_))
        ));
    }

    #[test]
    fn test_load_submissions_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_submissions(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(RelayError::Io(_))));
    }

    #[test]
    fn test_seed_submissions_use_owner() {
        let owner = Address::repeat_byte(0x01);
        let submissions = seed_submissions(owner);

        assert_eq!(submissions.len(), 5);
        assert!(submissions.iter().all(|s| s.caller == owner));
    }
}
