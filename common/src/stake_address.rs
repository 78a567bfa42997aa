//! Stake address checks

use crate::credentials::Network;
use crate::node_error::NodeError;

pub const STAKE_ADDRESS_PREFIX: &str = "stake1";
pub const STAKE_ADDRESS_LENGTH: usize = 59;

const MAINNET_STAKE_HRP: &str = "stake";
const TESTNET_STAKE_HRP: &str = "stake_test";

/// Superficial mainnet check: `stake1` prefix and 59 characters, nothing more
pub fn looks_like_stake_address(address: &str) -> bool {
    address.starts_with(STAKE_ADDRESS_PREFIX) && address.len() == STAKE_ADDRESS_LENGTH
}

/// Strict check: the address must decode as bech32 with the stake prefix of `network`
pub fn check_stake_address(address: &str, network: Network) -> Result<(), NodeError> {
    let (hrp, _data) = bech32::decode(address)
        .map_err(|e| NodeError::invalid_param("stakeAddress", &e.to_string()))?;

    let expected = if network.is_mainnet() {
        MAINNET_STAKE_HRP
    } else {
        TESTNET_STAKE_HRP
    };
    if hrp.as_str() != expected {
        return Err(NodeError::invalid_param(
            "stakeAddress",
            &format!("expected {} prefix for {}, got {}", expected, network, hrp.as_str()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bech32::{Bech32, Hrp};

    fn encode(hrp: &str) -> String {
        let mut payload = vec![0xe1u8];
        payload.extend_from_slice(&[0x33; 28]);
        bech32::encode::<Bech32>(Hrp::parse(hrp).unwrap(), &payload).unwrap()
    }

    #[test]
    fn test_superficial_check() {
        let address = encode("stake");
        assert_eq!(address.len(), STAKE_ADDRESS_LENGTH);
        assert!(looks_like_stake_address(&address));
        assert!(!looks_like_stake_address("stake1short"));
        assert!(!looks_like_stake_address(&encode("stake_test")));
    }

    #[test]
    fn test_strict_check_matches_network() {
        assert!(check_stake_address(&encode("stake"), Network::Mainnet).is_ok());
        assert!(check_stake_address(&encode("stake_test"), Network::Preprod).is_ok());
        assert!(check_stake_address(&encode("stake_test"), Network::Preview).is_ok());
    }

    #[test]
    fn test_strict_check_rejects_wrong_prefix() {
        let err = check_stake_address(&encode("stake"), Network::Preprod).unwrap_err();
        assert!(err.is_invalid_input());
        let err = check_stake_address(&encode("addr"), Network::Mainnet).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_strict_check_rejects_garbage() {
        assert!(check_stake_address("stake1notbech32!", Network::Mainnet).is_err());
    }
}
