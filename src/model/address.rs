use std::fmt;

use serde::Serialize;

use crate::constants::ADDRESS_MAX_LEN;
use crate::constants::ADDRESS_MIN_LEN;
use crate::constants::ADDRESS_PREFIXES;
use crate::constants::MULTISIG_ADDRESS_PREFIX;

/// Structural check that `address` plausibly names a Stacks account.
///
/// No checksum verification and no network call: this only gates whether an
/// assessment is worth starting.
pub fn is_checkable_address(address: &str) -> bool {
    if address.is_empty() {
        return false;
    }
    if !ADDRESS_PREFIXES.iter().any(|prefix| address.starts_with(prefix)) {
        return false;
    }
    if address.len() < ADDRESS_MIN_LEN || address.len() > ADDRESS_MAX_LEN {
        return false;
    }
    address[2..].chars().all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    Standard,
    Multisig,
}

/// An address that passed [`is_checkable_address`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckableAddress(String);

impl CheckableAddress {
    pub fn parse(candidate: &str) -> Option<Self> {
        is_checkable_address(candidate).then(|| Self(candidate.to_string()))
    }

    pub fn kind(&self) -> AddressKind {
        if self.0.starts_with(MULTISIG_ADDRESS_PREFIX) {
            AddressKind::Multisig
        } else {
            AddressKind::Standard
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CheckableAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckableAddress {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    const SP_ADDRESS: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";
    const SM_ADDRESS: &str = "SM2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQVX8X0G";

    #[rstest]
    #[case(SP_ADDRESS)]
    #[case(SM_ADDRESS)]
    #[case("SP3FBR2AGK5H9QBDH3EEN6DF8EK8JY7RX8QJ5SVTE")]
    fn accepts_well_formed(#[case] address: &str) {
        assert!(is_checkable_address(address));
        assert_eq!(CheckableAddress::parse(address).unwrap().as_str(), address);
    }

    #[rstest]
    #[case("")]
    #[case("ST2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7")] // testnet prefix
    #[case("sp2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7")] // lowercase prefix
    #[case("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9")] // 38 chars
    #[case("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7X")] // 42 chars
    #[case("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9E-7")]
    #[case("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9E 7")]
    #[case("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7.contract")]
    #[case("SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EÉ")]
    fn rejects_malformed(#[case] address: &str) {
        assert!(!is_checkable_address(address));
        assert!(CheckableAddress::parse(address).is_none());
    }

    #[test]
    fn payload_is_case_insensitive() {
        let lower = format!("SP{}", SP_ADDRESS[2..].to_lowercase());
        assert!(is_checkable_address(&lower));
    }

    #[test]
    fn kind_follows_prefix() {
        assert_eq!(CheckableAddress::parse(SP_ADDRESS).unwrap().kind(), AddressKind::Standard);
        assert_eq!(CheckableAddress::parse(SM_ADDRESS).unwrap().kind(), AddressKind::Multisig);
    }

    proptest! {
        #[test]
        fn foreign_prefix_is_never_checkable(s in "[A-Za-z0-9]{39,41}") {
            prop_assume!(!s.starts_with("SP") && !s.starts_with("SM"));
            prop_assert!(!is_checkable_address(&s));
        }

        #[test]
        fn out_of_range_length_is_never_checkable(
            prefix in prop::sample::select(vec!["SP", "SM"]),
            payload in prop_oneof!["[A-Z0-9]{0,36}", "[A-Z0-9]{40,60}"],
        ) {
            let address = format!("{}{}", prefix, payload);
            prop_assert!(!is_checkable_address(&address));
        }

        #[test]
        fn symbol_in_payload_is_never_checkable(
            prefix in prop::sample::select(vec!["SP", "SM"]),
            head in "[A-Z0-9]{10,20}",
            symbol in "[^A-Za-z0-9]",
            tail in "[A-Z0-9]{10,17}",
        ) {
            let address = format!("{}{}{}{}", prefix, head, symbol, tail);
            prop_assert!(!is_checkable_address(&address));
        }

        #[test]
        fn well_formed_is_checkable(
            prefix in prop::sample::select(vec!["SP", "SM"]),
            payload in "[A-Za-z0-9]{37,39}",
        ) {
            let address = format!("{}{}", prefix, payload);
            prop_assert!(is_checkable_address(&address));
        }
    }
}
