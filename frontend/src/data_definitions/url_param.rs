//! Typed state carried in a catalog link.
//!
//! A value is written as CBOR and then as unpadded url-safe base64, so it fits in a query
//! argument without escaping. Padded input is accepted when parsing.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StateParseError {
    Base64(base64::DecodeError),
    Cbor(String),
}

impl Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateParseError::Base64(err) => write!(f, "link state is not url-safe base64: {err}"),
            StateParseError::Cbor(err) => write!(f, "link state does not decode: {err}"),
        }
    }
}

impl std::error::Error for StateParseError {}

fn to_link_text<T: Serialize>(value: &T) -> Option<String> {
    let mut cbor = Vec::new();
    ciborium::into_writer(value, &mut cbor).ok()?;
    Some(URL_SAFE_NO_PAD.encode(cbor))
}

fn from_link_text<T: DeserializeOwned>(text: &str) -> Result<T, StateParseError> {
    let cbor = URL_SAFE_NO_PAD
        .decode(text.trim().trim_end_matches('='))
        .map_err(StateParseError::Base64)?;
    ciborium::from_reader(cbor.as_slice()).map_err(|err| StateParseError::Cbor(err.to_string()))
}

// The router writes query arguments with Display and reads them back with FromStr.
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match to_link_text(&self.0) {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl<T: DeserializeOwned> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_link_text(s).map(UrlParam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::catalog_seed::CatalogSeed;

    #[test]
    fn seed_survives_the_url() {
        let seed = UrlParam(CatalogSeed { category: Some("Health & Medicine".to_string()), query: "dr. fatima".to_string() });
        let encoded = seed.to_string();
        assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(encoded.parse::<UrlParam<CatalogSeed>>().unwrap(), seed);
    }

    #[test]
    fn padded_text_is_accepted() {
        let seed = UrlParam(CatalogSeed::category("Languages"));
        let padded = format!("{seed}==");
        assert_eq!(padded.parse::<UrlParam<CatalogSeed>>().unwrap(), seed);
    }

    #[test]
    fn garbage_is_a_base64_error() {
        let err = "not base64 !!".parse::<UrlParam<CatalogSeed>>().unwrap_err();
        assert!(matches!(err, StateParseError::Base64(_)));
        assert!(err.to_string().starts_with("link state is not url-safe base64"));
    }

    #[test]
    fn base64_that_is_not_a_seed_is_a_cbor_error() {
        let text = URL_SAFE_NO_PAD.encode([0xff, 0x00, 0x13]);
        let err = text.parse::<UrlParam<CatalogSeed>>().unwrap_err();
        assert!(matches!(err, StateParseError::Cbor(_)));
    }
}
