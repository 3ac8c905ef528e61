//! Route segment codec: any serde value as URL-safe base64 of its CBOR encoding.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


// Routable segments need Display + FromStr + Default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Option<String> {
    let mut serialized = Vec::new();
    ciborium::into_writer(value, &mut serialized).ok()?;
    Some(URL_SAFE.encode(serialized))
}

// An unencodable value renders as an empty segment, which then fails to parse.
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(segment) = encode_segment(self) {
            f.write_str(&segment)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "route segment is not base64: {}", err),
            Self::CiboriumError(err) => write!(f, "route segment does not hold the expected state: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes()).map_err(StateParseError::DecodeError)?;
        ciborium::from_reader(bytes.as_slice()).map_err(StateParseError::CiboriumError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::MarketplaceQuery;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_state_survives_the_url() {
        let query = MarketplaceQuery::from_query_string("kathak for kids").with_filter("city", "Jaipur");
        let segment = UrlParam::from(query.clone()).to_string();

        assert!(!segment.contains('/'));
        let parsed: UrlParam<MarketplaceQuery> = segment.parse().unwrap();
        assert_eq!(parsed.into_inner(), query);
    }

    #[test]
    fn tampered_segment_is_rejected() {
        assert!(matches!("%%%".parse::<UrlParam<MarketplaceQuery>>(), Err(StateParseError::DecodeError(_))));
    }
}
