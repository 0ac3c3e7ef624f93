//! Curve configuration.
//!
//! Integers are written as decimal strings so that parameters larger than
//! any JSON number type survive a round trip:
//!
//! ```json
//! { "modulus": "7", "a": "0", "b": "3", "order": "13",
//!   "generator": { "x": "4", "y": "2" } }
//! ```
//!
//! Without a `generator` the first point of a fresh
//! [`RandomPoints`](crate::RandomPoints) sequence is used.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{Curve, Error, Group};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveConfig {
    #[serde(with = "decimal")]
    pub modulus: BigUint,
    #[serde(with = "decimal")]
    pub a: BigUint,
    #[serde(with = "decimal")]
    pub b: BigUint,
    /// Number of points in the group generated by `generator`.
    #[serde(with = "decimal")]
    pub order: BigUint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<Coordinates>,
}

/// Integer coordinate pair of an affine point.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(with = "decimal")]
    pub x: BigUint,
    #[serde(with = "decimal")]
    pub y: BigUint,
}

impl CurveConfig {
    /// `y^2 = x^3 + 3` over `GF(7)`, 13 points, sampled generator `(4, 2)`.
    pub fn toy() -> Self {
        CurveConfig {
            modulus: 7u32.into(),
            a: 0u32.into(),
            b: 3u32.into(),
            order: 13u32.into(),
            generator: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}

impl Group {
    pub fn from_config(config: &CurveConfig) -> Result<Self, Error> {
        let curve = Curve::new(config.modulus.clone(), config.a.clone(), config.b.clone())?;
        match &config.generator {
            Some(Coordinates { x, y }) => {
                let generator = curve.point(x.clone(), y.clone())?;
                Group::new(curve, config.order.clone(), generator)
            }
            None => Group::with_sampled_generator(curve, config.order.clone()),
        }
    }
}

/// Serde adapter writing a `BigUint` as a decimal string.
pub(crate) mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<BigUint>().map_err(de::Error::custom)
    }
}
