//! Lookup table of every multiple of the generator.
//!
//! The table is a cache derived from the group law: entry `i` holds the
//! coordinates of `i * generator`, entry 0 (infinity) is `None`. It can be
//! regenerated bit for bit at any time, and [`PointTable::matches`] detects a
//! table that no longer agrees with the live arithmetic.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{Coordinates, Curve, CurvePoint, Error, Group, GroupLaw};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTable {
    entries: Vec<Option<Coordinates>>,
}

impl PointTable {
    /// Walk `0, G, 2G, ...` until the walk returns to infinity.
    ///
    /// Fails with [`Error::OrderMismatch`] if the walk length differs from
    /// the group order.
    pub fn generate(group: &Group) -> Result<Self, Error> {
        let order = group.order();
        let mut entries = Vec::new();
        let mut current = CurvePoint::Infinity;

        loop {
            entries.push(coordinates(&current));
            if &BigUint::from(entries.len()) > order {
                return Err(Error::OrderMismatch(order.clone()));
            }
            current = group.curve().add(&current, group.generator());
            if current.is_zero() {
                break;
            }
        }

        if &BigUint::from(entries.len()) != order {
            return Err(Error::OrderMismatch(order.clone()));
        }

        Ok(PointTable { entries })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Coordinates of `i * G`; the outer `None` means `i` is out of range.
    pub fn entry(&self, i: usize) -> Option<Option<&Coordinates>> {
        self.entries.get(i).map(Option::as_ref)
    }

    /// `i * G` as a point on `curve`.
    pub fn point(&self, curve: &Curve, i: usize) -> Option<CurvePoint> {
        let point = match self.entries.get(i)? {
            None => CurvePoint::Infinity,
            Some(Coordinates { x, y }) => CurvePoint::Affine {
                x: curve.element(x.clone()),
                y: curve.element(y.clone()),
            },
        };
        Some(point)
    }

    /// Table position of `point`, which is its discrete logarithm.
    pub fn index_of(&self, point: &CurvePoint) -> Option<usize> {
        let target = coordinates(point);
        self.entries.iter().position(|entry| *entry == target)
    }

    /// Whether the table is exactly what `group` generates today.
    pub fn matches(&self, group: &Group) -> bool {
        PointTable::generate(group).is_ok_and(|fresh| fresh == *self)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}

impl Group {
    /// Regenerate the lookup table for this group.
    pub fn point_table(&self) -> Result<PointTable, Error> {
        PointTable::generate(self)
    }
}

fn coordinates(point: &CurvePoint) -> Option<Coordinates> {
    point.xy().map(|(x, y)| Coordinates { x, y })
}
