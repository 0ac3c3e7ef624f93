//! Pedersen commitments over a prime-order curve group.
//!
//! A commitment to `value` is `blinding * H + value * G`, where `G` and `H`
//! are two generators with no known discrete-log relation and `blinding` is
//! a fresh random scalar. The commitment hides `value` as long as the
//! blinding stays secret, and binds the committer to `value` as long as
//! discrete logarithms in the group are hard.
//!
//! The small curves this crate is usually run on make discrete logarithms
//! easy (see [`curve::Group::discrete_log`]), so binding is illustrative
//! only.
//!
//! # Example
//!
//! ```
//! use curve::{CurveConfig, Group, RandomPoints};
//! use pedersen::Opening;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let group = Group::from_config(&CurveConfig::toy()).expect("toy group");
//! let mut points = RandomPoints::new(group.curve().clone());
//! let g = points.next_point().expect("first point");
//! let h = group.nth_point(5u32);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let opening = Opening::open(&group, group.scalar(2u32), g, h, &mut rng).expect("open");
//! let commitment = opening.close();
//! assert!(opening.verify(&commitment));
//! ```
//!
//! # Security Considerations
//!
//! - `H` must not be derived from `G` by a known scalar; [`Opening::open`]
//!   only catches the trivial cases
//! - Each commitment must use a fresh blinding factor
//! - Revealing the blinding factor opens the commitment

mod errors;
mod opening;

#[cfg(test)]
mod tests;

pub use errors::CommitmentError;
pub use opening::Opening;
