//! The two growth sequences.

use crate::models::{SequenceKind, Step};

impl SequenceKind {
    /// Value of step `i`: `base * i` for linear growth, `base^i` for exponential.
    pub fn value_at(&self, base: f64, i: i32) -> f64 {
        match self {
            SequenceKind::Linear => base * f64::from(i),
            SequenceKind::Exponential => base.powi(i),
        }
    }

    /// Iterate steps `1..=exponent`. Empty when `exponent < 1`.
    pub fn steps(self, base: f64, exponent: i32) -> impl Iterator<Item = Step> {
        (1..=exponent).map(move |index| Step {
            index,
            value: self.value_at(base, index),
        })
    }
}
