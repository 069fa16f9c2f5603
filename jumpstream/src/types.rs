use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Largest step any jump-ahead operation accepts: `2^63 - 1`.
///
/// A 63-bit step has at most 21 base-8 digits, matching the depth of the
/// precomputed jump tables.
pub const MAX_STEP: u64 = 0x7fff_ffff_ffff_ffff;

/// Number of base-8 digits of [`MAX_STEP`], i.e. the row count of the jump
/// tables.
pub(crate) const MAX_STEP_LOG8: usize = 21;

/// The generators this crate implements.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    /// L'Ecuyer's combined multiple-recursive generator, period about 2^191.
    Mrg32k3a,
    /// The 32-bit Mersenne Twister, period 2^19937 - 1.
    Mt19937,
}

impl GeneratorKind {
    /// Resolves the numeric generator id used by the C API of the reference
    /// implementation (0 = MRG32k3a, 1 = MT19937).
    pub fn from_id(id: u32) -> Result<Self, Error> {
        match id {
            0 => Ok(GeneratorKind::Mrg32k3a),
            1 => Ok(GeneratorKind::Mt19937),
            _ => Err(Error::UnknownGenerator),
        }
    }
}

/// The capability set shared by both generators: seeding, drawing, and
/// jump-ahead. [`MultiStream`](crate::MultiStream) dispatches over concrete
/// implementors; the trait is the seam for generic helpers and tests.
pub trait Generator: Clone {
    /// Smallest value [`Generator::get_u64`] can return.
    const MIN: u64;
    /// Largest value [`Generator::get_u64`] can return.
    const MAX: u64;

    /// Builds a state from an integer seed. The zero-seed substitution is the
    /// caller's concern; any seed is accepted here.
    fn seeded(seed: u64) -> Self;

    /// Reseeds in place.
    fn reseed(&mut self, seed: u64) {
        *self = Self::seeded(seed);
    }

    /// Draws the next integer and advances the state.
    fn get_u64(&mut self) -> u64;

    /// Draws a double in `[0, 1)`.
    fn get_unit_interval(&mut self) -> f64;

    /// Draws a double in `(0, 1)`.
    fn get_unit_interval_open(&mut self) -> f64;

    /// Advances this state by `step` draws in `O(log step)` time.
    ///
    /// A step of zero is a no-op; a step above [`MAX_STEP`] fails with
    /// [`Error::StepTooLarge`].
    fn jump(&mut self, step: u64) -> Result<(), Error>;

    /// Initialization fan-out: `states[0]` holds the seeded initial state on
    /// entry; on return `states[i]` is `states[i - 1]` advanced by `step`.
    ///
    /// The jump operator is computed once and applied `states.len() - 1`
    /// times. A step of zero duplicates the initial state into every slot.
    /// The caller has already validated `step` against [`MAX_STEP`].
    fn jump_seq(states: &mut [Self], step: u64) -> Result<(), Error>;

    /// Advances every state by the same `step`, in place.
    fn jump_all(states: &mut [Self], step: u64) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::{GeneratorKind, MAX_STEP, MAX_STEP_LOG8};
    use crate::error::Error;

    #[test]
    fn generator_ids_match_the_reference_api() {
        assert_eq!(GeneratorKind::from_id(0), Ok(GeneratorKind::Mrg32k3a));
        assert_eq!(GeneratorKind::from_id(1), Ok(GeneratorKind::Mt19937));
        assert_eq!(GeneratorKind::from_id(2), Err(Error::UnknownGenerator));
    }

    #[test]
    fn max_step_fits_the_table_depth() {
        // 21 base-8 digits cover exactly the 63-bit step range.
        assert_eq!(MAX_STEP >> (3 * MAX_STEP_LOG8), 0);
        assert_ne!(MAX_STEP >> (3 * (MAX_STEP_LOG8 - 1)), 0);
    }
}
