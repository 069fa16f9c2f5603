//! Jump-ahead for MT19937 through polynomial arithmetic modulo the minimal
//! polynomial of the twist operator.
//!
//! Advancing a state by `k` draws is multiplication by `t^k mod phi` in
//! GF(2)[t]/(phi). The power is assembled from the base-8 jump tables, the
//! product of the step polynomial with the state's output-bit polynomial is
//! taken, and the canonical state is reconstructed from the result.

use crate::error::Error;
use crate::gf2_poly::{coef, poly_mod_phi, poly_mul, poly_mul_ub, PHI_DEGREE};
use crate::mt19937::{Mt19937, LOWER_MASK, MATRIX_A, M, N, UPPER_MASK};
use crate::tables;

/// Recurrence degree; bit `K` is the leading term of phi.
const K: usize = PHI_DEGREE;

/// A step polynomial `t^step mod phi` bundled with the workspace every
/// advance needs.
///
/// The single allocation holds 11N limbs, laid out as the step polynomial
/// (N), the output-bit polynomial of the state being advanced (2N), the
/// unbalanced product (3N), and multiplication scratch (5N). Computing the
/// polynomial once and reusing it amortizes the base-8 assembly across a
/// whole fan-out.
pub(crate) struct JumpPoly {
    buf: Vec<u32>,
}

impl JumpPoly {
    /// Assembles `t^step mod phi` from the jump tables.
    ///
    /// Nonzero base-8 digits of `step` select table entries; the first one
    /// initializes the accumulator and the rest multiply into it, reducing
    /// after every product. A zero step falls back to the one-step entry,
    /// matching the reference implementation; public paths never pass zero.
    pub fn for_step(step: u64) -> Result<Self, Error> {
        debug_assert!(step <= crate::types::MAX_STEP);
        let mut buf = Vec::new();
        buf.try_reserve_exact(11 * N)
            .map_err(|_| Error::JumpAllocation)?;
        buf.resize(11 * N, 0);

        let table = tables::mt_jump_polys();
        {
            let (poly, rest) = buf.split_at_mut(N);
            let (pm, tmp) = rest.split_at_mut(2 * N);

            let mut n = step;
            let mut i = 0;
            let mut init = false;
            while n != 0 {
                let g = (n & 7) as usize;
                if g != 0 {
                    let entry = table.entry(i, g - 1);
                    if !init {
                        poly.copy_from_slice(entry);
                        init = true;
                    } else {
                        poly_mul(pm, poly, entry, tmp);
                        poly_mod_phi(pm, tmp);
                        poly.copy_from_slice(&pm[..N]);
                    }
                }
                i += 1;
                n >>= 3;
            }
            if !init {
                poly.copy_from_slice(table.entry(0, 0));
            }
        }
        Ok(JumpPoly { buf })
    }

    /// Advances `state` in place by the step this polynomial encodes.
    ///
    /// The raw recurrence is driven for 2K output bits (highest coefficient
    /// first), multiplied by the step polynomial, and coefficients
    /// `2K-1-i` for `i = 0..=K` of the product are the output bits of the
    /// advanced stream; the canonical state is rebuilt from them.
    pub fn advance(&mut self, state: &mut Mt19937) {
        let (pt, rest) = self.buf.split_at_mut(N);
        let (pm, rest) = rest.split_at_mut(2 * N);
        let (ph, tmp) = rest.split_at_mut(3 * N);

        pm.fill(0);
        for i in (0..2 * K).rev() {
            pm[i >> 5] |= (state.next_state() & 1) << (i & 31);
        }

        poly_mul_ub(ph, pm, pt, tmp);

        pm[..N].fill(0);
        for i in 0..=K {
            let j = 2 * K - 1 - i;
            pm[i >> 5] |= coef(ph, j) << (i & 31);
        }

        let mt = recover_state(&pm[..N]);
        state.set_words(mt, 0);
    }
}

/// Rebuilds the canonical 624-word state whose first `K` raw output bits are
/// the coefficients of `poly`.
///
/// The tail coefficients seed the word array directly; the walk from `K + 1`
/// down to `N - 1` then inverts the twist recurrence one word at a time,
/// keeping the high bit of the previous word and the low bits of the current
/// one. The caller sets the cursor to zero so no twist precedes the first
/// draw.
fn recover_state(poly: &[u32]) -> [u32; N] {
    let mut mt = [0u32; N];
    for i in K - N + 1..=K {
        mt[i % N] = coef(poly, i);
    }
    let mut y0 = 0u32;
    for i in (N - 1..=K + 1).rev() {
        let mut y1 = mt[i % N] ^ mt[(i + M) % N];
        if coef(poly, i + 1 - N) == 1 {
            y1 = ((y1 ^ MATRIX_A) << 1) | 1;
        } else {
            y1 <<= 1;
        }
        mt[(i + 1) % N] = (y0 & UPPER_MASK) | (y1 & LOWER_MASK);
        y0 = y1;
    }
    mt
}
