//! Precomputed jump tables for both generators.
//!
//! Entry `(i, g - 1)` of a table encodes a jump of `g * 8^i` draws, for
//! `0 <= i < 21` and `1 <= g <= 7`: the matrix power `A_k^(g * 8^i) mod m_k`
//! for MRG32k3a and the polynomial `t^(g * 8^i) mod phi` for MT19937. The
//! 21 rows cover every base-8 digit of a 63-bit step.
//!
//! The tables are materialized once, on first use, from the defining
//! recurrences: each row's first entry is the previous row's `g = 7` entry
//! times its base, and entries within a row accumulate one more base factor
//! each. This reproduces the values the reference implementation ships as
//! generated source, bit for bit.

use once_cell::sync::Lazy;
use static_assertions::const_assert_eq;

use crate::gf2_poly::{poly_mod_phi, poly_mul};
use crate::mrg32k3a::{M1, M2};
use crate::mrg32k3a_jump::{matrix_dot, Matrix, A1, A2};
use crate::mt19937::N;
use crate::types::MAX_STEP_LOG8;

/// Base-8 digits take seven nonzero values.
const DIGITS: usize = 7;

const_assert_eq!(MAX_STEP_LOG8, 21);

/// `t^(g * 8^i) mod phi` for every digit position and value, row-major.
pub(crate) struct MtJumpTable {
    entries: Vec<[u32; N]>,
}

impl MtJumpTable {
    /// The polynomial for a jump of `(g + 1) * 8^i` draws.
    #[inline]
    pub fn entry(&self, i: usize, g: usize) -> &[u32; N] {
        debug_assert!(g < DIGITS);
        &self.entries[i * DIGITS + g]
    }
}

/// The two matrix families `A1^(g * 8^i) mod m1` and `A2^(g * 8^i) mod m2`,
/// row-major with matching indices.
pub(crate) struct MrgJumpTable {
    a1: Vec<Matrix>,
    a2: Vec<Matrix>,
}

impl MrgJumpTable {
    /// The matrix pair for a jump of `(g + 1) * 8^i` draws.
    #[inline]
    pub fn entry(&self, i: usize, g: usize) -> (&Matrix, &Matrix) {
        debug_assert!(g < DIGITS);
        (&self.a1[i * DIGITS + g], &self.a2[i * DIGITS + g])
    }
}

static MT_JUMP_POLYS: Lazy<MtJumpTable> = Lazy::new(build_mt_table);

static MRG_JUMP_MATRICES: Lazy<MrgJumpTable> = Lazy::new(build_mrg_table);

pub(crate) fn mt_jump_polys() -> &'static MtJumpTable {
    &MT_JUMP_POLYS
}

pub(crate) fn mrg_jump_matrices() -> &'static MrgJumpTable {
    &MRG_JUMP_MATRICES
}

/// `(a * b) mod phi` into a fresh entry. `ws` holds 10N limbs of scratch.
fn mul_mod_phi(a: &[u32; N], b: &[u32; N], ws: &mut [u32]) -> [u32; N] {
    let (pm, tmp) = ws.split_at_mut(2 * N);
    poly_mul(pm, a, b, tmp);
    poly_mod_phi(pm, tmp);
    let mut out = [0u32; N];
    out.copy_from_slice(&pm[..N]);
    out
}

fn build_mt_table() -> MtJumpTable {
    let mut entries = Vec::with_capacity(MAX_STEP_LOG8 * DIGITS);
    let mut ws = vec![0u32; 10 * N];

    // The polynomial t: one step.
    let mut base = [0u32; N];
    base[0] = 2;

    for i in 0..MAX_STEP_LOG8 {
        let mut acc = base;
        entries.push(acc);
        for _ in 2..=DIGITS {
            acc = mul_mod_phi(&acc, &base, &mut ws);
            entries.push(acc);
        }
        if i + 1 < MAX_STEP_LOG8 {
            // t^(8^(i+1)) = t^(7 * 8^i) * t^(8^i).
            base = mul_mod_phi(&acc, &base, &mut ws);
        }
    }
    MtJumpTable { entries }
}

fn build_mrg_table() -> MrgJumpTable {
    let mut a1 = Vec::with_capacity(MAX_STEP_LOG8 * DIGITS);
    let mut a2 = Vec::with_capacity(MAX_STEP_LOG8 * DIGITS);

    let mut base1 = A1;
    let mut base2 = A2;

    for i in 0..MAX_STEP_LOG8 {
        let mut acc1 = base1;
        let mut acc2 = base2;
        a1.push(acc1);
        a2.push(acc2);
        for _ in 2..=DIGITS {
            acc1 = matrix_dot(&acc1, &base1, M1);
            acc2 = matrix_dot(&acc2, &base2, M2);
            a1.push(acc1);
            a2.push(acc2);
        }
        if i + 1 < MAX_STEP_LOG8 {
            base1 = matrix_dot(&acc1, &base1, M1);
            base2 = matrix_dot(&acc2, &base2, M2);
        }
    }
    MrgJumpTable { a1, a2 }
}
