//! Reproducible, statistically independent pseudo-random number streams for
//! parallel consumers.
//!
//! The central service is jump-ahead: from one seeded state, N derived states
//! are advanced by exact multiples of a chosen step along the generator's
//! canonical sequence, so N workers draw the non-overlapping subsequences a
//! single-threaded run would produce. Two classical generators are
//! implemented, [`mrg32k3a::Mrg32k3a`] (period about 2^191, advanced by 3x3
//! modular matrix powers) and [`mt19937::Mt19937`] (period 2^19937 - 1,
//! advanced by polynomial arithmetic over GF(2) modulo the minimal polynomial
//! of the twist operator). Both jumps run in `O(log step)` through base-8
//! digit decomposition over precomputed tables.
//!
//! ```
//! use jumpstream::{GeneratorKind, MultiStream};
//!
//! let mut streams = MultiStream::new(GeneratorKind::Mt19937, 42, 4, 1 << 40).unwrap();
//! let draws: Vec<u64> = (0..4).map(|i| streams.get_u64(i)).collect();
//! assert_eq!(draws.len(), 4);
//! ```

#![allow(clippy::needless_range_loop)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

pub mod error;
pub mod mrg32k3a;
pub mod mt19937;
pub mod stream;
pub mod types;

pub(crate) mod gf2_poly;
pub(crate) mod mrg32k3a_jump;
pub(crate) mod mt19937_jump;
pub(crate) mod tables;

pub use error::{errmsg, Error, Warning};
pub use stream::MultiStream;
pub use types::{Generator, GeneratorKind, MAX_STEP};
