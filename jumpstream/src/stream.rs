//! The uniform multi-stream handle.
//!
//! A [`MultiStream`] owns a contiguous array of per-stream generator states
//! of one kind and dispatches draws, resets, and jumps to them by index.
//! Streams built by the constructor start at offsets `0, step, 2*step, ...`
//! of the generator's canonical sequence, so independent consumers draw the
//! non-overlapping subsequences a single monolithic stream would produce.

use log::warn;
use static_assertions::assert_impl_all;

use crate::error::{Error, Warning};
use crate::mrg32k3a::Mrg32k3a;
use crate::mt19937::Mt19937;
use crate::types::{Generator, GeneratorKind, MAX_STEP};

/// Substituted when the caller passes seed 0.
const DEFAULT_SEED: u64 = 1;

/// Contiguous per-stream state storage, tagged by generator kind.
#[derive(Clone, Debug)]
enum States {
    Mrg32k3a(Vec<Mrg32k3a>),
    Mt19937(Vec<Mt19937>),
}

/// A set of reproducible, statistically independent random streams.
///
/// All resources are owned; dropping the handle releases everything.
/// Mutating operations return `Result` and, once one has failed with an
/// error, the handle is poisoned: every later mutating call short-circuits
/// with the stored error. Warnings never poison.
///
/// Distinct handles are fully independent and may live on different threads;
/// a single handle requires `&mut` access for every draw or jump.
#[derive(Debug)]
pub struct MultiStream {
    states: States,
    poison: Option<Error>,
    warning: Option<Warning>,
}

assert_impl_all!(MultiStream: Send, Sync);

fn effective_seed(seed: u64) -> (u64, Option<Warning>) {
    if seed == 0 {
        warn!("seed 0 is invalid; substituting the default seed {DEFAULT_SEED}");
        (DEFAULT_SEED, Some(Warning::ZeroSeed))
    } else {
        (seed, None)
    }
}

impl MultiStream {
    /// Builds `nstream` streams (0 is normalized to 1) of the given kind,
    /// seeded from `seed` and spaced `step` draws apart.
    ///
    /// Stream `i` starts where a monolithic stream would be after `i * step`
    /// draws. A zero seed is replaced by the default and reported through
    /// [`MultiStream::last_warning`]. Fails with
    /// [`Error::StepTooLarge`] before any allocation when `step` exceeds
    /// [`MAX_STEP`], and with [`Error::Allocation`] /
    /// [`Error::JumpAllocation`] when memory runs out.
    pub fn new(kind: GeneratorKind, seed: u64, nstream: u32, step: u64) -> Result<Self, Error> {
        if step > MAX_STEP {
            return Err(Error::StepTooLarge);
        }
        let count = if nstream == 0 { 1 } else { nstream as usize };
        let (seed, warning) = effective_seed(seed);

        let states = match kind {
            GeneratorKind::Mrg32k3a => {
                let mut v: Vec<Mrg32k3a> = Vec::new();
                v.try_reserve_exact(count).map_err(|_| Error::Allocation)?;
                v.push(Mrg32k3a::new(seed));
                v.resize(count, v[0]);
                // A requested stream count of zero jumps the lone stream;
                // any other count fans out from stream 0.
                if nstream == 0 {
                    v[0].jump(step)?;
                } else {
                    Mrg32k3a::jump_seq(&mut v, step)?;
                }
                States::Mrg32k3a(v)
            }
            GeneratorKind::Mt19937 => {
                let mut v: Vec<Mt19937> = Vec::new();
                v.try_reserve_exact(count).map_err(|_| Error::Allocation)?;
                v.push(Mt19937::new(seed));
                let first = v[0].clone();
                v.resize(count, first);
                // Requested counts of zero and one both jump the lone
                // stream; larger counts fan out from stream 0.
                if nstream <= 1 {
                    v[0].jump(step)?;
                } else {
                    Mt19937::jump_seq(&mut v, step)?;
                }
                States::Mt19937(v)
            }
        };

        Ok(MultiStream {
            states,
            poison: None,
            warning,
        })
    }

    /// Resolves the numeric generator id of the reference C API and builds
    /// the handle; unknown ids fail with [`Error::UnknownGenerator`].
    pub fn with_id(id: u32, seed: u64, nstream: u32, step: u64) -> Result<Self, Error> {
        MultiStream::new(GeneratorKind::from_id(id)?, seed, nstream, step)
    }

    /// The generator backing every stream of this handle.
    pub fn kind(&self) -> GeneratorKind {
        match self.states {
            States::Mrg32k3a(_) => GeneratorKind::Mrg32k3a,
            States::Mt19937(_) => GeneratorKind::Mt19937,
        }
    }

    /// Number of streams.
    pub fn nstream(&self) -> usize {
        match &self.states {
            States::Mrg32k3a(v) => v.len(),
            States::Mt19937(v) => v.len(),
        }
    }

    /// Smallest value [`MultiStream::get_u64`] can return.
    pub fn min(&self) -> u64 {
        match self.states {
            States::Mrg32k3a(_) => Mrg32k3a::MIN,
            States::Mt19937(_) => Mt19937::MIN,
        }
    }

    /// Largest value [`MultiStream::get_u64`] can return.
    pub fn max(&self) -> u64 {
        match self.states {
            States::Mrg32k3a(_) => Mrg32k3a::MAX,
            States::Mt19937(_) => Mt19937::MAX,
        }
    }

    /// The warning of the most recent seeding operation, if any. Cleared by
    /// the next seeding operation; never sticky.
    pub fn last_warning(&self) -> Option<Warning> {
        self.warning
    }

    /// Draws the next integer from a stream.
    ///
    /// Draws never allocate and never fail; they are unaffected by a
    /// poisoned handle.
    ///
    /// # Panics
    /// If `stream >= nstream`.
    pub fn get_u64(&mut self, stream: usize) -> u64 {
        match &mut self.states {
            States::Mrg32k3a(v) => v[stream].get_u64(),
            States::Mt19937(v) => v[stream].get_u64(),
        }
    }

    /// Draws a double in `[0, 1)` from a stream.
    ///
    /// # Panics
    /// If `stream >= nstream`.
    pub fn get_unit_interval(&mut self, stream: usize) -> f64 {
        match &mut self.states {
            States::Mrg32k3a(v) => v[stream].get_unit_interval(),
            States::Mt19937(v) => v[stream].get_unit_interval(),
        }
    }

    /// Draws a double in `(0, 1)` from a stream.
    ///
    /// # Panics
    /// If `stream >= nstream`.
    pub fn get_unit_interval_open(&mut self, stream: usize) -> f64 {
        match &mut self.states {
            States::Mrg32k3a(v) => v[stream].get_unit_interval_open(),
            States::Mt19937(v) => v[stream].get_unit_interval_open(),
        }
    }

    /// Advances one stream by `step` draws.
    ///
    /// # Panics
    /// If `stream >= nstream`.
    pub fn jump(&mut self, stream: usize, step: u64) -> Result<(), Error> {
        self.check_poison()?;
        let r = match &mut self.states {
            States::Mrg32k3a(v) => v[stream].jump(step),
            States::Mt19937(v) => v[stream].jump(step),
        };
        self.record(r)
    }

    /// Advances every stream by the same `step`, computing the jump operator
    /// once.
    pub fn jump_all(&mut self, step: u64) -> Result<(), Error> {
        self.check_poison()?;
        let r = match &mut self.states {
            States::Mrg32k3a(v) => Mrg32k3a::jump_all(v, step),
            States::Mt19937(v) => Mt19937::jump_all(v, step),
        };
        self.record(r)
    }

    /// Reseeds one stream and advances it by `step`.
    ///
    /// # Panics
    /// If `stream >= nstream`.
    pub fn reset(&mut self, stream: usize, seed: u64, step: u64) -> Result<(), Error> {
        self.check_poison()?;
        let (seed, warning) = effective_seed(seed);
        self.warning = warning;
        let r = match &mut self.states {
            States::Mrg32k3a(v) => {
                v[stream].reseed(seed);
                v[stream].jump(step)
            }
            States::Mt19937(v) => {
                v[stream].reseed(seed);
                v[stream].jump(step)
            }
        };
        self.record(r)
    }

    /// Reseeds stream 0 and rebuilds the fan-out, as the constructor does.
    ///
    /// On a zero step the two generators keep their historical behaviors:
    /// the MRG32k3a path copies the reseeded stream 0 into every stream,
    /// while the MT19937 path leaves streams 1.. at their previous states.
    pub fn reset_all(&mut self, seed: u64, step: u64) -> Result<(), Error> {
        self.check_poison()?;
        let (seed, warning) = effective_seed(seed);
        self.warning = warning;
        let r = match &mut self.states {
            States::Mrg32k3a(v) => {
                v[0].reseed(seed);
                if step == 0 {
                    let first = v[0];
                    for state in &mut v[1..] {
                        *state = first;
                    }
                    Ok(())
                } else if step > MAX_STEP {
                    Err(Error::StepTooLarge)
                } else if v.len() <= 1 {
                    v[0].jump(step)
                } else {
                    Mrg32k3a::jump_seq(v, step)
                }
            }
            States::Mt19937(v) => {
                v[0].reseed(seed);
                if step == 0 {
                    Ok(())
                } else if step > MAX_STEP {
                    Err(Error::StepTooLarge)
                } else if v.len() <= 1 {
                    v[0].jump(step)
                } else {
                    Mt19937::jump_seq(v, step)
                }
            }
        };
        self.record(r)
    }

    fn check_poison(&self) -> Result<(), Error> {
        match self.poison {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn record(&mut self, r: Result<(), Error>) -> Result<(), Error> {
        if let Err(e) = r {
            self.poison = Some(e);
        }
        r
    }
}
