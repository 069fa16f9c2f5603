//! Splits one MT19937 sequence across five streams and shows that each
//! stream picks up exactly where the monolithic sequence would be.

use jumpstream::{GeneratorKind, MultiStream};

const NUM_STREAM: u32 = 5;
const NUM_STEP: u64 = 100_000;
const SEED: u64 = 1;

fn main() {
    env_logger::init();

    // Single stream: walk the whole sequence, printing every NUM_STEP-th
    // draw.
    let mut single = MultiStream::new(GeneratorKind::Mt19937, SEED, 1, 0)
        .expect("single-stream construction");
    println!("-> Single stream:");
    for i in 0..NUM_STREAM as u64 {
        println!("{}-th number: {:.6}", i * NUM_STEP, single.get_unit_interval(0));
        for _ in 1..NUM_STEP {
            single.get_unit_interval(0);
        }
    }

    // Multiple streams: the same values, each reached by one jump.
    let mut streams = MultiStream::new(GeneratorKind::Mt19937, SEED, NUM_STREAM, NUM_STEP)
        .expect("multi-stream construction");
    println!("-> {NUM_STREAM} streams with step size {NUM_STEP}:");
    for i in 0..NUM_STREAM as usize {
        println!(
            "starting number of {i}-th stream: {:.6}",
            streams.get_unit_interval(i)
        );
    }
}
