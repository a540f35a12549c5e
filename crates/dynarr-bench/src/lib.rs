//! Benchmark workloads for the dynarr dynamic array.
//!
//! Provides deterministic operation mixes for benchmarks and profiling:
//!
//! - [`churn_workload`]: seeded mix of appends, inserts, and removals
//! - [`run_workload`]: replays a workload against a [`DynamicArray`]
//! - [`sawtooth_workload`]: fill-then-drain cycles that cross the
//!   shrink thresholds repeatedly

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_array::DynamicArray;

/// One step of a benchmark workload.
///
/// Index-carrying variants hold a raw seed that is reduced modulo the
/// array's length at replay time, so every step is valid whatever the
/// array's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkloadOp {
    /// Append a value.
    Push(u64),
    /// Insert a value at `seed % (len + 1)`.
    Insert(usize, u64),
    /// Remove the element at `seed % len` (skipped when empty).
    RemoveAt(usize),
    /// Remove up to `count` elements (at least one) starting at
    /// `seed % len`, skipped when empty.
    RemoveRange(usize, usize),
}

/// Advance a 64-bit LCG state and return the new value.
fn next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 11
}

/// Generate a deterministic mix of `len` operations from `seed`.
///
/// Roughly half the steps append, so the array trends upward while the
/// inserts and removals exercise the shift engine and shrink triggers.
pub fn churn_workload(len: usize, seed: u64) -> Vec<WorkloadOp> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            let roll = next(&mut state) % 100;
            let a = next(&mut state);
            match roll {
                0..=49 => WorkloadOp::Push(a),
                50..=69 => WorkloadOp::Insert(a as usize, a),
                70..=94 => WorkloadOp::RemoveAt(a as usize),
                _ => WorkloadOp::RemoveRange(a as usize, (a % 16) as usize + 1),
            }
        })
        .collect()
}

/// Fill to `peak` elements then drain back to empty, `cycles` times.
pub fn sawtooth_workload(peak: usize, cycles: usize) -> Vec<WorkloadOp> {
    let mut ops = Vec::with_capacity(peak * cycles * 2);
    for _ in 0..cycles {
        ops.extend((0..peak as u64).map(WorkloadOp::Push));
        ops.extend(std::iter::repeat_n(WorkloadOp::RemoveAt(0), peak));
    }
    ops
}

/// Replay `ops` against `arr`. Returns the final length.
///
/// # Panics
///
/// Panics if the array rejects a step that was reduced to a valid index.
pub fn run_workload(arr: &mut DynamicArray<u64>, ops: &[WorkloadOp]) -> usize {
    for op in ops {
        let len = arr.len();
        match *op {
            WorkloadOp::Push(v) => arr.push(v),
            WorkloadOp::Insert(seed, v) => {
                arr.insert(seed % (len + 1), v).expect("index reduced modulo len");
            }
            WorkloadOp::RemoveAt(seed) if len > 0 => {
                arr.remove_at(seed % len).expect("index reduced modulo len");
            }
            WorkloadOp::RemoveRange(seed, count) if len > 0 => {
                let index = seed % len;
                arr.remove_range(index, count.clamp(1, len - index))
                    .expect("index reduced modulo len");
            }
            WorkloadOp::RemoveAt(_) | WorkloadOp::RemoveRange(..) => {}
        }
    }
    arr.len()
}
