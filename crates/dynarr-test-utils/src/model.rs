//! `Vec`-backed reference model for random operation scripts.
//!
//! [`apply`] runs one [`Op`] against both a [`DynamicArray`] and a plain
//! `Vec`, computing the expected outcome from the `Vec` and asserting the
//! array agrees, including on which calls must fail.

use dynarr_array::DynamicArray;
use proptest::prelude::*;

/// One public operation with its arguments.
#[derive(Clone, Debug)]
pub enum Op {
    Push(i32),
    AppendRange(Vec<i32>),
    Insert(usize, i32),
    InsertRange(usize, Vec<i32>),
    Set(usize, i32),
    Remove(i32),
    RemoveAt(usize),
    RemoveRange(usize, usize),
    Clear,
}

/// Strategy producing operations with small values, so that searches hit
/// and indices land both in and out of range.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    let value = -4i32..16;
    let index = 0usize..40;
    prop_oneof![
        6 => value.clone().prop_map(Op::Push),
        2 => proptest::collection::vec(value.clone(), 0..24).prop_map(Op::AppendRange),
        3 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (index.clone(), proptest::collection::vec(value.clone(), 0..12))
            .prop_map(|(i, vs)| Op::InsertRange(i, vs)),
        1 => (index.clone(), value.clone()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => value.prop_map(Op::Remove),
        4 => index.clone().prop_map(Op::RemoveAt),
        3 => (index, 0usize..12).prop_map(|(i, n)| Op::RemoveRange(i, n)),
        1 => Just(Op::Clear),
    ]
}

/// Apply `op` to both `arr` and `model`, asserting identical outcomes.
///
/// # Panics
///
/// Panics (failing the enclosing test) when the array and the model
/// disagree on the result, on success versus failure, or on contents.
pub fn apply(op: &Op, arr: &mut DynamicArray<i32>, model: &mut Vec<i32>) {
    let len = model.len();
    match op {
        Op::Push(v) => {
            arr.push(*v);
            model.push(*v);
        }
        Op::AppendRange(vs) => {
            arr.append_range(vs.iter().copied());
            model.extend_from_slice(vs);
        }
        Op::Insert(i, v) => {
            let result = arr.insert(*i, *v);
            if *i <= len {
                assert!(result.is_ok(), "insert({i}) on len {len} failed: {result:?}");
                model.insert(*i, *v);
            } else {
                assert!(result.is_err(), "insert({i}) on len {len} succeeded");
            }
        }
        Op::InsertRange(i, vs) => {
            let result = arr.insert_range(*i, vs.iter().copied());
            if *i <= len {
                assert!(result.is_ok(), "insert_range({i}) on len {len} failed");
                model.splice(*i..*i, vs.iter().copied());
            } else {
                assert!(result.is_err(), "insert_range({i}) on len {len} succeeded");
            }
        }
        Op::Set(i, v) => {
            let result = arr.set(*i, *v);
            if *i < len {
                assert_eq!(result, Ok(model[*i]));
                model[*i] = *v;
            } else {
                assert!(result.is_err(), "set({i}) on len {len} succeeded");
            }
        }
        Op::Remove(v) => {
            let expected = model.iter().position(|x| x == v);
            assert_eq!(arr.remove(v), expected.is_some());
            if let Some(pos) = expected {
                model.remove(pos);
            }
        }
        Op::RemoveAt(i) => {
            let result = arr.remove_at(*i);
            if *i < len {
                assert_eq!(result, Ok(model.remove(*i)));
            } else {
                assert!(result.is_err(), "remove_at({i}) on len {len} succeeded");
            }
        }
        Op::RemoveRange(i, n) => {
            let result = arr.remove_range(*i, *n);
            if *i < len && *n >= 1 && i + n <= len {
                assert!(result.is_ok(), "remove_range({i}, {n}) on len {len} failed");
                model.drain(*i..i + n);
            } else {
                assert!(result.is_err(), "remove_range({i}, {n}) on len {len} succeeded");
            }
        }
        Op::Clear => {
            arr.clear();
            model.clear();
        }
    }
}

/// Assert the array holds exactly the model's elements and respects
/// `len <= capacity`.
pub fn assert_matches_model(arr: &DynamicArray<i32>, model: &[i32]) {
    assert!(
        arr.len() <= arr.capacity(),
        "len {} exceeds capacity {}",
        arr.len(),
        arr.capacity()
    );
    assert_eq!(arr.len(), model.len());
    assert_eq!(arr.to_vec(), model);
}
