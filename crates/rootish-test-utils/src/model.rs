//! Operation vocabulary and a `Vec` reference model.
//!
//! [`apply_op`] runs one [`StackOp`] against a stack and a `Vec` and
//! reports the first observable disagreement as a [`ModelMismatch`].

use std::fmt;

use proptest::prelude::*;
use rootish::layout::blocks_for_len;
use rootish::{RootishArrayStack, StackError};

/// One public stack operation with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackOp {
    Push(i64),
    Insert { index: usize, value: i64 },
    Remove { index: usize },
    Set { index: usize, value: i64 },
    Get { index: usize },
    Pop,
    Clear,
    ShrinkToFit,
}

/// Disagreement between the stack and the model after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelMismatch {
    pub op: StackOp,
    pub reason: String,
}

impl fmt::Display for ModelMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.op, self.reason)
    }
}

impl std::error::Error for ModelMismatch {}

fn expect_same<T: PartialEq + fmt::Debug>(
    op: &StackOp,
    what: &str,
    actual: T,
    expected: T,
) -> Result<(), ModelMismatch> {
    if actual == expected {
        Ok(())
    } else {
        Err(ModelMismatch {
            op: op.clone(),
            reason: format!("{what}: stack gave {actual:?}, model gave {expected:?}"),
        })
    }
}

fn model_range_error(index: usize, len: usize) -> StackError {
    StackError::IndexOutOfRange { index, len }
}

/// Apply `op` to both `stack` and `model`, then compare the results,
/// lengths, block bounds, and full contents.
pub fn apply_op(
    stack: &mut RootishArrayStack<i64>,
    model: &mut Vec<i64>,
    op: &StackOp,
) -> Result<(), ModelMismatch> {
    let len = model.len();
    match *op {
        StackOp::Push(value) => {
            stack.push(value);
            model.push(value);
        }
        StackOp::Insert { index, value } => {
            let expected = if index <= len {
                model.insert(index, value);
                Ok(())
            } else {
                Err(model_range_error(index, len))
            };
            expect_same(op, "insert", stack.insert(index, value), expected)?;
        }
        StackOp::Remove { index } => {
            let expected = if index < len {
                Ok(model.remove(index))
            } else {
                Err(model_range_error(index, len))
            };
            expect_same(op, "remove", stack.remove(index), expected)?;
        }
        StackOp::Set { index, value } => {
            let expected = match model.get_mut(index) {
                Some(slot) => Ok(std::mem::replace(slot, value)),
                None => Err(model_range_error(index, len)),
            };
            expect_same(op, "set", stack.set(index, value), expected)?;
        }
        StackOp::Get { index } => {
            let expected = model.get(index).ok_or(model_range_error(index, len));
            expect_same(op, "get", stack.get(index), expected)?;
        }
        StackOp::Pop => {
            expect_same(op, "pop", stack.pop(), model.pop())?;
        }
        StackOp::Clear => {
            stack.clear();
            model.clear();
            expect_same(op, "capacity after clear", stack.capacity(), 0)?;
        }
        StackOp::ShrinkToFit => stack.shrink_to_fit(),
    }

    expect_same(op, "len", stack.len(), model.len())?;
    if stack.capacity() < stack.len() {
        return Err(ModelMismatch {
            op: op.clone(),
            reason: format!("capacity {} below len {}", stack.capacity(), stack.len()),
        });
    }
    if stack.block_count() > blocks_for_len(stack.len()) + 1 {
        return Err(ModelMismatch {
            op: op.clone(),
            reason: format!(
                "{} blocks for len {}, more than one spare",
                stack.block_count(),
                stack.len()
            ),
        });
    }
    expect_same(op, "contents", stack.iter().eq(model.iter()), true)
}

/// Strategy for a single operation with indices in `0..max_index`.
///
/// Indices are allowed past the current length so rejected calls are
/// exercised alongside successful ones.
pub fn arb_op(max_index: usize) -> impl Strategy<Value = StackOp> {
    let max_index = max_index.max(1);
    prop_oneof![
        6 => any::<i64>().prop_map(StackOp::Push),
        3 => (0..max_index, any::<i64>())
            .prop_map(|(index, value)| StackOp::Insert { index, value }),
        4 => (0..max_index).prop_map(|index| StackOp::Remove { index }),
        2 => (0..max_index, any::<i64>())
            .prop_map(|(index, value)| StackOp::Set { index, value }),
        2 => (0..max_index).prop_map(|index| StackOp::Get { index }),
        2 => Just(StackOp::Pop),
        1 => Just(StackOp::ShrinkToFit),
        1 => Just(StackOp::Clear),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<StackOp>> {
    prop::collection::vec(arb_op(128), 0..max_len)
}
