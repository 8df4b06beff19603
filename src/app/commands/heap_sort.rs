//! Sort integers by pushing them through a [`HeapPq`] and popping them back

use crate::compare::{Natural, OppositeNatural};
use crate::queue::{HeapPq, HeapPqBuilder};

/// Largest first, or smallest first with `reverse`
pub fn run(values: &[i64], reverse: bool) -> Vec<i64> {
    if reverse {
        let heap = HeapPqBuilder::new(OppositeNatural::default())
            .add_items(values.iter().copied())
            .build();
        drain(heap)
    } else {
        let heap = HeapPqBuilder::new(Natural)
            .add_items(values.iter().copied())
            .build();
        drain(heap)
    }
}

fn drain<C: crate::compare::Comparator<i64>>(heap: HeapPq<i64, C>) -> Vec<i64> {
    log::debug!("{}", heap);
    heap.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_both_directions() {
        let values = [100, 1145, -202, 5, 6, 7];

        assert_eq!(run(&values, false), vec![1145, 100, 7, 6, 5, -202]);
        assert_eq!(run(&values, true), vec![-202, 5, 6, 7, 100, 1145]);
        assert!(run(&[], false).is_empty());
    }
}
