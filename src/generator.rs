//! Random number generation and the list type it produces.

use std::ops::{Deref, RangeInclusive};
use std::sync::Arc;

use rand::Rng;

/// The current sequence of generated numbers.
///
/// The backing slice is never mutated; a new generation swaps in a new
/// `Arc`, so every holder of a clone sees a complete list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList(Arc<[i64]>);

impl NumberList {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values.into())
    }
}

impl Deref for NumberList {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

/// One request to fill the list, built per Generate action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: usize,
    pub range: RangeInclusive<i64>,
    pub replace_even: bool,
}

/// Draws `count` values uniformly from `range`, zeroing the even ones when asked.
///
/// The caller guarantees `count > 0` and a non-empty range.
pub fn generate<R: Rng>(request: &GenerationRequest, rng: &mut R) -> NumberList {
    debug_assert!(request.count > 0);
    debug_assert!(request.range.start() <= request.range.end());

    let values = (0..request.count)
        .map(|_| rng.gen_range(request.range.clone()))
        .map(|value| {
            if request.replace_even {
                replace_even(value)
            } else {
                value
            }
        })
        .collect();
    NumberList::new(values)
}

fn replace_even(value: i64) -> i64 {
    if value % 2 == 0 {
        0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(count: usize, low: i64, high: i64, replace_even: bool) -> GenerationRequest {
        GenerationRequest {
            count,
            range: low..=high,
            replace_even,
        }
    }

    #[test]
    fn same_seed_gives_same_list() {
        let req = request(50, 10, 1000, false);
        let a = generate(&req, &mut StdRng::seed_from_u64(7));
        let b = generate(&req, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn single_value_range() {
        let list = generate(&request(5, 42, 42, false), &mut StdRng::seed_from_u64(1));
        assert_eq!(&*list, &[42, 42, 42, 42, 42]);
    }

    #[test]
    fn replace_even_keeps_order_of_odd_values() {
        let mut plain_rng = StdRng::seed_from_u64(99);
        let mut zeroed_rng = StdRng::seed_from_u64(99);
        let plain = generate(&request(200, 10, 1000, false), &mut plain_rng);
        let zeroed = generate(&request(200, 10, 1000, true), &mut zeroed_rng);

        assert_eq!(plain.len(), zeroed.len());
        for (before, after) in plain.iter().zip(zeroed.iter()) {
            if before % 2 == 0 {
                assert_eq!(*after, 0);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    proptest! {
        #[test]
        fn values_stay_in_range(
            seed in any::<u64>(),
            count in 1usize..500,
            low in -1000i64..1000,
            span in 0i64..2000,
        ) {
            let high = low + span;
            let list = generate(&request(count, low, high, false), &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(list.len(), count);
            prop_assert!(list.iter().all(|v| (low..=high).contains(v)));
        }

        #[test]
        fn replaced_lists_have_no_even_nonzero(seed in any::<u64>(), count in 1usize..500) {
            let list = generate(&request(count, 10, 1000, true), &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(list.len(), count);
            prop_assert!(list.iter().all(|v| *v == 0 || v % 2 != 0));
        }
    }
}
