//! # Property Tests
//!
//! Invariants that must hold for arbitrary byte keys, checked with
//! proptest-generated operation sequences.

#[cfg(test)]
mod tests {
    use bloom_filters::{BloomFilter, CountingBloomFilter, LayeredBloomFilter};
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn key() -> impl Strategy<Value = Vec<u8>> {
        vec(any::<u8>(), 0..48)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn standard_filter_has_no_false_negatives(
            keys in vec(key(), 1..300),
            noise in vec(key(), 0..300),
        ) {
            let mut filter = BloomFilter::new(keys.len(), 0.01).unwrap();
            for key in &keys {
                filter.add(key);
            }
            for key in &noise {
                filter.add(key);
            }

            for key in &keys {
                prop_assert!(filter.contains(key));
            }
        }

        #[test]
        fn identical_operations_give_identical_answers(
            keys in vec(key(), 0..200),
            probes in vec(key(), 1..200),
        ) {
            let mut first = BloomFilter::new(200, 0.05).unwrap();
            let mut second = BloomFilter::new(200, 0.05).unwrap();
            let mut first_counting = CountingBloomFilter::new(200, 0.05).unwrap();
            let mut second_counting = CountingBloomFilter::new(200, 0.05).unwrap();

            for key in &keys {
                first.add(key);
                second.add(key);
                first_counting.add(key);
                second_counting.add(key);
            }

            for probe in &probes {
                prop_assert_eq!(first.contains(probe), second.contains(probe));
                prop_assert_eq!(
                    first_counting.contains(probe),
                    second_counting.contains(probe)
                );
            }
        }

        #[test]
        fn layered_identical_operations_give_identical_depths(
            pool in vec(key(), 1..40),
            picks in vec(any::<prop::sample::Index>(), 1..500),
        ) {
            let mut first = LayeredBloomFilter::new(50, 0.01).unwrap();
            let mut second = LayeredBloomFilter::new(50, 0.01).unwrap();

            // Drawing from a small pool repeats keys, so several layers get built
            for pick in &picks {
                let key = pick.get(&pool);
                prop_assert_eq!(first.add(key), second.add(key));
            }
            prop_assert_eq!(first.layer_count(), second.layer_count());

            for key in &pool {
                prop_assert_eq!(first.test(key), second.test(key));
            }
            prop_assert_eq!(first.test(b"never-added"), second.test(b"never-added"));
        }

        #[test]
        fn counting_add_twice_remove_twice(
            element in key(),
            others in vec(key(), 0..100),
        ) {
            let mut filter = CountingBloomFilter::new(1000, 0.01).unwrap();
            for other in &others {
                filter.add(other);
            }

            filter.add(&element);
            filter.add(&element);
            filter.remove(&element);
            prop_assert!(filter.contains(&element));

            filter.remove(&element);
            for other in &others {
                prop_assert!(filter.contains(other), "remove dropped an unrelated key");
            }
        }

        #[test]
        fn counting_remove_restores_empty_state(keys in vec(key(), 1..100)) {
            let mut filter = CountingBloomFilter::new(100, 0.01).unwrap();
            for key in &keys {
                filter.add(key);
            }
            for key in &keys {
                filter.remove(key);
            }

            prop_assert_eq!(filter.counters_set(), 0);
            prop_assert_eq!(filter.elements_count(), 0);
        }

        #[test]
        fn layered_depth_is_monotonic(element in key(), times in 1usize..12) {
            let mut filter = LayeredBloomFilter::new(3000, 0.01).unwrap();

            for i in 1..=times {
                prop_assert_eq!(filter.add(&element), i);
                prop_assert_eq!(filter.test(&element), (i, true));
            }
        }

        #[test]
        fn layered_depth_never_decreases(keys in vec(key(), 1..50)) {
            let mut filter = LayeredBloomFilter::new(100, 0.01).unwrap();
            let target = keys[0].clone();
            let mut previous = 0;

            for key in &keys {
                filter.add(key);
                filter.add(&target);
                let (depth, found) = filter.test(&target);
                prop_assert!(found);
                prop_assert!(depth >= previous);
                previous = depth;
            }
        }
    }
}
