//! # False Positive Rate Checks
//!
//! Filters sized for `n` elements at rate `p` are loaded with `n` keys and
//! probed with keys never added. The observed rate must stay within 2x of
//! `p`; a sizing bug shows up as an order-of-magnitude miss.

#[cfg(test)]
mod tests {
    use bloom_filters::{BloomFilter, CountingBloomFilter, LayeredBloomFilter, MembershipFilter};

    use crate::support::{init_tracing, numbered_keys, random_keys};

    const PROBES: usize = 100_000;
    const TOLERANCE: f64 = 2.0;

    fn observed_fpr<F: MembershipFilter>(
        filter: &mut F,
        added: &[Vec<u8>],
        probes: &[Vec<u8>],
    ) -> f64 {
        for key in added {
            filter.add(key);
        }
        let hits = probes.iter().filter(|key| filter.contains(key)).count();
        hits as f64 / probes.len() as f64
    }

    fn assert_within_tolerance(observed: f64, target: f64) {
        assert!(
            observed <= target * TOLERANCE,
            "Observed FPR {} exceeds {} * target {}",
            observed,
            TOLERANCE,
            target
        );
    }

    #[test]
    fn test_standard_filter_rates() {
        init_tracing();
        for (n, p) in [(1_000, 0.1), (5_000, 0.01), (10_000, 0.001)] {
            let added = numbered_keys("in_", n);
            let probes = numbered_keys("out_", PROBES);
            let mut filter = BloomFilter::new(n, p).unwrap();

            let observed = observed_fpr(&mut filter, &added, &probes);
            assert_within_tolerance(observed, p);
        }
    }

    #[test]
    fn test_random_keys_rate() {
        let n = 10_000;
        let p = 0.01;
        let added = random_keys(7, n);
        let probes = random_keys(8, PROBES);
        let mut filter = BloomFilter::new(n, p).unwrap();

        let observed = observed_fpr(&mut filter, &added, &probes);
        assert_within_tolerance(observed, p);
    }

    #[test]
    fn test_counting_filter_rate() {
        let n = 5_000;
        let p = 0.01;
        let added = numbered_keys("in_", n);
        let probes = numbered_keys("out_", PROBES);
        let mut filter = CountingBloomFilter::new(n, p).unwrap();

        let observed = observed_fpr(&mut filter, &added, &probes);
        assert_within_tolerance(observed, p);
    }

    #[test]
    fn test_layered_first_layer_rate() {
        let n = 5_000;
        let p = 0.01;
        let added = numbered_keys("in_", n);
        let probes = numbered_keys("out_", PROBES);
        let mut filter = LayeredBloomFilter::new(n, p).unwrap();

        let observed = observed_fpr(&mut filter, &added, &probes);
        assert_within_tolerance(observed, p);
        for key in &added {
            assert!(filter.test(key).1, "added key missing from layer 1");
        }
    }

    #[test]
    fn test_overfilled_filter_exceeds_target() {
        // Sanity check that the measurement can detect a bad sizing
        let p = 0.01;
        let added = numbered_keys("in_", 10_000);
        let probes = numbered_keys("out_", PROBES);
        let mut filter = BloomFilter::new(1_000, p).unwrap();

        let observed = observed_fpr(&mut filter, &added, &probes);
        assert!(observed > p * TOLERANCE);
        assert!(filter.estimated_fpr() > p * TOLERANCE);
    }
}
