// SPDX-License-Identifier: Apache-2.0

use curry_creations_model::{Price, SpiceLevel, SpiceMarker};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn price_display_parse_roundtrip(cents in 0_u64..10_000_000_u64) {
        let price = Price::from_cents(cents);
        let rendered = price.to_string();
        let parsed = Price::parse(&rendered).expect("price parse");
        prop_assert_eq!(parsed, price);
    }

    #[test]
    fn price_sum_is_exact_cent_addition(amounts in proptest::collection::vec(0_u64..1_000_000_u64, 0..16)) {
        let total: Price = amounts.iter().copied().map(Price::from_cents).sum();
        prop_assert_eq!(total.cents(), amounts.iter().sum::<u64>());
    }

    #[test]
    fn spice_markers_always_total_five(level in 1_u8..=5_u8) {
        let markers = SpiceLevel::parse(level).expect("level").markers();
        let active = markers.iter().filter(|m| **m == SpiceMarker::Active).count();
        prop_assert_eq!(active, level as usize);
        prop_assert_eq!(markers.len(), 5);
    }
}
