//! Property-based tests for the materials and impact models
//!
//! Checks that wire shapes resolve to the expected variant and that the
//! score buckets stay monotonic.

use proptest::prelude::*;
use proptest::option;

use crate::{BomItem, CostBand, ImpactEstimate, MaterialsInput, StructuredBom, SustainabilityRating};

prop_compose! {
    fn arb_bom_item()(
        category in "[A-Za-z ]{1,20}",
        name in "[A-Za-z0-9 %]{1,30}",
        composition in "[A-Za-z0-9 %]{0,30}",
        estimated_qty in "[0-9]{1,3}(\\.[0-9])?(m|pcs|g)",
    ) -> BomItem {
        BomItem { category, name, composition, estimated_qty }
    }
}

prop_compose! {
    fn arb_structured_bom()(
        items in prop::collection::vec(arb_bom_item(), 0..8),
        production_notes in option::of(prop::collection::vec("[A-Za-z ,.]{1,40}", 0..4)),
    ) -> StructuredBom {
        StructuredBom { items, production_notes }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_text_resolves_to_text(text in ".*") {
        let value = serde_json::Value::String(text.clone());
        let input: MaterialsInput = serde_json::from_value(value).unwrap();
        prop_assert_eq!(input, MaterialsInput::Text(text));
    }

    #[test]
    fn prop_lines_keep_order(lines in prop::collection::vec(".*", 0..10)) {
        let value = serde_json::to_value(&lines).unwrap();
        let input: MaterialsInput = serde_json::from_value(value).unwrap();
        prop_assert_eq!(input, MaterialsInput::Lines(lines));
    }

    #[test]
    fn prop_structured_resolves_to_structured(bom in arb_structured_bom()) {
        let value = serde_json::to_value(&bom).unwrap();
        let input: MaterialsInput = serde_json::from_value(value).unwrap();
        prop_assert_eq!(input, MaterialsInput::Structured(bom));
    }

    #[test]
    fn prop_buckets_are_monotonic(a in 0u32..20, b in 0u32..20, x in -5i32..15, y in -5i32..15) {
        if a <= b {
            prop_assert!(CostBand::from_score(a) <= CostBand::from_score(b));
        }
        if x <= y {
            prop_assert!(SustainabilityRating::from_score(x) <= SustainabilityRating::from_score(y));
        }
    }

    #[test]
    fn prop_estimate_keeps_raw_eco_score(cost in 0u32..20, eco in -5i32..15) {
        let estimate = ImpactEstimate::from_scores(cost, eco);
        prop_assert_eq!(estimate.eco_score, eco);
    }
}
