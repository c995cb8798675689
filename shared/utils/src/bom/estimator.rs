//! Impact Estimator
//!
//! Scores canonical BOM text for cost band and sustainability rating.

use couture_models::{ImpactEstimate, MaterialsInput};
use serde::Serialize;
use tracing::trace;

use super::normalizer::normalize;
use super::rules::{self, RuleHit, COST_BASE, COST_RULES, ECO_BASE, ECO_RULES};

/// Raw scores and fired rules behind an [`ImpactEstimate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactBreakdown {
    pub cost_score: u32,
    pub eco_score: i32,
    pub cost_hits: Vec<RuleHit>,
    pub eco_hits: Vec<RuleHit>,
}

impl ImpactBreakdown {
    pub fn estimate(&self) -> ImpactEstimate {
        ImpactEstimate::from_scores(self.cost_score, self.eco_score)
    }
}

/// Estimate impact for any materials representation.
///
/// Absent input scores as the baseline: `$`, Standard, eco 0.
pub fn estimate_impact(input: Option<&MaterialsInput>) -> ImpactEstimate {
    estimate_text(&normalize(input))
}

/// Estimate impact for text that is already canonical
pub fn estimate_text(text: &str) -> ImpactEstimate {
    let text = text.to_lowercase();
    let eco_score = rules::score(ECO_RULES, ECO_BASE, &text);
    let cost_score = cost_score(&text);

    let estimate = ImpactEstimate::from_scores(cost_score, eco_score);
    trace!(
        text_len = text.len(),
        eco_score,
        cost_score,
        "estimated impact: {}",
        estimate
    );
    estimate
}

/// Same scoring as [`estimate_impact`], keeping the rules that fired
pub fn explain_impact(input: Option<&MaterialsInput>) -> ImpactBreakdown {
    let text = normalize(input).to_lowercase();

    ImpactBreakdown {
        cost_score: cost_score(&text),
        eco_score: rules::score(ECO_RULES, ECO_BASE, &text),
        cost_hits: rules::hits(COST_RULES, &text),
        eco_hits: rules::hits(ECO_RULES, &text),
    }
}

/// One estimate per product, in input order
pub fn estimate_batch(products: &[Option<MaterialsInput>]) -> Vec<ImpactEstimate> {
    products
        .iter()
        .map(|materials| estimate_impact(materials.as_ref()))
        .collect()
}

// Cost deltas are all positive so the score never drops below the base.
fn cost_score(text: &str) -> u32 {
    rules::score(COST_RULES, COST_BASE, text).max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use couture_models::{BomItem, CostBand, StructuredBom, SustainabilityRating};

    fn text(s: &str) -> MaterialsInput {
        MaterialsInput::from(s)
    }

    #[test]
    fn test_absent_input_is_baseline() {
        let estimate = estimate_impact(None);
        assert_eq!(estimate.cost_band, CostBand::Low);
        assert_eq!(estimate.sustainability_rating, SustainabilityRating::Standard);
        assert_eq!(estimate.eco_score, 0);
        assert_eq!(estimate, ImpactEstimate::BASELINE);
    }

    #[test]
    fn test_structured_recycled_nylon() {
        let bom = StructuredBom::new(vec![BomItem::new(
            "Shell",
            "Recycled Nylon",
            "100% rPET",
            "1.2m",
        )]);
        let estimate = estimate_impact(Some(&MaterialsInput::Structured(bom)));

        assert_eq!(estimate.eco_score, 2);
        assert_eq!(estimate.sustainability_rating, SustainabilityRating::Better);
        assert_eq!(estimate.cost_band, CostBand::Low);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let estimate = estimate_impact(Some(&text("Recycled poly, recycled trims")));
        assert_eq!(estimate.eco_score, 2);
    }

    #[test]
    fn test_cost_band_boundaries() {
        assert_eq!(estimate_impact(Some(&text("Silk charmeuse"))).cost_band, CostBand::Mid);
        assert_eq!(
            estimate_impact(Some(&text("Silk with gold thread"))).cost_band,
            CostBand::High
        );
        assert_eq!(estimate_impact(Some(&text("Cotton jersey"))).cost_band, CostBand::Low);
    }

    #[test]
    fn test_polyester_alone_is_negative() {
        let estimate = estimate_impact(Some(&text("Polyester")));
        assert_eq!(estimate.eco_score, -1);
        assert_eq!(estimate.sustainability_rating, SustainabilityRating::Standard);
    }

    #[test]
    fn test_line_list_end_to_end() {
        let input = MaterialsInput::Lines(vec![
            "## Bill of Materials".to_string(),
            "- **Shell**: Organic Cotton Canvas".to_string(),
            "- **Lining**: Recycled Polyester".to_string(),
        ]);

        assert_eq!(
            normalize(Some(&input)),
            "## Bill of Materials\n- **Shell**: Organic Cotton Canvas\n- **Lining**: Recycled Polyester"
        );

        let estimate = estimate_impact(Some(&input));
        assert_eq!(estimate.eco_score, 4);
        assert_eq!(estimate.sustainability_rating, SustainabilityRating::EcoFocused);
        assert_eq!(estimate.cost_band, CostBand::Low);

        let breakdown = explain_impact(Some(&input));
        assert_eq!(breakdown.cost_score, 2);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            estimate_impact(Some(&text("ORGANIC HEMP"))),
            estimate_impact(Some(&text("organic hemp")))
        );
    }

    #[test]
    fn test_shapes_agree() {
        let bom = StructuredBom::new(vec![
            BomItem::new("Shell", "Deadstock Wool", "90% wool", "2m"),
            BomItem::new("Hardware", "Buckle", "Fidlock magnetic", "2 pcs"),
        ])
        .with_notes(["Vegetable tanned leather tabs"]);
        let structured = MaterialsInput::Structured(bom);
        let canonical = normalize(Some(&structured));
        let lines = MaterialsInput::Lines(canonical.lines().map(str::to_string).collect());

        let expected = estimate_impact(Some(&structured));
        assert_eq!(estimate_impact(Some(&text(&canonical))), expected);
        assert_eq!(estimate_impact(Some(&lines)), expected);
        assert_eq!(expected.eco_score, 4);
        // wool +2, leather +3, fidlock +1
        assert_eq!(expected.cost_band, CostBand::High);
    }

    #[test]
    fn test_breakdown_matches_estimate() {
        let input = text("Upcycled denim jacket, silver rivets, YKK zip, polyester thread");
        let breakdown = explain_impact(Some(&input));

        assert_eq!(breakdown.estimate(), estimate_impact(Some(&input)));
        assert_eq!(breakdown.eco_score, 2);
        assert_eq!(breakdown.cost_score, 6);
        assert_eq!(breakdown.eco_hits.len(), 2);
        assert_eq!(breakdown.cost_hits.len(), 3);
    }

    #[test]
    fn test_batch_keeps_order() {
        let products = vec![Some(text("silk")), None, Some(text("organic linen"))];
        let estimates = estimate_batch(&products);

        assert_eq!(estimates.len(), 3);
        assert_eq!(estimates[0].cost_band, CostBand::Mid);
        assert_eq!(estimates[1], ImpactEstimate::BASELINE);
        assert_eq!(estimates[2].eco_score, 3);
    }
}
