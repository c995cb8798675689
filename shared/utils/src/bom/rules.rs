//! Keyword scoring rules
//!
//! Each rule is a case-insensitive substring test over canonical BOM text.
//! A rule contributes its delta at most once, however many of its keywords
//! appear or however often they repeat.

use serde::Serialize;

/// One additive scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Fires when any of these keywords is present
    pub any_of: &'static [&'static str],
    /// Suppressed when any of these keywords is present
    pub unless: &'static [&'static str],
    pub delta: i32,
}

/// A rule that fired, with the keywords that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub keywords: Vec<&'static str>,
    pub delta: i32,
}

impl KeywordRule {
    const fn new(any_of: &'static [&'static str], delta: i32) -> Self {
        Self {
            any_of,
            unless: &[],
            delta,
        }
    }

    const fn unless(self, unless: &'static [&'static str]) -> Self {
        Self { unless, ..self }
    }

    /// `text` must already be lower-cased
    pub fn matches(&self, text: &str) -> bool {
        self.any_of.iter().any(|kw| text.contains(kw))
            && !self.unless.iter().any(|kw| text.contains(kw))
    }

    /// Like [`matches`](Self::matches) but reports which keywords fired
    pub fn hit(&self, text: &str) -> Option<RuleHit> {
        if !self.matches(text) {
            return None;
        }
        let keywords = self
            .any_of
            .iter()
            .copied()
            .filter(|kw| text.contains(kw))
            .collect();
        Some(RuleHit {
            keywords,
            delta: self.delta,
        })
    }
}

/// Sustainability-positive and -negative material keywords. Starts at 0.
pub static ECO_RULES: &[KeywordRule] = &[
    KeywordRule::new(&["recycled"], 2),
    KeywordRule::new(&["organic"], 2),
    KeywordRule::new(&["upcycled", "deadstock"], 3),
    KeywordRule::new(&["biodegradable"], 2),
    KeywordRule::new(&["hemp", "linen", "tencel", "lyocell"], 1),
    KeywordRule::new(&["vegetable tanned", "vegan"], 1),
    KeywordRule::new(&["polyester", "nylon", "acrylic"], -1).unless(&["recycled"]),
];

/// Premium materials, trims and hardware. Starts at 1.
pub static COST_RULES: &[KeywordRule] = &[
    KeywordRule::new(&["silk", "cashmere", "leather"], 3),
    KeywordRule::new(&["wool", "embroidery", "technical", "gore-tex"], 2),
    KeywordRule::new(&["gold", "silver", "titanium"], 3),
    KeywordRule::new(&["ykk", "fidlock", "cobra buckle"], 1),
    KeywordRule::new(&["denim", "canvas", "heavyweight"], 1),
];

pub const ECO_BASE: i32 = 0;
pub const COST_BASE: i32 = 1;

/// Folds a rule table over lower-cased text starting from `base`
pub fn score(rules: &[KeywordRule], base: i32, text: &str) -> i32 {
    rules
        .iter()
        .filter(|rule| rule.matches(text))
        .fold(base, |acc, rule| acc + rule.delta)
}

/// Every rule in the table that fired, in table order
pub fn hits(rules: &[KeywordRule], text: &str) -> Vec<RuleHit> {
    rules.iter().filter_map(|rule| rule.hit(text)).collect()
}
