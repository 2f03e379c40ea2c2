//! Keyword rules over upper-cased text. Within each rule list the first rule with any keyword
//! present as a substring decides the outcome. There is no negation or intensity handling, so
//! "not great" scores as positive.

use crate::feedback::{CategoryGuess, DerivedLabel, UrgencyLevel};

pub const NEUTRAL_SENTIMENT: f64 = 0.0;

struct Rule<T> {
	keywords: &'static [&'static str],
	outcome: T,
}

const SENTIMENT_RULES: [Rule<f64>; 4] = [
	Rule { keywords: &["LOVE", "GREAT", "EXCELLENT", "AMAZING"], outcome: 0.8 },
	Rule { keywords: &["HATE", "TERRIBLE", "AWFUL", "WORST"], outcome: -0.8 },
	Rule { keywords: &["PROBLEM", "ISSUE", "ERROR", "BROKEN", "CRASH"], outcome: -0.4 },
	Rule { keywords: &["GOOD", "NICE", "HELPFUL"], outcome: 0.3 },
];

const URGENCY_RULES: [Rule<UrgencyLevel>; 3] = [
	Rule {
		keywords: &["URGENT", "ASAP", "CRITICAL", "EMERGENCY", "IMMEDIATELY"],
		outcome: UrgencyLevel::Critical,
	},
	Rule { keywords: &["IMPORTANT", "SOON", "QUICKLY"], outcome: UrgencyLevel::High },
	Rule { keywords: &["ISSUE", "PROBLEM", "ERROR"], outcome: UrgencyLevel::Medium },
];

const CATEGORY_RULES: [Rule<CategoryGuess>; 4] = [
	Rule {
		keywords: &["CRASH", "ERROR", "LOGIN", "BUG", "SLOW"],
		outcome: CategoryGuess::Technical,
	},
	Rule {
		keywords: &["CHARGE", "BILL", "PAYMENT", "REFUND", "SUBSCRIPTION"],
		outcome: CategoryGuess::Billing,
	},
	Rule { keywords: &["SHIP", "DELIVERY", "PACKAGE", "ORDER"], outcome: CategoryGuess::Shipping },
	Rule {
		keywords: &["FEATURE", "PRODUCT", "IMPROVEMENT", "SUGGESTION"],
		outcome: CategoryGuess::Product,
	},
];

pub fn label(text: &str) -> DerivedLabel {
	let upper = text.to_uppercase();

	DerivedLabel {
		sentiment_score: first_match(&upper, &SENTIMENT_RULES).unwrap_or(NEUTRAL_SENTIMENT),
		urgency_level: first_match(&upper, &URGENCY_RULES).unwrap_or(UrgencyLevel::Low),
		category_guess: first_match(&upper, &CATEGORY_RULES).unwrap_or(CategoryGuess::Other),
	}
}

fn first_match<T>(upper: &str, rules: &[Rule<T>]) -> Option<T>
where
	T: Copy,
{
	rules
		.iter()
		.find(|rule| rule.keywords.iter().any(|keyword| upper.contains(keyword)))
		.map(|rule| rule.outcome)
}
