use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The medium a feedback item arrived through.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
	Email,
	Chat,
	SupportTicket,
	Review,
	Social,
}
impl Channel {
	pub const ALL: [Self; 5] =
		[Self::Email, Self::Chat, Self::SupportTicket, Self::Review, Self::Social];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Chat => "chat",
			Self::SupportTicket => "support_ticket",
			Self::Review => "review",
			Self::Social => "social",
		}
	}
}
impl Display for Channel {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Ground-truth category: the template pool a generated text was drawn from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	Technical,
	Billing,
	Product,
	Shipping,
}
impl Category {
	pub const ALL: [Self; 4] = [Self::Technical, Self::Billing, Self::Product, Self::Shipping];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Technical => "technical",
			Self::Billing => "billing",
			Self::Product => "product",
			Self::Shipping => "shipping",
		}
	}
}
impl Display for Category {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Category derived from keyword matching. Not reconciled with [`Category`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGuess {
	Technical,
	Billing,
	Shipping,
	Product,
	Other,
}
impl CategoryGuess {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Technical => "technical",
			Self::Billing => "billing",
			Self::Shipping => "shipping",
			Self::Product => "product",
			Self::Other => "other",
		}
	}
}
impl Display for CategoryGuess {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Ordinal severity. The derived ordering is `Low < Medium < High < Critical`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
	Low,
	Medium,
	High,
	Critical,
}
impl UrgencyLevel {
	pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
			Self::Critical => "critical",
		}
	}
}
impl Display for UrgencyLevel {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
	Low,
	Medium,
	High,
}
impl Priority {
	pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FeedbackMetadata {
	/// Star rating, present only for the review channel.
	pub rating: Option<u8>,
	pub priority: Priority,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FeedbackRecord {
	pub feedback_id: String,
	pub customer_id: String,
	pub channel: Channel,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
	pub raw_text: String,
	pub category: Category,
	pub processed: bool,
	pub metadata: FeedbackMetadata,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct DerivedLabel {
	pub sentiment_score: f64,
	pub urgency_level: UrgencyLevel,
	pub category_guess: CategoryGuess,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn urgency_levels_are_ordered_by_severity() {
		assert!(UrgencyLevel::Low < UrgencyLevel::Medium);
		assert!(UrgencyLevel::Medium < UrgencyLevel::High);
		assert!(UrgencyLevel::High < UrgencyLevel::Critical);
		assert_eq!(UrgencyLevel::ALL.iter().max(), Some(&UrgencyLevel::Critical));
	}

	#[test]
	fn enum_names_match_serialized_form() {
		for channel in Channel::ALL {
			let json = serde_json::to_string(&channel).expect("Channel must serialize.");

			assert_eq!(json, format!("\"{}\"", channel.as_str()));
		}

		assert_eq!(
			serde_json::to_string(&CategoryGuess::Other).expect("Guess must serialize."),
			"\"other\""
		);
	}
}
