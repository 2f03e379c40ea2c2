use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use insight_domain::FeedbackRecord;

const MIN_TOKEN_CHARS: usize = 2;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SimilarIssue {
	pub feedback_id: String,
	pub similarity: f64,
	pub raw_text: String,
}

pub fn tokenize(text: &str) -> HashSet<String> {
	let mut normalized = String::with_capacity(text.len());

	for ch in text.chars() {
		if ch.is_alphanumeric() {
			normalized.extend(ch.to_lowercase());
		} else {
			normalized.push(' ');
		}
	}

	normalized
		.split_whitespace()
		.filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
		.map(str::to_string)
		.collect()
}

pub fn jaccard(left: &HashSet<String>, right: &HashSet<String>) -> f64 {
	let union = left.union(right).count();

	if union == 0 {
		return 0.0;
	}

	left.intersection(right).count() as f64 / union as f64
}

/// Ranks `records` against `query`, best first. Records sharing no token are dropped. Ties keep
/// the smaller `feedback_id` first.
pub fn rank<'a, I>(query: &str, records: I, limit: usize) -> Vec<SimilarIssue>
where
	I: IntoIterator<Item = &'a FeedbackRecord>,
{
	let query_tokens = tokenize(query);

	if query_tokens.is_empty() {
		return Vec::new();
	}

	let mut scored: Vec<SimilarIssue> = records
		.into_iter()
		.filter_map(|record| {
			let similarity = jaccard(&query_tokens, &tokenize(&record.raw_text));

			(similarity > 0.0).then(|| SimilarIssue {
				feedback_id: record.feedback_id.clone(),
				similarity,
				raw_text: record.raw_text.clone(),
			})
		})
		.collect();

	scored.sort_by(|a, b| {
		b.similarity.total_cmp(&a.similarity).then_with(|| a.feedback_id.cmp(&b.feedback_id))
	});
	scored.truncate(limit);

	scored
}
