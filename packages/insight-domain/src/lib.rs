pub mod feedback;
pub mod generator;
pub mod labeler;
pub mod roi;

pub use feedback::{
	Category, CategoryGuess, Channel, DerivedLabel, FeedbackMetadata, FeedbackRecord, Priority,
	UrgencyLevel,
};
pub use generator::FeedbackGenerator;
pub use labeler::label;
