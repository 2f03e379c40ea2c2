//! Calendar dates as `YYYY-MM-DD` strings.

use serde::Serializer;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let formatted = value.format(ISO_DATE).map_err(serde::ser::Error::custom)?;

	serializer.serialize_str(&formatted)
}
