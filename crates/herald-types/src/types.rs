//! Common types used throughout Herald.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialEq for Timestamp {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl std::cmp::PartialOrd for Timestamp {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		self.0.partial_cmp(&other.0)
	}
}

impl std::cmp::Eq for Timestamp {}

impl std::cmp::Ord for Timestamp {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.0.cmp(&other.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// Page //
//******//

/// Simple-pagination envelope: `data` plus relative prev/next links and
/// position metadata. Built from up to one row more than `per_page`, so
/// the next link can be derived without a count query.
#[derive(Debug, Serialize)]
pub struct Page<T> {
	pub data: Vec<T>,
	pub links: PageLinks,
	pub meta: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct PageLinks {
	pub prev: Option<String>,
	pub next: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PageMeta {
	#[serde(rename = "currentPage")]
	pub current_page: u32,
	#[serde(rename = "perPage")]
	pub per_page: u32,
	pub from: Option<u32>,
	pub to: Option<u32>,
}

impl<T> Page<T> {
	/// Builds the envelope. `page` is 1-based; an overflow row beyond
	/// `per_page` is dropped from `data` and turned into the next link.
	pub fn simple(mut items: Vec<T>, page: u32, per_page: u32, path: &str) -> Page<T> {
		let page = page.max(1);
		let has_more = items.len() as u32 > per_page;
		items.truncate(per_page as usize);
		let count = items.len() as u32;
		let from = (count > 0).then(|| (page - 1) * per_page + 1);

		Page {
			links: PageLinks {
				prev: (page > 1).then(|| format!("{}?page={}", path, page - 1)),
				next: has_more.then(|| format!("{}?page={}", path, page + 1)),
			},
			meta: PageMeta {
				current_page: page,
				per_page,
				from,
				to: from.map(|from| from + count - 1),
			},
			data: items,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_turns_overflow_row_into_next_link() {
		let page = Page::simple(vec![1, 2, 3], 1, 2, "/api/notifications");

		assert_eq!(page.data, vec![1, 2]);
		assert_eq!(page.links.prev, None);
		assert_eq!(page.links.next.as_deref(), Some("/api/notifications?page=2"));
		assert_eq!(page.meta.from, Some(1));
		assert_eq!(page.meta.to, Some(2));
	}

	#[test]
	fn page_two_links_back() {
		let page = Page::simple(vec![4, 5], 2, 2, "/n");

		assert_eq!(page.links.prev.as_deref(), Some("/n?page=1"));
		assert_eq!(page.links.next, None);
		assert_eq!(page.meta.from, Some(3));
		assert_eq!(page.meta.to, Some(4));
	}

	#[test]
	fn empty_page_has_no_positions() {
		let page = Page::simple(Vec::<u32>::new(), 1, 15, "/n");

		assert!(page.data.is_empty());
		assert_eq!(page.meta.from, None);
		assert_eq!(page.meta.to, None);
		assert_eq!(page.links.next, None);
	}

	#[test]
	fn page_zero_is_treated_as_first() {
		let page = Page::simple(vec![1], 0, 15, "/n");

		assert_eq!(page.meta.current_page, 1);
		assert_eq!(page.links.prev, None);
	}
}

// vim: ts=4
