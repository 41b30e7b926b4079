/* Copyright © 2025-2026 munim contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::book::category::Category;
use crate::book::entry::LedgerEntry;

/// The sentinel the dashboard's dropdowns used for "no restriction".
/// Accepted here too so saved invocations keep working.
const ALL: &str = "all";

/// Criteria for narrowing a page before it is aggregated. Every unset
/// or "all" criterion passes everything; the set ones must all agree
/// for an entry to stay. Predicates are independent, so the order they
/// run in never changes the result.
#[derive(Clone, Debug, Default)]
pub struct EntryFilter {
	pub search: Option<String>,
	pub voucher_type: Option<String>,
	pub ledger: Option<String>,
	pub category: Option<Category>,
}

/// A dropdown-style criterion counts only when present, non-blank, and
/// not the "all" sentinel.
fn wanted(criterion: &Option<String>) -> Option<&str> {
	match criterion {
		Some(c) if !c.trim().is_empty() && !c.eq_ignore_ascii_case(ALL) => {
			Some(c.as_str())
		},
		_ => None,
	}
}

impl EntryFilter {
	pub fn matches(&self, entry: &LedgerEntry) -> bool {
		if let Some(text) = &self.search {
			if !text.trim().is_empty() {
				let needle = text.to_lowercase();
				let hit = entry.ledger.to_lowercase().contains(&needle)
					|| entry
						.particulars
						.to_lowercase()
						.contains(&needle)
					|| entry
						.voucher_no
						.to_lowercase()
						.contains(&needle);
				if !hit {
					return false;
				}
			}
		}

		if let Some(tag) = wanted(&self.voucher_type) {
			if !entry.voucher_type.eq_ignore_ascii_case(tag) {
				return false;
			}
		}

		if let Some(name) = wanted(&self.ledger) {
			if !entry.ledger.eq_ignore_ascii_case(name) {
				return false;
			}
		}

		if let Some(category) = self.category {
			if entry.category() != category {
				return false;
			}
		}

		true
	}

	/// The filtered view. Aggregation always runs on this output, never
	/// on a cached total, so cards and tables cannot disagree.
	pub fn apply(&self, entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
		entries
			.iter()
			.filter(|e| self.matches(e))
			.cloned()
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::date::Date;
	use crate::util::money::Money;

	fn entry(
		voucher_type: &str,
		voucher_no: &str,
		ledger: &str,
		particulars: &str,
	) -> LedgerEntry {
		LedgerEntry {
			date: Date::from_str("2025-02-04").unwrap(),
			voucher_type: voucher_type.to_string(),
			voucher_no: voucher_no.to_string(),
			ledger: ledger.to_string(),
			particulars: particulars.to_string(),
			debit: Money::from_rupees(100),
			credit: Money::zero(),
		}
	}

	fn book() -> Vec<LedgerEntry> {
		vec![
			entry("Booking", "112", "Party: Sharma & Sons", "Delhi to Jaipur"),
			entry("Receipt", "37", "Cash", "Against bill 112"),
			entry("Payment", "56", "Truck HR55 1234", "Advance for trip"),
			entry("Journal", "9", "Freight Commission", "Feb commission"),
		]
	}

	#[test]
	fn test_default_filter_passes_everything() {
		let filter = EntryFilter::default();
		assert_eq!(filter.apply(&book()).len(), 4);
	}

	#[test]
	fn test_all_and_blank_are_no_ops() {
		let filter = EntryFilter {
			search: Some("   ".to_string()),
			voucher_type: Some("All".to_string()),
			ledger: Some(String::new()),
			category: None,
		};
		assert_eq!(filter.apply(&book()).len(), 4);
	}

	#[test]
	fn test_text_search_spans_three_fields() {
		let by_ledger = EntryFilter {
			search: Some("sharma".to_string()),
			..Default::default()
		};
		assert_eq!(by_ledger.apply(&book()).len(), 1);

		let by_particulars = EntryFilter {
			search: Some("JAIPUR".to_string()),
			..Default::default()
		};
		assert_eq!(by_particulars.apply(&book()).len(), 1);

		// "112" is a voucher number on one row and appears in the
		// particulars of another.
		let by_number = EntryFilter {
			search: Some("112".to_string()),
			..Default::default()
		};
		assert_eq!(by_number.apply(&book()).len(), 2);
	}

	#[test]
	fn test_voucher_type_and_ledger_are_exact() {
		let filter = EntryFilter {
			voucher_type: Some("booking".to_string()),
			..Default::default()
		};
		let kept = filter.apply(&book());
		assert_eq!(kept.len(), 1);
		assert_eq!(kept[0].voucher_no, "112");

		let filter = EntryFilter {
			ledger: Some("cash".to_string()),
			..Default::default()
		};
		assert_eq!(filter.apply(&book()).len(), 1);

		// Substrings do not count for dropdown criteria.
		let filter = EntryFilter {
			ledger: Some("Truck".to_string()),
			..Default::default()
		};
		assert!(filter.apply(&book()).is_empty());
	}

	#[test]
	fn test_category_criterion() {
		let filter = EntryFilter {
			category: Some(Category::Income),
			..Default::default()
		};
		let kept = filter.apply(&book());
		assert_eq!(kept.len(), 1);
		assert_eq!(kept[0].ledger, "Freight Commission");
	}

	#[test]
	fn test_criteria_combine_with_and() {
		let filter = EntryFilter {
			search: Some("trip".to_string()),
			category: Some(Category::Party),
			..Default::default()
		};
		assert!(filter.apply(&book()).is_empty());

		let filter = EntryFilter {
			search: Some("trip".to_string()),
			category: Some(Category::Truck),
			..Default::default()
		};
		assert_eq!(filter.apply(&book()).len(), 1);
	}

	#[test]
	fn test_empty_result_is_fine() {
		let filter = EntryFilter {
			search: Some("no such thing".to_string()),
			..Default::default()
		};
		assert!(filter.apply(&book()).is_empty());
	}

	mod randomized {
		use super::*;
		use rand::Rng;

		fn random_book(count: usize) -> Vec<LedgerEntry> {
			const LEDGERS: [&str; 5] = [
				"Party: A",
				"Truck HR55",
				"Cash",
				"Freight Commission",
				"Office Rent",
			];
			const TYPES: [&str; 3] = ["Booking", "Receipt", "Payment"];
			const NOTES: [&str; 3] =
				["Delhi trip", "advance", "against bill"];

			let mut rng = rand::rng();
			(0..count)
				.map(|_| {
					entry(
						TYPES[rng.random_range(0..TYPES.len())],
						&rng.random_range(1..500).to_string(),
						LEDGERS[rng.random_range(0..LEDGERS.len())],
						NOTES[rng.random_range(0..NOTES.len())],
					)
				})
				.collect()
		}

		#[test]
		fn test_predicates_commute() {
			let text_only = EntryFilter {
				search: Some("a".to_string()),
				..Default::default()
			};
			let category_only = EntryFilter {
				category: Some(Category::Party),
				..Default::default()
			};
			let combined = EntryFilter {
				search: Some("a".to_string()),
				category: Some(Category::Party),
				..Default::default()
			};

			for _ in 0..100 {
				let entries = random_book(40);
				let text_then_category =
					category_only.apply(&text_only.apply(&entries));
				let category_then_text =
					text_only.apply(&category_only.apply(&entries));
				assert_eq!(text_then_category, category_then_text);
				assert_eq!(
					combined.apply(&entries),
					text_then_category
				);
			}
		}
	}
}
