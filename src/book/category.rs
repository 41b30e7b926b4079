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
use crate::book::entry::LedgerEntry;
use crate::util::money::Money;
use std::fmt;

// Ledger names carry their classification in the name itself. These
// prefixes are the naming convention the books are kept under; it is
// case-sensitive, as the account names are entered once and reused.
const PARTY_PREFIX: &str = "Party";
const TRUCK_PREFIX: &str = "Truck";
const BANK_PREFIX: &str = "Bank";
const CASH_LEDGER: &str = "Cash";
const COMMISSION_MARK: &str = "Commission";

/// Every ledger name classifies to exactly one category; names that fit
/// no convention land in Other rather than failing.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Category {
	Party,
	Truck,
	Asset,
	Income,
	Other,
}

impl Category {
	/// First match wins, in this order: Party prefix, Truck prefix,
	/// Cash/Bank, a Commission mention anywhere, then Other.
	pub fn of(ledger: &str) -> Category {
		if ledger.starts_with(PARTY_PREFIX) {
			Category::Party
		} else if ledger.starts_with(TRUCK_PREFIX) {
			Category::Truck
		} else if ledger == CASH_LEDGER || ledger.starts_with(BANK_PREFIX)
		{
			Category::Asset
		} else if ledger.contains(COMMISSION_MARK) {
			Category::Income
		} else {
			Category::Other
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Category::Party => "Party",
			Category::Truck => "Truck",
			Category::Asset => "Asset",
			Category::Income => "Income",
			Category::Other => "Other",
		};
		write!(f, "{}", name)
	}
}

/// The three figures the dashboard cards track. Party exposure is
/// measured on the debit side; truck dues and commission income on the
/// credit side. That asymmetry is the convention the books are kept
/// under and is reproduced here exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTotals {
	pub party: Money,
	pub truck: Money,
	pub income: Money,
}

impl CategoryTotals {
	pub fn of(entries: &[LedgerEntry]) -> CategoryTotals {
		let mut totals = CategoryTotals::default();
		for entry in entries {
			match entry.category() {
				Category::Party => totals.party += entry.debit,
				Category::Truck => totals.truck += entry.credit,
				Category::Income => totals.income += entry.credit,
				Category::Asset | Category::Other => {},
			}
		}
		totals
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::date::Date;

	fn entry(
		date: &str,
		voucher_type: &str,
		voucher_no: &str,
		ledger: &str,
		debit: i64,
		credit: i64,
	) -> LedgerEntry {
		LedgerEntry {
			date: Date::from_str(date).unwrap(),
			voucher_type: voucher_type.to_string(),
			voucher_no: voucher_no.to_string(),
			ledger: ledger.to_string(),
			particulars: String::new(),
			debit: Money::from_rupees(debit),
			credit: Money::from_rupees(credit),
		}
	}

	#[test]
	fn test_prefix_classification() {
		assert_eq!(Category::of("Party: Sharma & Sons"), Category::Party);
		assert_eq!(Category::of("Truck HR55 1234"), Category::Truck);
		assert_eq!(Category::of("Cash"), Category::Asset);
		assert_eq!(Category::of("Bank of Baroda"), Category::Asset);
		assert_eq!(Category::of("Freight Commission"), Category::Income);
		assert_eq!(Category::of("Office Rent"), Category::Other);
	}

	#[test]
	fn test_precedence_first_match_wins() {
		// A Party ledger that mentions commission is still a party.
		assert_eq!(Category::of("Party Commission A/c"), Category::Party);
		assert_eq!(Category::of("Truck Commission"), Category::Truck);
		assert_eq!(Category::of("Bank Commission"), Category::Asset);
	}

	#[test]
	fn test_classification_is_case_sensitive_and_total() {
		assert_eq!(Category::of("party: lowercase"), Category::Other);
		assert_eq!(Category::of("cash"), Category::Other);
		assert_eq!(Category::of(""), Category::Other);
	}

	#[test]
	fn test_category_totals_sides() {
		let entries = vec![
			entry("2025-02-04", "Booking", "1", "Party: A", 500, 0),
			entry("2025-02-04", "Booking", "1", "Truck HR55", 0, 500),
			entry("2025-02-04", "Journal", "2", "Freight Commission", 0, 75),
			entry("2025-02-05", "Receipt", "3", "Cash", 500, 0),
		];

		let totals = CategoryTotals::of(&entries);
		assert_eq!(totals.party, Money::from_rupees(500));
		assert_eq!(totals.truck, Money::from_rupees(500));
		assert_eq!(totals.income, Money::from_rupees(75));
	}

	#[test]
	fn test_category_totals_ignore_off_side_amounts() {
		// A credit against a party or a debit against a truck does not
		// move the cards; each category watches one side only.
		let entries = vec![
			entry("2025-02-04", "Receipt", "1", "Party: A", 0, 300),
			entry("2025-02-04", "Payment", "2", "Truck HR55", 300, 0),
		];

		let totals = CategoryTotals::of(&entries);
		assert_eq!(totals, CategoryTotals::default());
	}
}
