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
use crate::book::aggregate::{group_by_date, Totals};
use crate::book::category::CategoryTotals;
use crate::book::entry::LedgerEntry;
use crate::reports::table::Table;

/// The day book page: summary cards, then one table of vouchers grouped
/// by day with per-day subtotals and a grand total.
pub struct DayBookReporter {
	// Feed order is kept; the grouping keys on first appearance.
	entries: Vec<LedgerEntry>,
}

impl DayBookReporter {
	pub fn new(entries: Vec<LedgerEntry>) -> Self {
		Self { entries }
	}

	pub fn print(&self) {
		if self.entries.is_empty() {
			println!("No data");
			return;
		}

		for card in self.cards() {
			println!("{}", card);
		}
		self.table().print();
	}

	/// The summary cards: grand totals, the reconciliation line, and the
	/// three category figures.
	pub fn cards(&self) -> Vec<String> {
		let totals = Totals::of(&self.entries);
		let categories = CategoryTotals::of(&self.entries);

		let verdict = if totals.balanced() {
			"(balanced)"
		} else {
			"(out of balance)"
		};

		vec![
			format!("Total Debit     {}", totals.total_debit.currency()),
			format!("Total Credit    {}", totals.total_credit.currency()),
			format!(
				"Difference      {} {}",
				totals.difference.currency(),
				verdict
			),
			format!("Party Debits    {}", categories.party.currency()),
			format!("Truck Credits   {}", categories.truck.currency()),
			format!("Commission      {}", categories.income.currency()),
		]
	}

	/// Builds the voucher table. The date is shown only on the first row
	/// of its day; each day closes with its own subtotal.
	pub fn table(&self) -> Table {
		let mut table = Table::new(7);
		table.right_align(vec![5, 6]);
		table.add_header(vec![
			"Date",
			"Type",
			"No",
			"Ledger",
			"Particulars",
			"Debit",
			"Credit",
		]);
		table.add_separator();

		for bucket in group_by_date(&self.entries) {
			for (i, entry) in bucket.entries.iter().enumerate() {
				let day = if i == 0 { bucket.day.as_str() } else { "" };
				table.add_row(vec![
					day,
					&entry.voucher_type,
					&entry.voucher_no,
					&entry.ledger,
					&entry.particulars,
					&entry.debit.to_string(),
					&entry.credit.to_string(),
				]);
			}

			table.add_partial_separator(vec![5, 6]);
			table.add_row(vec![
				"",
				"",
				"",
				"",
				"",
				&bucket.debit.to_string(),
				&bucket.credit.to_string(),
			]);
		}

		let totals = Totals::of(&self.entries);
		table.add_separator();
		table.add_row(vec![
			"",
			"",
			"",
			"",
			"Grand Total",
			&totals.total_debit.to_string(),
			&totals.total_credit.to_string(),
		]);

		table
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::date::Date;
	use crate::util::money::Money;

	fn entry(
		date: &str,
		ledger: &str,
		debit: i64,
		credit: i64,
	) -> LedgerEntry {
		LedgerEntry {
			date: Date::from_str(date).unwrap(),
			voucher_type: "Booking".to_string(),
			voucher_no: "1".to_string(),
			ledger: ledger.to_string(),
			particulars: "trip".to_string(),
			debit: Money::from_rupees(debit),
			credit: Money::from_rupees(credit),
		}
	}

	#[test]
	fn test_date_appears_once_per_day() {
		let reporter = DayBookReporter::new(vec![
			entry("2025-02-04", "Party: A", 500, 0),
			entry("2025-02-04", "Truck HR55", 0, 500),
			entry("2025-02-05", "Cash", 100, 0),
		]);

		let rendered = reporter.table().render();
		assert_eq!(rendered.matches("04 Feb 2025").count(), 1);
		assert_eq!(rendered.matches("05 Feb 2025").count(), 1);
	}

	#[test]
	fn test_grand_total_row() {
		let reporter = DayBookReporter::new(vec![
			entry("2025-02-04", "Party: A", 500, 0),
			entry("2025-02-05", "Cash", 100, 250),
		]);

		let rendered = reporter.table().render();
		let grand = rendered
			.lines()
			.find(|l| l.contains("Grand Total"))
			.unwrap();
		assert!(grand.contains("600.00"));
		assert!(grand.contains("250.00"));
	}

	#[test]
	fn test_cards_carry_rupee_sign_and_verdict() {
		let reporter = DayBookReporter::new(vec![
			entry("2025-02-04", "Party: A", 500, 0),
			entry("2025-02-04", "Truck HR55", 0, 500),
		]);

		let cards = reporter.cards();
		assert_eq!(cards[0], "Total Debit     ₹ 500.00");
		assert_eq!(cards[2], "Difference      ₹ 0.00 (balanced)");
		assert_eq!(cards[3], "Party Debits    ₹ 500.00");
		assert_eq!(cards[4], "Truck Credits   ₹ 500.00");
		assert_eq!(cards[5], "Commission      ₹ 0.00");
	}

	#[test]
	fn test_unbalanced_day_is_called_out() {
		let reporter =
			DayBookReporter::new(vec![entry("2025-02-04", "Cash", 100, 0)]);

		let cards = reporter.cards();
		assert!(cards[2].contains("out of balance"));
	}
}
