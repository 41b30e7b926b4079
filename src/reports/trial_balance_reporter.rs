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
use crate::book::aggregate::{
	non_zero_rows, trial_balance_rows, Totals, TrialBalanceRow,
};
use crate::book::entry::LedgerEntry;
use crate::reports::table::Table;

/// The trial balance page: one row per ledger with its net side, and a
/// verdict on whether the books agree.
pub struct TrialBalanceReporter {
	rows: Vec<TrialBalanceRow>,
	totals: Totals,
}

impl TrialBalanceReporter {
	/// Ledgers with no activity at all are suppressed before anything is
	/// summed or shown.
	pub fn new(entries: Vec<LedgerEntry>) -> Self {
		let active = non_zero_rows(&entries);
		Self {
			rows: trial_balance_rows(&active),
			totals: Totals::of(&active),
		}
	}

	pub fn print(&self) {
		if self.rows.is_empty() {
			println!("No data");
			return;
		}

		for card in self.cards() {
			println!("{}", card);
		}
		self.table().print();
		println!();
		println!("{}", self.verdict());
	}

	pub fn cards(&self) -> Vec<String> {
		vec![
			format!(
				"Total Debit     {}",
				self.totals.total_debit.currency()
			),
			format!(
				"Total Credit    {}",
				self.totals.total_credit.currency()
			),
			format!(
				"Difference      {}",
				self.totals.difference.currency()
			),
		]
	}

	/// Balance is shown as a magnitude; the side column says which way
	/// it leans.
	pub fn table(&self) -> Table {
		let mut table = Table::new(5);
		table.right_align(vec![1, 2, 3]);
		table.add_header(vec![
			"Ledger", "Debit", "Credit", "Balance", "Side",
		]);
		table.add_separator();

		for row in &self.rows {
			table.add_row(vec![
				&row.ledger,
				&row.debit.to_string(),
				&row.credit.to_string(),
				&row.balance().abs().to_string(),
				row.side(),
			]);
		}

		table.add_partial_separator(vec![1, 2]);
		table.add_row(vec![
			"",
			&self.totals.total_debit.to_string(),
			&self.totals.total_credit.to_string(),
			"",
			"",
		]);

		table
	}

	pub fn verdict(&self) -> String {
		if self.totals.balanced() {
			format!(
				"Balanced. Dr {} = Cr {}",
				self.totals.total_debit, self.totals.total_credit
			)
		} else {
			format!(
				"Not balanced. Dr {} vs Cr {}, difference {}",
				self.totals.total_debit,
				self.totals.total_credit,
				self.totals.difference
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::date::Date;
	use crate::util::money::Money;

	fn entry(ledger: &str, debit: i64, credit: i64) -> LedgerEntry {
		LedgerEntry {
			date: Date::from_str("2025-02-04").unwrap(),
			voucher_type: "Journal".to_string(),
			voucher_no: "1".to_string(),
			ledger: ledger.to_string(),
			particulars: String::new(),
			debit: Money::from_rupees(debit),
			credit: Money::from_rupees(credit),
		}
	}

	#[test]
	fn test_balanced_pair_of_ledgers() {
		let reporter = TrialBalanceReporter::new(vec![
			entry("Party: A", 500, 0),
			entry("Truck HR55", 0, 500),
		]);

		assert_eq!(
			reporter.verdict(),
			"Balanced. Dr 500.00 = Cr 500.00"
		);

		let rendered = reporter.table().render();
		let party = rendered
			.lines()
			.find(|l| l.starts_with("Party: A"))
			.unwrap();
		assert!(party.trim_end().ends_with("Dr"));
		let truck = rendered
			.lines()
			.find(|l| l.starts_with("Truck HR55"))
			.unwrap();
		assert!(truck.trim_end().ends_with("Cr"));
	}

	#[test]
	fn test_dormant_ledgers_are_suppressed() {
		let reporter = TrialBalanceReporter::new(vec![
			entry("Party: A", 500, 0),
			entry("Dormant", 0, 0),
		]);

		let rendered = reporter.table().render();
		assert!(!rendered.contains("Dormant"));
	}

	#[test]
	fn test_balance_column_is_magnitude() {
		let reporter =
			TrialBalanceReporter::new(vec![entry("Cash", 0, 400)]);

		let rendered = reporter.table().render();
		let cash =
			rendered.lines().find(|l| l.starts_with("Cash")).unwrap();
		assert!(cash.contains("400.00"));
		assert!(!cash.contains("-400.00"));
		assert!(cash.trim_end().ends_with("Cr"));
	}

	#[test]
	fn test_imbalance_verdict_reports_difference() {
		let reporter = TrialBalanceReporter::new(vec![
			entry("Party: A", 500, 0),
			entry("Cash", 0, 200),
		]);

		assert_eq!(
			reporter.verdict(),
			"Not balanced. Dr 500.00 vs Cr 200.00, difference 300.00"
		);
	}

	#[test]
	fn test_all_dormant_book_prints_no_data() {
		let reporter =
			TrialBalanceReporter::new(vec![entry("Dormant", 0, 0)]);
		assert!(reporter.rows.is_empty());
	}
}
