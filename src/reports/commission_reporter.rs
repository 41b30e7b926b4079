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
use crate::book::aggregate::Totals;
use crate::book::category::CategoryTotals;
use crate::book::entry::LedgerEntry;
use crate::reports::table::Table;

/// The commission ledger page: a flat voucher list for the requested
/// range, with the earned commission called out on top.
pub struct CommissionReporter {
	entries: Vec<LedgerEntry>,
}

impl CommissionReporter {
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

	pub fn cards(&self) -> Vec<String> {
		let totals = Totals::of(&self.entries);
		let income = CategoryTotals::of(&self.entries).income;

		vec![
			format!("Commission Income   {}", income.currency()),
			format!(
				"Total Debit         {}",
				totals.total_debit.currency()
			),
			format!(
				"Total Credit        {}",
				totals.total_credit.currency()
			),
		]
	}

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

		for entry in &self.entries {
			table.add_row(vec![
				&entry.date.to_string(),
				&entry.voucher_type,
				&entry.voucher_no,
				&entry.ledger,
				&entry.particulars,
				&entry.debit.to_string(),
				&entry.credit.to_string(),
			]);
		}

		let totals = Totals::of(&self.entries);
		table.add_partial_separator(vec![5, 6]);
		table.add_row(vec![
			"",
			"",
			"",
			"",
			"",
			&totals.total_debit.to_string(),
			&totals.total_credit.to_string(),
		]);

		table
	}
}
