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
use crate::book::balance_sheet::BalanceSheetSnapshot;
use crate::util::money::Money;

/// The balance sheet page. Unlike the voucher pages this is a financial
/// statement, so it is laid out amount-first in a single right-aligned
/// column rather than through the table printer.
pub struct BalanceSheetReporter {
	sheet: BalanceSheetSnapshot,
}

impl BalanceSheetReporter {
	pub fn new(sheet: BalanceSheetSnapshot) -> Self {
		Self { sheet }
	}

	pub fn print(&self) {
		for line in self.lines() {
			println!("{}", line);
		}
	}

	/// The statement, one string per terminal line.
	pub fn lines(&self) -> Vec<String> {
		let width = self.column_width();
		let rule = "-".repeat(width);

		let mut lines = vec![String::new(), "Assets".to_string()];
		for (name, amount) in &self.sheet.assets {
			lines.push(format!(
				"{:>width$}   {}",
				amount.to_string(),
				name,
				width = width
			));
		}
		lines.push(rule.clone());
		lines.push(format!(
			"{:>width$}   Total Assets",
			self.sheet.total_assets().to_string(),
			width = width
		));

		lines.push(String::new());
		lines.push("Liabilities".to_string());
		for (name, amount) in &self.sheet.liabilities {
			lines.push(format!(
				"{:>width$}   {}",
				amount.to_string(),
				name,
				width = width
			));
		}
		lines.push(rule);
		lines.push(format!(
			"{:>width$}   Total Liabilities",
			self.sheet.total_liabilities().to_string(),
			width = width
		));

		lines.push(String::new());
		lines.push(format!(
			"{:>width$}   Capital",
			self.sheet.capital.to_string(),
			width = width
		));
		lines.push(format!(
			"{:>width$}   Total Equity",
			self.sheet.total_equity().to_string(),
			width = width
		));

		lines.push(String::new());
		lines.push(self.verdict());
		lines
	}

	/// Both sides are always spelled out, so an imbalance shows its
	/// numbers rather than just a flag.
	pub fn verdict(&self) -> String {
		let assets = self.sheet.total_assets();
		let other_side =
			self.sheet.total_liabilities() + self.sheet.total_equity();

		if self.sheet.balanced() {
			format!(
				"Balanced. Assets {} = Liabilities + Equity {}",
				assets, other_side
			)
		} else {
			format!(
				"Not balanced. Assets {} vs Liabilities + Equity {}",
				assets, other_side
			)
		}
	}

	fn column_width(&self) -> usize {
		let mut max_width = 0;

		let mut check = |amount: &Money| {
			max_width = max_width.max(amount.to_string().len());
		};

		for amount in self.sheet.assets.values() {
			check(amount);
		}
		for amount in self.sheet.liabilities.values() {
			check(amount);
		}
		check(&self.sheet.capital);
		check(&self.sheet.total_assets());
		check(&self.sheet.total_liabilities());
		check(&self.sheet.total_equity());

		max_width + 1
	}
}
