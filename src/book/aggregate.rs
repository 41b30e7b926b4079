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
use std::collections::BTreeMap;

/// Grand totals over a set of entries. An empty set totals to zeros,
/// which counts as balanced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
	pub total_debit: Money,
	pub total_credit: Money,
	pub difference: Money,
}

impl Totals {
	pub fn of(entries: &[LedgerEntry]) -> Totals {
		let total_debit: Money = entries.iter().map(|e| e.debit).sum();
		let total_credit: Money = entries.iter().map(|e| e.credit).sum();
		Totals {
			total_debit,
			total_credit,
			difference: total_debit - total_credit,
		}
	}

	pub fn balanced(&self) -> bool {
		self.difference.is_zero()
	}
}

/// Drops exactly the rows with zero on both sides, keeping the rest in
/// their original order.
pub fn non_zero_rows(entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
	entries
		.iter()
		.filter(|e| e.has_activity())
		.cloned()
		.collect()
}

/// One day of the day book. The key is the display-formatted date, so
/// raw datetimes that render to the same day share a bucket.
#[derive(Clone, Debug)]
pub struct DayBucket {
	pub day: String,
	pub entries: Vec<LedgerEntry>,
	pub debit: Money,
	pub credit: Money,
}

/// Buckets entries by day, in order of first appearance. Every entry
/// lands in exactly one bucket.
pub fn group_by_date(entries: &[LedgerEntry]) -> Vec<DayBucket> {
	let mut buckets: Vec<DayBucket> = Vec::new();
	for entry in entries {
		let day = entry.date.to_string();
		match buckets.iter_mut().find(|b| b.day == day) {
			Some(bucket) => {
				bucket.debit += entry.debit;
				bucket.credit += entry.credit;
				bucket.entries.push(entry.clone());
			},
			None => buckets.push(DayBucket {
				day,
				debit: entry.debit,
				credit: entry.credit,
				entries: vec![entry.clone()],
			}),
		}
	}
	buckets
}

/// One ledger's standing in the trial balance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialBalanceRow {
	pub ledger: String,
	pub debit: Money,
	pub credit: Money,
}

impl TrialBalanceRow {
	pub fn balance(&self) -> Money {
		self.debit - self.credit
	}

	/// "Dr" when the ledger owes, "Cr" when it is owed, blank when even.
	pub fn side(&self) -> &'static str {
		let balance = self.balance();
		if balance > Money::zero() {
			"Dr"
		} else if balance < Money::zero() {
			"Cr"
		} else {
			""
		}
	}
}

/// Collapses entries to one row per ledger name, alphabetically.
pub fn trial_balance_rows(entries: &[LedgerEntry]) -> Vec<TrialBalanceRow> {
	let mut by_ledger: BTreeMap<String, (Money, Money)> = BTreeMap::new();
	for entry in entries {
		let sums = by_ledger.entry(entry.ledger.clone()).or_default();
		sums.0 += entry.debit;
		sums.1 += entry.credit;
	}

	by_ledger
		.into_iter()
		.map(|(ledger, (debit, credit))| TrialBalanceRow {
			ledger,
			debit,
			credit,
		})
		.collect()
}
