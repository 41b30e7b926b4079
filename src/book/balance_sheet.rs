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
use crate::util::money::Money;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The balance-sheet feed as the backend shapes it: two named sections
/// and a capital figure. Maps are ordered so sections print
/// alphabetically. Only the three figures below are derived; the feed
/// itself is taken at face value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceSheetSnapshot {
	pub assets: BTreeMap<String, Money>,
	pub liabilities: BTreeMap<String, Money>,
	pub capital: Money,
}

impl BalanceSheetSnapshot {
	pub fn total_assets(&self) -> Money {
		self.assets.values().copied().sum()
	}

	pub fn total_liabilities(&self) -> Money {
		self.liabilities.values().copied().sum()
	}

	/// Equity is not served; it is capital plus the net of the two
	/// sides, the way the office worksheet computes it.
	pub fn total_equity(&self) -> Money {
		self.capital + (self.total_assets() - self.total_liabilities())
	}

	/// Advisory only. An imbalance is reported to the user with both
	/// sides shown; nothing is ever adjusted to force agreement.
	pub fn balanced(&self) -> bool {
		self.total_assets()
			== self.total_liabilities() + self.total_equity()
	}
}
