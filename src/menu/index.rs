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

/// One navigation target. Groups carry children one level deep; leaves
/// have an empty slice.
#[derive(Debug)]
pub struct MenuItem {
	pub label: &'static str,
	pub route: &'static str,
	pub icon: &'static str,
	pub children: &'static [MenuItem],
}

/// The whole navigation tree, in display order. Labels are written as
/// the office knows them, possessive apostrophe and all.
pub const MENU: &[MenuItem] = &[
	MenuItem {
		label: "Dashboard",
		route: "/dashboard",
		icon: "gauge",
		children: &[],
	},
	MenuItem {
		label: "Bookings",
		route: "/vouchers/bookings",
		icon: "clipboard",
		children: &[],
	},
	MenuItem {
		label: "Receipts",
		route: "/vouchers/receipts",
		icon: "arrow-down",
		children: &[],
	},
	MenuItem {
		label: "Payments",
		route: "/vouchers/payments",
		icon: "arrow-up",
		children: &[],
	},
	MenuItem {
		label: "Parties",
		route: "/ledgers/parties",
		icon: "users",
		children: &[],
	},
	MenuItem {
		label: "Trucks",
		route: "/ledgers/trucks",
		icon: "truck",
		children: &[],
	},
	MenuItem {
		label: "Bank's",
		route: "/banking",
		icon: "landmark",
		children: &[
			MenuItem {
				label: "Bank Book",
				route: "/banking/bank-book",
				icon: "book",
				children: &[],
			},
			MenuItem {
				label: "Banking Register",
				route: "/banking/register",
				icon: "list",
				children: &[],
			},
		],
	},
	MenuItem {
		label: "Accounting",
		route: "/accounting",
		icon: "scale",
		children: &[
			MenuItem {
				label: "Day Book",
				route: "/accounting/day-book",
				icon: "calendar",
				children: &[],
			},
			MenuItem {
				label: "Trial Balance",
				route: "/accounting/trial-balance",
				icon: "balance",
				children: &[],
			},
			MenuItem {
				label: "Balance Sheet",
				route: "/accounting/balance-sheet",
				icon: "sheet",
				children: &[],
			},
		],
	},
	MenuItem {
		label: "Commission Ledger",
		route: "/commission/commission-ledger",
		icon: "percent",
		children: &[],
	},
];

/// Case-insensitive substring search over labels, groups and children
/// alike. A blank query means "no active search" and returns nothing.
pub fn search(query: &str) -> Vec<&'static MenuItem> {
	search_in(MENU, query)
}

fn search_in(
	menu: &'static [MenuItem],
	query: &str,
) -> Vec<&'static MenuItem> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return Vec::new();
	}

	let mut hits = Vec::new();
	for item in menu {
		if item.label.to_lowercase().contains(&needle) {
			hits.push(item);
		}
		for child in item.children {
			if child.label.to_lowercase().contains(&needle) {
				hits.push(child);
			}
		}
	}
	hits
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels(hits: &[&MenuItem]) -> Vec<&str> {
		hits.iter().map(|i| i.label).collect()
	}

	#[test]
	fn test_blank_query_returns_nothing() {
		assert!(search("").is_empty());
		assert!(search("   ").is_empty());
	}

	#[test]
	fn test_bank_matches_group_and_children() {
		let hits = search("bank");
		assert_eq!(
			labels(&hits),
			vec!["Bank's", "Bank Book", "Banking Register"]
		);
	}

	#[test]
	fn test_search_is_case_insensitive() {
		let hits = search("BOOK");
		assert_eq!(
			labels(&hits),
			vec!["Bookings", "Bank Book", "Day Book"]
		);
	}

	#[test]
	fn test_children_are_flattened() {
		let hits = search("trial");
		assert_eq!(labels(&hits), vec!["Trial Balance"]);
		assert_eq!(hits[0].route, "/accounting/trial-balance");
	}

	#[test]
	fn test_no_match_is_empty_not_error() {
		assert!(search("payroll").is_empty());
	}
}
