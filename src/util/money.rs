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
use anyhow::{bail, Error};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A rupee amount held as a signed count of paise. Exact at the precision
/// the books use; vastly more range than any transport office will ever
/// book. Debits and credits arrive non-negative by convention, but the
/// type is signed because derived figures (difference, ledger balance,
/// equity) legitimately go below zero.
#[derive(
	Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Money {
	paise: i64,
}

impl Money {
	pub fn zero() -> Self {
		Self { paise: 0 }
	}

	pub fn from_paise(paise: i64) -> Self {
		Self { paise }
	}

	pub fn from_rupees(rupees: i64) -> Self {
		Self {
			paise: rupees * 100,
		}
	}

	/// Parses a decimal string such as "1234.56" or "-12". Grouping commas
	/// are tolerated and ignored. Anything beyond two decimal places is
	/// rounded half-up at the paisa.
	pub fn from_str(input: &str) -> Result<Self, Error> {
		let cleaned: String =
			input.trim().chars().filter(|&c| c != ',').collect();

		let is_negative = cleaned.starts_with('-');
		let unsigned = cleaned.trim_start_matches('-');

		let parts: Vec<&str> = unsigned.split('.').collect();

		let (whole, frac) = match parts.len() {
			1 => (parts[0], ""),
			2 => (parts[0], parts[1]),
			_ => bail!("Invalid amount: {}", input),
		};

		if whole.is_empty() && frac.is_empty() {
			bail!("Invalid amount: {}", input)
		}

		if !whole.bytes().all(|b| b.is_ascii_digit())
			|| !frac.bytes().all(|b| b.is_ascii_digit())
		{
			bail!("Invalid amount: {}", input)
		}

		let rupees = if whole.is_empty() {
			0
		} else {
			whole.parse::<i64>()?
		};

		let digits: Vec<u8> =
			frac.bytes().map(|b| (b - b'0') as u8).collect();
		let mut paise = rupees * 100;
		paise += digits.first().copied().unwrap_or(0) as i64 * 10;
		paise += digits.get(1).copied().unwrap_or(0) as i64;
		if digits.get(2).copied().unwrap_or(0) >= 5 {
			paise += 1;
		}

		if is_negative {
			paise = -paise;
		}

		Ok(Self { paise })
	}

	/// For amounts that arrive as JSON numbers. Rounds to the nearest
	/// paisa, which also disposes of floating-point dust such as
	/// 123.45000000000001.
	pub fn from_f64(value: f64) -> Self {
		Self {
			paise: (value * 100.0).round() as i64,
		}
	}

	pub fn paise(&self) -> i64 {
		self.paise
	}

	pub fn is_zero(&self) -> bool {
		self.paise == 0
	}

	pub fn abs(&self) -> Self {
		Self {
			paise: self.paise.abs(),
		}
	}

	/// Undecorated decimal form, e.g. "-1234.56". This is what goes into
	/// spreadsheet cells, where grouping would turn numbers into text.
	pub fn plain(&self) -> String {
		let sign = if self.paise < 0 { "-" } else { "" };
		let abs = self.paise.unsigned_abs();
		format!("{}{}.{:02}", sign, abs / 100, abs % 100)
	}

	/// Card form with the rupee sign. Tables stay bare so that column
	/// widths line up byte for byte; only summary cards get the symbol.
	pub fn currency(&self) -> String {
		format!("₹ {}", self)
	}
}

/// Groups an unsigned rupee figure the Indian way: the last three digits
/// stand alone, everything above them pairs off. 1234567 -> "12,34,567".
fn group_indian(rupees: u64) -> String {
	let digits = rupees.to_string();
	if digits.len() <= 3 {
		return digits;
	}

	let (head, tail) = digits.split_at(digits.len() - 3);
	let mut out = String::new();

	let mut rest = head;
	if rest.len() % 2 == 1 {
		out.push_str(&rest[..1]);
		rest = &rest[1..];
		if !rest.is_empty() {
			out.push(',');
		}
	}
	while !rest.is_empty() {
		out.push_str(&rest[..2]);
		rest = &rest[2..];
		if !rest.is_empty() {
			out.push(',');
		}
	}

	out.push(',');
	out.push_str(tail);
	out
}

impl fmt::Display for Money {
	/// Renders with Indian digit grouping and two decimal places, the
	/// format every table and card in the dashboard uses.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sign = if self.paise < 0 { "-" } else { "" };
		let abs = self.paise.unsigned_abs();
		write!(f, "{}{}.{:02}", sign, group_indian(abs / 100), abs % 100)
	}
}

impl Add for Money {
	type Output = Money;
	fn add(self, rhs: Self) -> Self::Output {
		Self {
			paise: self.paise + rhs.paise,
		}
	}
}

impl AddAssign for Money {
	fn add_assign(&mut self, rhs: Self) {
		self.paise += rhs.paise;
	}
}

impl Sub for Money {
	type Output = Money;
	fn sub(self, rhs: Self) -> Self::Output {
		Self {
			paise: self.paise - rhs.paise,
		}
	}
}

impl SubAssign for Money {
	fn sub_assign(&mut self, rhs: Self) {
		self.paise -= rhs.paise;
	}
}

impl Neg for Money {
	type Output = Money;
	fn neg(self) -> Self::Output {
		Self { paise: -self.paise }
	}
}

impl Sum for Money {
	fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
		iter.fold(Money::zero(), |acc, m| acc + m)
	}
}

impl<'de> Deserialize<'de> for Money {
	/// The reporting backend is loose about amount types: most feeds send
	/// JSON numbers, some older endpoints send numeric strings, and
	/// absent sides come through as null. All of them land here.
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = serde_json::Value::deserialize(deserializer)?;
		match value {
			serde_json::Value::Number(num) => {
				if let Some(i) = num.as_i64() {
					Ok(Money::from_rupees(i))
				} else if let Some(f) = num.as_f64() {
					Ok(Money::from_f64(f))
				} else {
					Err(serde::de::Error::custom("amount out of range"))
				}
			},
			serde_json::Value::String(s) => {
				Money::from_str(&s).map_err(serde::de::Error::custom)
			},
			serde_json::Value::Null => Ok(Money::zero()),
			_ => Err(serde::de::Error::custom("expected an amount")),
		}
	}
}
