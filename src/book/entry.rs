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
use crate::util::date::Date;
use crate::util::money::Money;
use serde::{Deserialize, Deserializer};

/// One journal line as the reporting backend serves it. Every field is
/// optional on the wire; whatever is absent deserializes to its zero
/// form, so a sparse feed never sinks a whole page. Debit and credit
/// arrive non-negative by convention, and a line with both at zero is
/// legal (suppressed by some views, never an error).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerEntry {
	pub date: Date,
	pub voucher_type: String,
	#[serde(deserialize_with = "deserialize_number_as_string")]
	pub voucher_no: String,
	pub ledger: String,
	pub particulars: String,
	pub debit: Money,
	pub credit: Money,
}

impl LedgerEntry {
	pub fn category(&self) -> Category {
		Category::of(&self.ledger)
	}

	pub fn kind(&self) -> VoucherKind {
		VoucherKind::from_tag(&self.voucher_type)
	}

	/// False only when both sides are zero.
	pub fn has_activity(&self) -> bool {
		!(self.debit.is_zero() && self.credit.is_zero())
	}
}

/// Voucher tags are open-ended strings upstream. The known ones get
/// their own styling in printed documents; anything else is Other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoucherKind {
	Booking,
	Receipt,
	Payment,
	Journal,
	Contra,
	Other,
}

impl VoucherKind {
	pub fn from_tag(tag: &str) -> VoucherKind {
		match tag.to_lowercase().as_str() {
			"booking" => VoucherKind::Booking,
			"receipt" => VoucherKind::Receipt,
			"payment" => VoucherKind::Payment,
			"journal" => VoucherKind::Journal,
			"contra" => VoucherKind::Contra,
			_ => VoucherKind::Other,
		}
	}
}

/// Voucher numbers arrive as JSON numbers from newer endpoints and as
/// strings from older ones. They are identifiers, not quantities, so
/// both become strings here.
fn deserialize_number_as_string<'de, D>(
	deserializer: D,
) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	match value {
		serde_json::Value::Number(num) => Ok(num.to_string()),
		serde_json::Value::String(s) => Ok(s),
		serde_json::Value::Null => Ok(String::new()),
		_ => Err(serde::de::Error::custom("expected number or string")),
	}
}
