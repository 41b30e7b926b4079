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
use std::cmp::Ordering;
use std::fmt;

const MONTH_ABBR: [&str; 12] = [
	"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
	"Nov", "Dec",
];

/// Default is the zero date. Feeds that have no date column (the trial
/// balance, for one) deserialize into it; it sorts before everything.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

impl Date {
	/// Constructor to parse a string in the "YYYY-mm-dd" format. The
	/// backend sometimes hands back full timestamps ("2025-02-04T00:00:00"
	/// or with a space); anything after the day is cut off and ignored.
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let day_part = date_str
			.split(['T', ' '])
			.next()
			.unwrap_or(date_str);

		let parts: Vec<&str> = day_part.split('-').collect();
		if parts.len() != 3 {
			bail!("Date format must be YYYY-MM-DD");
		}

		let year = parts[0].parse::<u32>()?;
		let month = parts[1].parse::<u8>()?;
		let day = parts[2].parse::<u8>()?;

		// Validate the date
		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date");
		}

		Ok(Date { year, month, day })
	}

	/// Machine form, "YYYY-MM-DD". Query parameters and file names use
	/// this; everything a person reads goes through Display instead.
	pub fn iso(&self) -> String {
		format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}

	pub fn is_zero(&self) -> bool {
		*self == Date::default()
	}

	fn month_abbr(month: u8) -> &'static str {
		if (1..=12).contains(&month) {
			MONTH_ABBR[(month - 1) as usize]
		} else {
			"---"
		}
	}

	fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: u32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Date::is_leap_year(year) {
					29
				} else {
					28
				}
			},
			_ => 0, // Invalid month
		}
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		if !(1..=12).contains(&month) {
			return false;
		}
		if day < 1 || day > Date::days_in_month(year, month) {
			return false;
		}
		true
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	/// Human form, "04 Feb 2025". Day-book groups key on this string, so
	/// it must be stable for equal dates.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{:02} {} {:04}",
			self.day,
			Date::month_abbr(self.month),
			self.year
		)
	}
}

impl<'de> Deserialize<'de> for Date {
	/// Accepts a date string or null. Null and empty map to the zero
	/// date rather than failing the whole page fetch.
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = serde_json::Value::deserialize(deserializer)?;
		match value {
			serde_json::Value::String(s) => {
				if s.trim().is_empty() {
					Ok(Date::default())
				} else {
					Date::from_str(&s).map_err(serde::de::Error::custom)
				}
			},
			serde_json::Value::Null => Ok(Date::default()),
			_ => Err(serde::de::Error::custom("expected a date string")),
		}
	}
}
