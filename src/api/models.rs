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
use serde::{Deserialize, Serialize};

/// Every reporting endpoint wraps its payload the same way, but the
/// payload field goes by different names depending on the endpoint's
/// age: "data" on recent ones, "ledger" or "rows" on older ones. A
/// missing success flag counts as failure, matching how the dashboard
/// treated it.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
	#[serde(default)]
	pub success: bool,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default, alias = "ledger", alias = "rows")]
	pub data: Option<T>,
}

impl<T> Envelope<T> {
	/// Unwraps the payload, surfacing the backend's own message when it
	/// reports failure.
	pub fn into_data(self) -> Result<T, Error> {
		if !self.success {
			bail!(
				"backend reported failure: {}",
				self.message
					.unwrap_or_else(|| "no reason given".to_string())
			)
		}

		match self.data {
			Some(data) => Ok(data),
			None => bail!("backend reported success but sent no data"),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct DayBookParams {
	pub date: String,
}

/// Blank bounds are sent as empty strings; the backend reads those as
/// an unbounded range.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionParams {
	pub from_date: String,
	pub to_date: String,
}
