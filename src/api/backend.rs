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
use crate::api::client::Client;
use crate::api::models::{CommissionParams, DayBookParams, Envelope};
use crate::book::balance_sheet::BalanceSheetSnapshot;
use crate::book::entry::LedgerEntry;
use crate::config::config_file::Config;
use crate::util::date::Date;
use anyhow::{bail, Error};

/// The reporting endpoints, one method per dashboard page. Each call is
/// a single blocking GET; a failed fetch fails the command and the user
/// simply runs it again.
pub struct Backend {
	http: Client,
}

impl Backend {
	pub fn from_config(config: &Config) -> Result<Backend, Error> {
		let api = match &config.api {
			Some(api) => api,
			None => bail!(
				"config has no [api] section; set api.base_url to your reporting backend"
			),
		};

		let base_url = match &api.base_url {
			Some(url) => url,
			None => bail!("api.base_url is not set in the config"),
		};

		Ok(Backend {
			http: Client::new(base_url, api.api_key.clone()),
		})
	}

	pub fn balance_sheet(&self) -> Result<BalanceSheetSnapshot, Error> {
		let envelope: Envelope<BalanceSheetSnapshot> = self
			.http
			.get("accounting/balance-sheet", None::<()>)?;
		envelope.into_data()
	}

	pub fn day_book(&self, date: &Date) -> Result<Vec<LedgerEntry>, Error> {
		let envelope: Envelope<Vec<LedgerEntry>> = self.http.get(
			"accounting/day-book",
			Some(DayBookParams { date: date.iso() }),
		)?;
		envelope.into_data()
	}

	/// The trial-balance feed is entry-shaped; collapsing it to one row
	/// per ledger happens client side.
	pub fn trial_balance(&self) -> Result<Vec<LedgerEntry>, Error> {
		let envelope: Envelope<Vec<LedgerEntry>> = self
			.http
			.get("accounting/trial-balance", None::<()>)?;
		envelope.into_data()
	}

	pub fn commission_ledger(
		&self,
		from: Option<&Date>,
		to: Option<&Date>,
	) -> Result<Vec<LedgerEntry>, Error> {
		let envelope: Envelope<Vec<LedgerEntry>> = self.http.get(
			"commission/commission-ledger",
			Some(CommissionParams {
				from_date: from.map(Date::iso).unwrap_or_default(),
				to_date: to.map(Date::iso).unwrap_or_default(),
			}),
		)?;
		envelope.into_data()
	}
}
