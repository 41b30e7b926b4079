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
use crate::book::entry::LedgerEntry;
use anyhow::{bail, Error};
use chrono::Local;
use csv::WriterBuilder;
use std::path::Path;

/// Column order is fixed; the accountants' spreadsheet macros key on
/// these positions.
pub const COLUMNS: [&str; 7] = [
	"Date",
	"Voucher Type",
	"Voucher No",
	"Ledger",
	"Particulars",
	"Debit",
	"Credit",
];

/// Writes the filtered view to a CSV file: a short header block naming
/// the report, then the fixed columns, then the rows. Amounts go out in
/// plain form so spreadsheets read them as numbers. An empty view is
/// refused before the file is touched.
pub fn write_csv(
	path: &Path,
	title: &str,
	entries: &[LedgerEntry],
) -> Result<(), Error> {
	if entries.is_empty() {
		bail!("nothing to export; the filtered view is empty")
	}

	let totals = Totals::of(entries);

	// the header block rows are shorter than the data rows
	let mut writer =
		WriterBuilder::new().flexible(true).from_path(path)?;

	writer.write_record([title])?;
	writer.write_record([format!(
		"Generated on {}",
		Local::now().format("%d %b %Y %H:%M")
	)])?;
	writer.write_record([
		format!("Total Debit {}", totals.total_debit.plain()),
		format!("Total Credit {}", totals.total_credit.plain()),
	])?;
	writer.write_record([""])?;
	writer.write_record(COLUMNS)?;

	for entry in entries {
		writer.write_record([
			entry.date.to_string(),
			entry.voucher_type.clone(),
			entry.voucher_no.clone(),
			entry.ledger.clone(),
			entry.particulars.clone(),
			entry.debit.plain(),
			entry.credit.plain(),
		])?;
	}

	writer.flush()?;
	Ok(())
}
