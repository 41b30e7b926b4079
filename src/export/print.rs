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
use crate::book::category::Category;
use crate::book::entry::{LedgerEntry, VoucherKind};
use anyhow::{bail, Error};
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Where a finished printable document goes. The dashboard opened a
/// browser print window; here the production sink writes a file and
/// reports its path for the user to open.
pub trait DocumentSink {
	fn present(&self, html: &str) -> Result<PathBuf, Error>;
}

pub struct FileSink {
	dir: PathBuf,
}

impl FileSink {
	pub fn new() -> FileSink {
		FileSink {
			dir: std::env::temp_dir(),
		}
	}
}

impl DocumentSink for FileSink {
	fn present(&self, html: &str) -> Result<PathBuf, Error> {
		let path = self.dir.join(format!(
			"munim-print-{}.html",
			Local::now().format("%Y%m%d-%H%M%S")
		));
		fs::write(&path, html)?;
		Ok(path)
	}
}

/// Everything the document needs travels inside it, so the file can be
/// mailed around and still print the same.
const STYLE: &str = "
body { font-family: Georgia, serif; margin: 2em; color: #222; }
h1 { font-size: 1.4em; margin-bottom: 0; }
.stamp { color: #777; margin-top: 0.2em; }
table { border-collapse: collapse; width: 100%; margin-top: 1em; }
th, td { border: 1px solid #999; padding: 4px 8px; text-align: left; }
td.amount { text-align: right; font-variant-numeric: tabular-nums; }
tr.totals td { font-weight: bold; border-top: 2px solid #222; }
.cat-party { background: #eef4ff; }
.cat-truck { background: #fff6e5; }
.cat-asset { background: #edfbef; }
.cat-income { background: #fdeffa; }
.cat-other { background: #ffffff; }
.badge { font-size: 0.8em; padding: 1px 6px; border-radius: 8px; color: #fff; }
.badge-booking { background: #2f6fed; }
.badge-receipt { background: #1e9e4a; }
.badge-payment { background: #d9534f; }
.badge-journal { background: #8a6dd1; }
.badge-contra { background: #5bc0de; }
.badge-other { background: #888; }
";

fn category_class(category: Category) -> &'static str {
	match category {
		Category::Party => "cat-party",
		Category::Truck => "cat-truck",
		Category::Asset => "cat-asset",
		Category::Income => "cat-income",
		Category::Other => "cat-other",
	}
}

fn kind_class(kind: VoucherKind) -> &'static str {
	match kind {
		VoucherKind::Booking => "badge-booking",
		VoucherKind::Receipt => "badge-receipt",
		VoucherKind::Payment => "badge-payment",
		VoucherKind::Journal => "badge-journal",
		VoucherKind::Contra => "badge-contra",
		VoucherKind::Other => "badge-other",
	}
}

/// Ledger names and particulars are free text typed by the office.
fn escape(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
}

/// Renders the filtered view as a self-contained printable HTML page:
/// rows tinted by their ledger's category, voucher types shown as
/// badges, totals in the footer. An empty view is refused.
pub fn render_document(
	title: &str,
	entries: &[LedgerEntry],
) -> Result<String, Error> {
	if entries.is_empty() {
		bail!("nothing to print; the filtered view is empty")
	}

	let totals = Totals::of(entries);
	let mut html = String::new();

	// write! into a String cannot fail
	let _ = write!(
		html,
		"<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
		 <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
		 <h1>{title}</h1>\n<p class=\"stamp\">Generated on {stamp}</p>\n\
		 <table>\n<thead>\n<tr><th>Date</th><th>Voucher Type</th>\
		 <th>Voucher No</th><th>Ledger</th><th>Particulars</th>\
		 <th>Debit</th><th>Credit</th></tr>\n</thead>\n<tbody>\n",
		title = escape(title),
		stamp = Local::now().format("%d %b %Y %H:%M"),
	);

	for entry in entries {
		let _ = write!(
			html,
			"<tr class=\"{class}\"><td>{date}</td>\
			 <td><span class=\"badge {badge}\">{kind}</span></td>\
			 <td>{no}</td><td>{ledger}</td><td>{particulars}</td>\
			 <td class=\"amount\">{debit}</td>\
			 <td class=\"amount\">{credit}</td></tr>\n",
			class = category_class(entry.category()),
			date = entry.date,
			badge = kind_class(entry.kind()),
			kind = escape(&entry.voucher_type),
			no = escape(&entry.voucher_no),
			ledger = escape(&entry.ledger),
			particulars = escape(&entry.particulars),
			debit = entry.debit,
			credit = entry.credit,
		);
	}

	let _ = write!(
		html,
		"</tbody>\n<tfoot>\n<tr class=\"totals\"><td colspan=\"5\">Total</td>\
		 <td class=\"amount\">{debit}</td>\
		 <td class=\"amount\">{credit}</td></tr>\n</tfoot>\n</table>\n\
		 </body>\n</html>\n",
		debit = totals.total_debit,
		credit = totals.total_credit,
	);

	Ok(html)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::util::date::Date;
	use crate::util::money::Money;
	use tempfile::TempDir;

	fn entry(
		voucher_type: &str,
		ledger: &str,
		particulars: &str,
		debit: i64,
		credit: i64,
	) -> LedgerEntry {
		LedgerEntry {
			date: Date::from_str("2025-02-04").unwrap(),
			voucher_type: voucher_type.to_string(),
			voucher_no: "112".to_string(),
			ledger: ledger.to_string(),
			particulars: particulars.to_string(),
			debit: Money::from_rupees(debit),
			credit: Money::from_rupees(credit),
		}
	}

	#[test]
	fn test_document_is_self_contained() {
		let html = render_document(
			"Day Book",
			&[entry("Booking", "Party: A", "trip", 500, 0)],
		)
		.unwrap();

		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains("<style>"));
		assert!(html.contains("<h1>Day Book</h1>"));
		assert!(html.ends_with("</html>\n"));
	}

	#[test]
	fn test_rows_are_tinted_by_category() {
		let html = render_document(
			"Day Book",
			&[
				entry("Booking", "Party: A", "trip", 500, 0),
				entry("Payment", "Truck HR55", "advance", 0, 500),
			],
		)
		.unwrap();

		assert!(html.contains("<tr class=\"cat-party\">"));
		assert!(html.contains("<tr class=\"cat-truck\">"));
		assert!(html.contains("badge badge-booking"));
		assert!(html.contains("badge badge-payment"));
	}

	#[test]
	fn test_free_text_is_escaped() {
		let html = render_document(
			"Day Book",
			&[entry(
				"Booking",
				"Party: Sharma & Sons",
				"load <20t>",
				500,
				0,
			)],
		)
		.unwrap();

		assert!(html.contains("Party: Sharma &amp; Sons"));
		assert!(html.contains("load &lt;20t&gt;"));
		assert!(!html.contains("load <20t>"));
	}

	#[test]
	fn test_totals_land_in_footer() {
		let html = render_document(
			"Day Book",
			&[
				entry("Booking", "Party: A", "trip", 4500, 0),
				entry("Receipt", "Cash", "part", 0, 1500),
			],
		)
		.unwrap();

		assert!(html.contains("<td class=\"amount\">4,500.00</td>"));
		let footer = html.split("<tfoot>").nth(1).unwrap();
		assert!(footer.contains("4,500.00"));
		assert!(footer.contains("1,500.00"));
	}

	#[test]
	fn test_empty_view_is_refused() {
		assert!(render_document("Day Book", &[]).is_err());
	}

	#[test]
	fn test_file_sink_reports_where_it_wrote() {
		let dir = TempDir::new().unwrap();
		let sink = FileSink {
			dir: dir.path().to_path_buf(),
		};

		let path = sink.present("<html></html>").unwrap();
		assert!(path.exists());
		assert_eq!(
			std::fs::read_to_string(&path).unwrap(),
			"<html></html>"
		);
	}
}
