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
use crate::api::backend::Backend;
use crate::book::aggregate::non_zero_rows;
use crate::book::category::Category;
use crate::book::entry::LedgerEntry;
use crate::book::filter::EntryFilter;
use crate::config::config_file::Config;
use crate::export::print::{DocumentSink, FileSink};
use crate::menu::recent::RecentSearches;
use crate::reports::balance_sheet_reporter::BalanceSheetReporter;
use crate::reports::commission_reporter::CommissionReporter;
use crate::reports::day_book_reporter::DayBookReporter;
use crate::reports::table::Table;
use crate::reports::trial_balance_reporter::TrialBalanceReporter;
use crate::store::key_value::FileStore;
use crate::util::date::Date;
use anyhow::{bail, Error};
use chrono::Local;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod api;
mod book;
mod config;
mod export;
mod menu;
mod reports;
mod store;
mod util;

#[derive(Parser)]
#[command(
	name = "munim",
	version = "0.4.2",
	about = "Terminal dashboard for transport accounting books"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The page to show
	command: Page,

	/// The search term for the Menu page
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Day to fetch for the day book (YYYY-MM-DD, default today)
	#[arg(short, long)]
	date: Option<String>,

	/// Start of the commission range (YYYY-MM-DD)
	#[arg(long)]
	from: Option<String>,

	/// End of the commission range (YYYY-MM-DD)
	#[arg(long)]
	to: Option<String>,

	/// Keep only rows whose ledger, particulars or voucher number
	/// contain this text
	#[arg(short, long)]
	search: Option<String>,

	/// Keep only rows with exactly this voucher type ("all" disables)
	#[arg(short = 't', long)]
	voucher_type: Option<String>,

	/// Keep only rows of exactly this ledger ("all" disables)
	#[arg(short, long)]
	ledger: Option<String>,

	/// Keep only rows in this ledger category
	#[arg(short, long)]
	category: Option<CategoryArg>,

	/// Write the page to a CSV file instead of showing it
	#[arg(short = 'x', long)]
	export: bool,

	/// Write the page to a printable HTML document instead of showing it
	#[arg(short, long)]
	print: bool,

	/// Forget all recent menu searches
	#[arg(long)]
	clear: bool,

	/// Custom config file location (default: ~/.config/munim/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Custom state file location (default: ~/.config/munim/state.json)
	#[arg(long)]
	state: Option<String>,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		let entry_page =
			matches!(self.command, Page::Db | Page::Tb | Page::Cl);

		if self.term.is_some() && self.command != Page::Menu {
			bail!("A search term only applies to the menu page");
		}

		if (self.export || self.print) && !entry_page {
			bail!("Only the voucher pages (db, tb, cl) can be exported or printed");
		}

		if !entry_page
			&& (self.search.is_some()
				|| self.voucher_type.is_some()
				|| self.ledger.is_some()
				|| self.category.is_some())
		{
			bail!("Row filters only apply to the voucher pages (db, tb, cl)");
		}

		if self.date.is_some() && self.command != Page::Db {
			bail!("--date only applies to the day book page");
		}

		if (self.from.is_some() || self.to.is_some())
			&& self.command != Page::Cl
		{
			bail!("--from/--to only apply to the commission ledger page");
		}

		if self.clear && self.command != Page::Menu {
			bail!("--clear only applies to the menu page");
		}

		Ok(())
	}

	/// The row filter assembled from the flags. Unset flags pass
	/// everything.
	fn filter(&self) -> EntryFilter {
		EntryFilter {
			search: self.search.clone(),
			voucher_type: self.voucher_type.clone(),
			ledger: self.ledger.clone(),
			category: self
				.category
				.as_ref()
				.and_then(CategoryArg::to_category),
		}
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Page {
	Bs, // balance sheet
	Db, // day book
	Tb, // trial balance
	Cl, // commission ledger

	Menu, // search the navigation menu
}

#[derive(ValueEnum, Clone, PartialEq)]
enum CategoryArg {
	All,
	Party,
	Truck,
	Asset,
	Income,
	Other,
}

impl CategoryArg {
	fn to_category(&self) -> Option<Category> {
		match self {
			CategoryArg::All => None,
			CategoryArg::Party => Some(Category::Party),
			CategoryArg::Truck => Some(Category::Truck),
			CategoryArg::Asset => Some(Category::Asset),
			CategoryArg::Income => Some(Category::Income),
			CategoryArg::Other => Some(Category::Other),
		}
	}
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;

	match args.command {
		Page::Bs => balance_sheet_page(&args),
		Page::Db => day_book_page(&args),
		Page::Tb => trial_balance_page(&args),
		Page::Cl => commission_page(&args),
		Page::Menu => menu_page(&args),
	}
}

/// Only the report pages inspect config in any way, so we don't bother
/// to check for it or parse it until one of them runs.
fn connect(args: &Cli) -> Result<Backend, Error> {
	let config = Config::load(args.config.as_ref(), true)?;
	Backend::from_config(&config)
}

fn balance_sheet_page(args: &Cli) -> Result<(), Error> {
	let backend = connect(args)?;
	let sheet = backend.balance_sheet()?;
	BalanceSheetReporter::new(sheet).print();
	Ok(())
}

fn day_book_page(args: &Cli) -> Result<(), Error> {
	let backend = connect(args)?;

	let date = match &args.date {
		Some(d) => Date::from_str(d)?,
		None => today(),
	};

	let entries = args.filter().apply(&backend.day_book(&date)?);

	let stem = format!("day-book-{}", date.iso());
	if !deliver(args, "Day Book", &stem, &entries)? {
		DayBookReporter::new(entries).print();
	}
	Ok(())
}

fn trial_balance_page(args: &Cli) -> Result<(), Error> {
	let backend = connect(args)?;
	let entries = args.filter().apply(&backend.trial_balance()?);

	// exports carry the raw voucher rows; the per-ledger collapse is
	// for the terminal view only
	let stem = format!("trial-balance-{}", today().iso());
	if !deliver(args, "Trial Balance", &stem, &non_zero_rows(&entries))? {
		TrialBalanceReporter::new(entries).print();
	}
	Ok(())
}

fn commission_page(args: &Cli) -> Result<(), Error> {
	let backend = connect(args)?;

	let from = args.from.as_ref().map(|d| Date::from_str(d)).transpose()?;
	let to = args.to.as_ref().map(|d| Date::from_str(d)).transpose()?;

	let entries = args
		.filter()
		.apply(&backend.commission_ledger(from.as_ref(), to.as_ref())?);

	let stem = format!("commission-ledger-{}", today().iso());
	if !deliver(args, "Commission Ledger", &stem, &entries)? {
		CommissionReporter::new(entries).print();
	}
	Ok(())
}

/// Runs the export and print actions if asked for. Either one replaces
/// the terminal body, so the caller skips its reporter when this
/// returns true.
fn deliver(
	args: &Cli,
	title: &str,
	stem: &str,
	entries: &[LedgerEntry],
) -> Result<bool, Error> {
	let mut acted = false;

	if args.export {
		let path = PathBuf::from(format!("{}.csv", stem));
		export::spreadsheet::write_csv(&path, title, entries)?;
		println!("Exported to {}", path.display());
		acted = true;
	}

	if args.print {
		let html = export::print::render_document(title, entries)?;
		let path = FileSink::new().present(&html)?;
		println!("Printable document at {}", path.display());
		acted = true;
	}

	Ok(acted)
}

fn menu_page(args: &Cli) -> Result<(), Error> {
	let mut store = match &args.state {
		Some(path) => FileStore::at(PathBuf::from(path)),
		None => FileStore::at_default(),
	};
	let mut recents = RecentSearches::load(&mut store);

	if args.clear {
		recents.clear()?;
		println!("Search history cleared");
		return Ok(());
	}

	match &args.term {
		Some(term) => {
			recents.record(term)?;

			let hits = menu::index::search(term);
			if hits.is_empty() {
				println!("No menu entries match '{}'", term);
				return Ok(());
			}

			let mut table = Table::new(3);
			table.add_header(vec!["Entry", "Route", "Icon"]);
			table.add_separator();
			for item in hits {
				table.add_row(vec![item.label, item.route, item.icon]);
			}
			table.print();
		},
		None => {
			let recent = recents.all();
			if recent.is_empty() {
				println!("No recent searches");
			} else {
				println!("Recent searches:");
				for (i, query) in recent.iter().enumerate() {
					println!("{}. {}", i + 1, query);
				}
			}
		},
	}

	Ok(())
}

fn today() -> Date {
	Date::from_str(&Local::now().date_naive().to_string()).unwrap()
}
