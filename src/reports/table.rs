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

/// Spacing between data columns, and the separator drawn between header
/// cells.
const GUTTER: &str = "   ";
const HEADER_GUTTER: &str = " | ";

/// Standard table printer for the page bodies: every report is rows of
/// single-line cells. Rows are rendered to a string, so the exact
/// layout is testable; print() is the only thing that touches stdout.
///
/// Amount cells are expected pre-formatted and bare (no currency sign),
/// since column widths are computed bytewise.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
	PartialSeparator(Vec<bool>), // indicates columns by index
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Adds a header row.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	/// Adds a data row.
	pub fn add_row(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Data(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	/// Adds a full separator row.
	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Adds a partial separator row for selected columns.
	pub fn add_partial_separator(&mut self, indices: Vec<usize>) {
		let mut cols = vec![false; self.column_count];
		for i in indices {
			cols[i] = true;
		}
		self.rows.push(Row::PartialSeparator(cols));
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	pub fn print(&self) {
		print!("{}", self.render());
	}

	/// The table as it will appear, leading blank line included.
	pub fn render(&self) -> String {
		let widths = self.widths();

		let mut out = String::from("\n");
		for row in &self.rows {
			let line = match row {
				Row::Header(cells) => self.header_line(&widths, cells),
				Row::Data(cells) => self.data_line(&widths, cells),
				Row::Separator => Table::rule_line(&widths),
				Row::PartialSeparator(cols) => {
					Table::partial_rule_line(&widths, cols)
				},
			};
			out.push_str(&line);
			out.push('\n');
		}
		out
	}

	/// Maximum width of each column across headers and data.
	fn widths(&self) -> Vec<usize> {
		let mut widths = vec![0; self.column_count];
		for row in &self.rows {
			if let Row::Data(cells) | Row::Header(cells) = row {
				for (i, value) in cells.iter().enumerate() {
					widths[i] = widths[i].max(value.len());
				}
			}
		}
		widths
	}

	fn data_line(&self, widths: &[usize], cells: &[String]) -> String {
		let mut line = String::new();
		for (i, value) in cells.iter().enumerate() {
			if self.right_align[i] {
				line.push_str(&format!(
					"{:>width$}",
					value,
					width = widths[i]
				));
			} else {
				line.push_str(&format!(
					"{:<width$}",
					value,
					width = widths[i]
				));
			}
			if i < cells.len() - 1 {
				line.push_str(GUTTER);
			}
		}
		line
	}

	fn header_line(&self, widths: &[usize], cells: &[String]) -> String {
		let mut line = String::new();
		for (i, value) in cells.iter().enumerate() {
			line.push_str(&Table::center_align(value, widths[i]));
			if i < cells.len() - 1 {
				line.push_str(HEADER_GUTTER);
			}
		}
		line
	}

	fn rule_line(widths: &[usize]) -> String {
		let total_width: usize = widths.iter().sum::<usize>()
			+ GUTTER.len() * (widths.len() - 1);
		"-".repeat(total_width)
	}

	fn partial_rule_line(widths: &[usize], cols: &[bool]) -> String {
		let mut line = String::new();
		for (i, draw) in cols.iter().enumerate() {
			if *draw {
				line.push_str(&"-".repeat(widths[i]));
			} else {
				line.push_str(&" ".repeat(widths[i]));
			}
			if i < cols.len() - 1 {
				line.push_str(GUTTER);
			}
		}
		line
	}

	fn center_align(value: &str, width: usize) -> String {
		if value.len() >= width {
			return value.to_string();
		}
		let total_padding = width - value.len();
		let left_padding = total_padding / 2;
		let right_padding = total_padding - left_padding;

		format!(
			"{}{}{}",
			" ".repeat(left_padding),
			value,
			" ".repeat(right_padding)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_layout() {
		let mut table = Table::new(2);
		table.right_align(vec![1]);
		table.add_header(vec!["Ledger", "Debit"]);
		table.add_separator();
		table.add_row(vec!["Cash", "9.50"]);
		table.add_partial_separator(vec![1]);

		let lines: Vec<&str> = table.render().lines().collect();
		assert_eq!(lines[0], "");
		assert_eq!(lines[1], "Ledger | Debit");
		assert_eq!(lines[2], "--------------");
		assert_eq!(lines[3], "Cash      9.50");
		assert_eq!(lines[4], "         -----");
	}

	#[test]
	fn test_columns_widen_to_data() {
		let mut table = Table::new(2);
		table.add_header(vec!["L", "D"]);
		table.add_row(vec!["Bank of Baroda", "1,23,456.00"]);

		let lines: Vec<&str> = table.render().lines().collect();
		// header cells are centered over the widest value
		assert_eq!(lines[1], "      L        |      D     ");
	}

	#[test]
	fn test_left_and_right_alignment() {
		let mut table = Table::new(2);
		table.right_align(vec![1]);
		table.add_row(vec!["Truck HR55", "500.00"]);
		table.add_row(vec!["Cash", "75.00"]);

		let lines: Vec<&str> = table.render().lines().collect();
		assert_eq!(lines[1], "Truck HR55   500.00");
		assert_eq!(lines[2], "Cash          75.00");
	}
}
