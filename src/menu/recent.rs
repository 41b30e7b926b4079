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
use crate::store::key_value::KeyValue;
use anyhow::Error;

/// Store key the search history lives under, as a JSON array of strings.
pub const RECENT_KEY: &str = "recent_searches";

/// At most this many queries are remembered.
pub const RECENT_CAP: usize = 5;

/// The menu's short search history. All ordering and capping happens
/// here; the store only ever sees the finished payload.
pub struct RecentSearches<'a> {
	store: &'a mut dyn KeyValue,
	entries: Vec<String>,
}

impl<'a> RecentSearches<'a> {
	/// Loads whatever the store holds. Missing or unparsable payloads
	/// start the history fresh; they are never an error.
	pub fn load(store: &'a mut dyn KeyValue) -> RecentSearches<'a> {
		let entries = store
			.get(RECENT_KEY)
			.and_then(|raw| {
				serde_json::from_str::<Vec<String>>(&raw).ok()
			})
			.unwrap_or_default();
		RecentSearches { store, entries }
	}

	/// Most recent first.
	pub fn all(&self) -> &[String] {
		&self.entries
	}

	/// Remembers a query: newest first, an exact repeat moves up instead
	/// of duplicating, and the list stays within RECENT_CAP. Blank
	/// queries are not history.
	pub fn record(&mut self, query: &str) -> Result<(), Error> {
		let query = query.trim();
		if query.is_empty() {
			return Ok(());
		}

		self.entries.retain(|past| past != query);
		self.entries.insert(0, query.to_string());
		self.entries.truncate(RECENT_CAP);

		self.store
			.set(RECENT_KEY, &serde_json::to_string(&self.entries)?)
	}

	/// Empties both the in-memory list and the stored payload.
	pub fn clear(&mut self) -> Result<(), Error> {
		self.entries.clear();
		self.store.remove(RECENT_KEY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::key_value::MemoryStore;

	#[test]
	fn test_record_is_most_recent_first() {
		let mut store = MemoryStore::default();
		let mut recents = RecentSearches::load(&mut store);

		recents.record("bank").unwrap();
		recents.record("trial").unwrap();
		recents.record("party").unwrap();

		assert_eq!(recents.all(), ["party", "trial", "bank"]);
	}

	#[test]
	fn test_repeat_moves_up_without_duplicating() {
		let mut store = MemoryStore::default();
		let mut recents = RecentSearches::load(&mut store);

		recents.record("bank").unwrap();
		recents.record("trial").unwrap();
		recents.record("bank").unwrap();

		assert_eq!(recents.all(), ["bank", "trial"]);
	}

	#[test]
	fn test_cap_is_enforced() {
		let mut store = MemoryStore::default();
		let mut recents = RecentSearches::load(&mut store);

		for query in ["a", "b", "c", "d", "e", "f", "g"] {
			recents.record(query).unwrap();
		}

		assert_eq!(recents.all().len(), RECENT_CAP);
		assert_eq!(recents.all(), ["g", "f", "e", "d", "c"]);
	}

	#[test]
	fn test_blank_queries_are_not_history() {
		let mut store = MemoryStore::default();
		let mut recents = RecentSearches::load(&mut store);

		recents.record("").unwrap();
		recents.record("   ").unwrap();

		assert!(recents.all().is_empty());
		assert_eq!(store.get(RECENT_KEY), None);
	}

	#[test]
	fn test_history_survives_reload() {
		let mut store = MemoryStore::default();

		let mut recents = RecentSearches::load(&mut store);
		recents.record("bank").unwrap();
		recents.record("day book").unwrap();

		let recents = RecentSearches::load(&mut store);
		assert_eq!(recents.all(), ["day book", "bank"]);
	}

	#[test]
	fn test_mangled_payload_starts_fresh() {
		let mut store = MemoryStore::default();
		store.set(RECENT_KEY, "{not an array").unwrap();

		let recents = RecentSearches::load(&mut store);
		assert!(recents.all().is_empty());
	}

	#[test]
	fn test_clear_empties_memory_and_store() {
		let mut store = MemoryStore::default();

		let mut recents = RecentSearches::load(&mut store);
		recents.record("bank").unwrap();
		recents.clear().unwrap();
		assert!(recents.all().is_empty());

		assert_eq!(store.get(RECENT_KEY), None);
	}
}
