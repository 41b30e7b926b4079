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
use anyhow::Error;
use dirs::home_dir;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// The small persistence surface the dashboard needs. Absent keys read
/// as None; set and remove can fail for filesystem reasons.
pub trait KeyValue {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
	fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// Production store: one JSON object in a file under the user's config
/// directory. Everything in it is reconstructible convenience state, so
/// an unreadable or mangled file reads as empty instead of failing.
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn at(path: PathBuf) -> FileStore {
		FileStore { path }
	}

	pub fn at_default() -> FileStore {
		let home_dir = home_dir().unwrap_or_else(|| {
			panic!("Unable to determine home directory")
		});
		FileStore {
			path: home_dir.join(".config/munim/state.json"),
		}
	}

	fn read_map(&self) -> BTreeMap<String, String> {
		let content = match fs::read_to_string(&self.path) {
			Ok(c) => c,
			Err(_) => return BTreeMap::new(),
		};
		serde_json::from_str(&content).unwrap_or_default()
	}

	fn write_map(
		&self,
		map: &BTreeMap<String, String>,
	) -> Result<(), Error> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
		Ok(())
	}
}

impl KeyValue for FileStore {
	fn get(&self, key: &str) -> Option<String> {
		self.read_map().get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
		let mut map = self.read_map();
		map.insert(key.to_string(), value.to_string());
		self.write_map(&map)
	}

	fn remove(&mut self, key: &str) -> Result<(), Error> {
		let mut map = self.read_map();
		if map.remove(key).is_none() {
			return Ok(());
		}
		self.write_map(&map)
	}
}

/// Test double. Keeps the same semantics without touching disk.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
	map: BTreeMap<String, String>,
}

#[cfg(test)]
impl KeyValue for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.map.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
		self.map.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<(), Error> {
		self.map.remove(key);
		Ok(())
	}
}
