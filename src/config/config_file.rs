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
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use serde::Deserialize;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub api: Option<Api>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Api {
	/// Root of the reporting backend, e.g. "https://books.example.com/api".
	pub base_url: Option<String>,

	pub api_key: Option<String>,
	pub api_key_cmd: Option<String>,
}

impl Config {
	/// Fetches the config from the given path, or the default path if
	/// none. The boolean argument indicates whether it is necessary to
	/// resolve authentication, i.e. for commands that talk to the API.
	pub fn load(
		custom_config_path: Option<&String>,
		expand_auth: bool,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => {
				let home_dir = home_dir().unwrap_or_else(|| {
					panic!("Unable to determine home directory")
				});
				home_dir.join(".config/munim/config.toml")
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(config_path)?;
		let mut config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		// Execute api_key_cmd if applicable, and put result in api_key
		if !expand_auth {
			return Ok(config);
		}

		if let Some(api) = &mut config.api {
			if api.api_key_cmd.is_some() && api.api_key.is_some() {
				bail!("Only one of api.api_key and api.api_key_cmd may be specified")
			}

			if let Some(api_key_cmd) = &api.api_key_cmd {
				let output = Command::new("sh")
					.arg("-c")
					.arg(api_key_cmd)
					.output()
					.map_err(|e| {
						anyhow!("failed to execute api_key_cmd: {}", e)
					})?;

				if output.status.success() {
					api.api_key = Some(
						String::from_utf8(output.stdout)
							.map_err(|e| {
								anyhow!("failed to parse command output: {}", e)
							})?
							.trim()
							.to_string(),
					);
				} else {
					bail!(
						"api_key_cmd failed with status {}: {}",
						output.status,
						String::from_utf8_lossy(&output.stderr)
					);
				}
			}
		}

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn config_file(content: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(content.as_bytes()).unwrap();
		file
	}

	#[test]
	fn test_load_plain_key() {
		let file = config_file(
			"[api]\nbase_url = \"http://localhost:9100/api\"\napi_key = \"abc\"\n",
		);
		let path = file.path().to_string_lossy().to_string();

		let config = Config::load(Some(&path), true).unwrap();
		let api = config.api.unwrap();
		assert_eq!(
			api.base_url.as_deref(),
			Some("http://localhost:9100/api")
		);
		assert_eq!(api.api_key.as_deref(), Some("abc"));
	}

	#[test]
	fn test_empty_config_is_valid() {
		let file = config_file("");
		let path = file.path().to_string_lossy().to_string();

		let config = Config::load(Some(&path), true).unwrap();
		assert!(config.api.is_none());
	}

	#[test]
	fn test_key_and_key_cmd_are_exclusive() {
		let file = config_file(
			"[api]\napi_key = \"abc\"\napi_key_cmd = \"echo abc\"\n",
		);
		let path = file.path().to_string_lossy().to_string();

		assert!(Config::load(Some(&path), true).is_err());
		// but tolerated when auth is not being resolved
		assert!(Config::load(Some(&path), false).is_ok());
	}

	#[test]
	fn test_key_cmd_expansion() {
		let file =
			config_file("[api]\napi_key_cmd = \"echo  top-secret \"\n");
		let path = file.path().to_string_lossy().to_string();

		let config = Config::load(Some(&path), true).unwrap();
		assert_eq!(
			config.api.unwrap().api_key.as_deref(),
			Some("top-secret")
		);
	}

	#[test]
	fn test_missing_custom_path_fails() {
		let path = "/no/such/munim-config.toml".to_string();
		assert!(Config::load(Some(&path), false).is_err());
	}
}
