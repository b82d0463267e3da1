use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftPlanOptions {
	data_dir: std::path::PathBuf,
	#[serde(default = "default_validate_imports")]
	validate_imports: bool,
}

fn default_validate_imports() -> bool {
	true
}

impl Default for CraftPlanOptions {
	fn default() -> Self {
		Self {
			data_dir: {
				#[cfg(target_os = "windows")]
				let path = std::path::PathBuf::from(std::env::var("APPDATA").expect("APPDATA missing."));

				#[cfg(not(target_os = "windows"))]
				let path = if let Ok(e) = std::env::var("XDG_DATA_HOME") {
					std::path::PathBuf::from(e)
				} else {
					std::path::PathBuf::from(std::env::var("HOME").expect("HOME environment variable not set.")).join(".local/share")
				};

				let path = path.join("craftplan").join("data");
				std::fs::create_dir_all(&path).expect("failed to create data directory.");
				path
			},
			validate_imports: true,
		}
	}
}

impl CraftPlanOptions {
	pub fn data_dir(&self) -> &std::path::PathBuf {
		&self.data_dir
	}
	/// returns if the directory is valid or not.
	pub fn set_data_dir(&mut self, data_dir: std::path::PathBuf) -> bool {
		if data_dir.is_dir() {
			self.data_dir = data_dir;
			true
		} else {
			false
		}
	}

	pub fn validate_imports(&self) -> bool {
		self.validate_imports
	}
	pub fn set_validate_imports(&mut self, validate_imports: bool) {
		self.validate_imports = validate_imports;
	}

	pub fn load_from_disk() -> crate::Result<Self> {
		let data = std::fs::read(Self::config_file_path())?;
		Ok(serde_json::from_slice::<Self>(&data)?)
	}

	pub fn save_to_disk(&self) -> crate::Result<()> {
		let path = Self::config_file_path();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
		Ok(())
	}

	fn config_file_path() -> std::path::PathBuf {
		#[cfg(target_os = "windows")]
		let path = std::path::PathBuf::from(std::env::var("APPDATA").expect("APPDATA missing."));

		#[cfg(not(target_os = "windows"))]
		let path = if let Ok(e) = std::env::var("XDG_CONFIG_HOME") {
			std::path::PathBuf::from(e)
		} else {
			std::path::PathBuf::from(std::env::var("HOME").expect("HOME environment variable not set.")).join(".config")
		};

		path.join("craftplan").join("config.json")
	}
}
