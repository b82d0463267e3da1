//! Various helper functions for testing

/// Gets a RecipeDb for use in testing
/// # Parameters
/// - `serialized_path` - When present the db is read from the snapshot at the path,
///   if not the bundled sample collections are imported
pub fn get_recipedb(serialized_path: Option<std::path::PathBuf>) -> craftplan::RecipeDb {
	use craftplan::RecipeDb;

	if let Some(path) = serialized_path {
		let data = std::fs::read(path).expect("failed to open recipedb snapshot");
		bincode::deserialize::<RecipeDb>(&data).expect("failed to deserialize db")
	} else {
		let recipes: serde_json::Value = serde_json::from_str(include_str!("../test-data/recipes.json")).expect("sample recipes aren't valid json");
		let categories: serde_json::Value = serde_json::from_str(include_str!("../test-data/categories.json")).expect("sample categories aren't valid json");
		RecipeDb::generate_from_json(&recipes, Some(&categories), true).expect("failed to create db")
	}
}

/// A config rooted in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the options are in use, dropping
/// it deletes the directory.
pub fn temp_options() -> (tempfile::TempDir, craftplan::CraftPlanOptions) {
	let dir = tempfile::tempdir().expect("failed to create temp dir");
	let mut options = craftplan::CraftPlanOptions::default();
	assert!(options.set_data_dir(dir.path().to_path_buf()), "temp dir should be a valid data dir");
	(dir, options)
}
