//! # The recipe database
//!
//! Holds every recipe and category the user has authored. The native format is a pair
//! of JSON arrays (recipes and categories) which import converts into this in-memory
//! form; a bincode snapshot on disk avoids re-importing on every start.
//!
//! Recipes are stored keyed by their stable id. Ingredient references are by *name*
//! and are resolved against current names at lookup time, so names act as a second
//! unique key among recipes.

pub mod recipe;
pub use recipe::Recipe;
pub use recipe::Ingredient;

pub mod category;
pub use category::Category;
pub use category::DEFAULT_CATEGORY_ID;

mod import;

pub mod iterator;

use std::collections::HashMap;

use serde::{Serialize, Deserialize};

use iterator::NameMatchesExt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDb {
	recipes: HashMap<String, Recipe>,
	categories: HashMap<String, Category>,
}

impl Default for RecipeDb {
	fn default() -> Self {
		let mut categories = HashMap::<String, Category>::new();
		categories.insert(DEFAULT_CATEGORY_ID.to_string(), Category::default_category());
		Self { recipes: Default::default(), categories }
	}
}

impl RecipeDb {
	pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
		self.recipes.values()
	}

	pub fn recipe_count(&self) -> usize {
		self.recipes.len()
	}

	pub fn get_recipe(&self, id: &str) -> Option<&Recipe> {
		self.recipes.get(id)
	}

	/// Looks a recipe up by its *current* name, the key ingredient references use.
	pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
		self.recipes.values().name_matches(name).next()
	}

	/// Adds a new recipe.
	///
	/// Both the id and the name must be unused. The recipe's category must resolve.
	pub fn add_recipe(&mut self, recipe: Recipe) -> crate::Result<()> {
		if self.recipes.contains_key(&recipe.id) || self.find_by_name(&recipe.name).is_some() {
			return Err(crate::Error::AlreadyExists);
		}
		recipe.validate().map_err(crate::Error::Validation)?;
		if !self.categories.contains_key(&recipe.category_id) {
			return Err(crate::Error::Validation(format!("recipe \"{}\" references unknown category \"{}\"", recipe.name, recipe.category_id)));
		}
		log::trace!("Adding recipe \"{}\" to database", recipe.name);
		self.recipes.insert(recipe.id.clone(), recipe);
		Ok(())
	}

	/// Replaces the stored recipe with the same id.
	///
	/// The name may change but must not collide with another recipe's name.
	pub fn update_recipe(&mut self, recipe: Recipe) -> crate::Result<()> {
		if !self.recipes.contains_key(&recipe.id) {
			return Err(crate::Error::Validation(format!("no recipe with id \"{}\"", recipe.id)));
		}
		if let Some(other) = self.find_by_name(&recipe.name) {
			if other.id != recipe.id {
				return Err(crate::Error::AlreadyExists);
			}
		}
		recipe.validate().map_err(crate::Error::Validation)?;
		if !self.categories.contains_key(&recipe.category_id) {
			return Err(crate::Error::Validation(format!("recipe \"{}\" references unknown category \"{}\"", recipe.name, recipe.category_id)));
		}
		log::trace!("Updating recipe \"{}\"", recipe.name);
		self.recipes.insert(recipe.id.clone(), recipe);
		Ok(())
	}

	pub fn remove_recipe(&mut self, id: &str) -> Option<Recipe> {
		log::trace!("Removing recipe with id \"{}\"", id);
		self.recipes.remove(id)
	}

	/* Persistence */

	pub fn save_to_disk(&self, config: &crate::CraftPlanOptions) -> crate::Result<()> {
		let data = bincode::serialize(self)?;
		std::fs::write(Self::snapshot_path(config), data)?;
		Ok(())
	}

	pub fn load_from_disk(config: &crate::CraftPlanOptions) -> crate::Result<Self> {
		let data = std::fs::read(Self::snapshot_path(config))?;
		let db = bincode::deserialize::<Self>(&data).map_err(|_| crate::Error::Parse("recipe database snapshot unreadable".to_string()))?;
		Ok(db)
	}

	fn snapshot_path(config: &crate::CraftPlanOptions) -> std::path::PathBuf {
		config.data_dir().join("recipedb.bin")
	}
}
