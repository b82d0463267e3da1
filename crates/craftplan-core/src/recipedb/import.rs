//! Reading recipes and categories from their native JSON format.
//!
//! Import is forgiving per entry: a malformed or invalid entry is skipped with a
//! logged diagnostic instead of failing the whole import.

use super::*;

impl Recipe {
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		let obj = v.as_object().ok_or_else(|| Parse("recipe must be an object".to_string()))?;

		Ok(Recipe {
			id: {
				obj.get("id")
					.ok_or_else(|| Parse("recipe has no id field".to_string()))?
					.as_str().ok_or_else(|| Parse("recipe id must be a string".to_string()))?.to_string()
			},
			name: {
				obj.get("name")
					.ok_or_else(|| Parse("recipe has no name field".to_string()))?
					.as_str().ok_or_else(|| Parse("recipe name must be a string".to_string()))?.to_string()
			},
			output_quantity: {
				obj.get("outputQuantity")
					.ok_or_else(|| Parse("recipe has no outputQuantity field".to_string()))?
					.as_f64().ok_or_else(|| Parse("recipe outputQuantity must be a number".to_string()))?
			},
			ingredients: {
				let mut ingredients = Vec::<Ingredient>::new();
				if let Some(f) = obj.get("ingredients") {
					let arr = f.as_array().ok_or_else(|| Parse("recipe ingredients must be an array".to_string()))?;
					for elem in arr {
						ingredients.push(Ingredient::read_from_json(elem)?);
					}
				}
				ingredients
			},
			category_id: {
				match obj.get("categoryId") {
					Some(f) => f.as_str().ok_or_else(|| Parse("recipe categoryId must be a string".to_string()))?.to_string(),
					None => DEFAULT_CATEGORY_ID.to_string(),
				}
			},
		})
	}
}

impl Ingredient {
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		let obj = v.as_object().ok_or_else(|| Parse("ingredient must be an object".to_string()))?;

		Ok(Ingredient {
			item: {
				obj.get("item")
					.ok_or_else(|| Parse("ingredient has no item field".to_string()))?
					.as_str().ok_or_else(|| Parse("ingredient item must be a string".to_string()))?.to_string()
			},
			quantity: {
				obj.get("quantity")
					.ok_or_else(|| Parse("ingredient has no quantity field".to_string()))?
					.as_f64().ok_or_else(|| Parse("ingredient quantity must be a number".to_string()))?
			},
			is_recipe: {
				obj.get("isRecipe").and_then(|f| f.as_bool()).unwrap_or(false)
			},
		})
	}
}

impl Category {
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		let obj = v.as_object().ok_or_else(|| Parse("category must be an object".to_string()))?;

		Ok(Category {
			id: {
				obj.get("id")
					.ok_or_else(|| Parse("category has no id field".to_string()))?
					.as_str().ok_or_else(|| Parse("category id must be a string".to_string()))?.to_string()
			},
			name: {
				obj.get("name")
					.ok_or_else(|| Parse("category has no name field".to_string()))?
					.as_str().ok_or_else(|| Parse("category name must be a string".to_string()))?.to_string()
			},
			parent_id: {
				match obj.get("parentId") {
					Some(serde_json::Value::Null) | None => None,
					Some(f) => Some(f.as_str().ok_or_else(|| Parse("category parentId must be a string or null".to_string()))?.to_string()),
				}
			},
		})
	}
}

impl RecipeDb {
	/// Builds a database from the native JSON arrays.
	/// # Parameters
	/// - `recipes` - JSON array of recipe objects.
	/// - `categories` - JSON array of category objects, when present. The default
	///   category is created regardless.
	/// - `do_validation` - Additionally check each recipe entry against the bundled
	///   JSON schema before converting it.
	pub fn generate_from_json(recipes: &serde_json::Value, categories: Option<&serde_json::Value>, do_validation: bool) -> crate::Result<Self> {
		use crate::Error::Parse;

		let mut db = RecipeDb::default();

		if let Some(categories) = categories {
			let arr = categories.as_array().ok_or_else(|| Parse("categories must be an array".to_string()))?;
			for (i, elem) in arr.iter().enumerate() {
				let category = match Category::read_from_json(elem) {
					Ok(c) => c,
					Err(e) => {
						log::warn!("Couldn't process category entry {}: {}", i, e);
						continue;
					}
				};
				if category.id == DEFAULT_CATEGORY_ID {
					/* The sentinel entry from the persisted collection, keep its authored name */
					db.rename_category(DEFAULT_CATEGORY_ID, &category.name);
					continue;
				}
				if let Err(e) = db.add_category(category) {
					log::warn!("Couldn't process category entry {}: {}", i, e);
				}
			}
		}

		let compiled_schema = if do_validation {
			Some(
				jsonschema::JSONSchema::compile(&serde_json::from_str(include_str!("recipe-json.schema")).expect("schema isn't valid json")).expect("schema isn't valid")
			)
		} else {
			None
		};

		let arr = recipes.as_array().ok_or_else(|| Parse("recipes must be an array".to_string()))?;
		for (i, elem) in arr.iter().enumerate() {
			if let Some(schema) = &compiled_schema {
				if !schema.is_valid(elem) {
					log::warn!("Couldn't process recipe entry {}, does not match schema", i);
					continue;
				}
			}

			let mut recipe = match Recipe::read_from_json(elem) {
				Ok(r) => r,
				Err(e) => {
					log::warn!("Couldn't process recipe entry {}: {}", i, e);
					continue;
				}
			};

			if !db.categories.contains_key(&recipe.category_id) {
				log::warn!("Recipe \"{}\" references missing category \"{}\", reassigning to default", recipe.name, recipe.category_id);
				recipe.category_id = DEFAULT_CATEGORY_ID.to_string();
			}

			if let Err(e) = db.add_recipe(recipe) {
				log::warn!("Couldn't process recipe entry {}: {}", i, e);
			}
		}

		Ok(db)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recipe_json_schema_compiles() {
		jsonschema::JSONSchema::compile(
			&serde_json::from_str(
				include_str!("recipe-json.schema")
			).expect("schema isn't valid json")
		).expect("schema isn't valid");
	}

	#[test]
	fn recipe_read_from_json_rejects_missing_fields() {
		let v: serde_json::Value = serde_json::json!({ "id": "1", "outputQuantity": 1 });
		assert!(Recipe::read_from_json(&v).is_err());

		let v: serde_json::Value = serde_json::json!({ "id": "1", "name": "Plank", "outputQuantity": "four" });
		assert!(Recipe::read_from_json(&v).is_err());
	}

	#[test]
	fn recipe_read_from_json_defaults() {
		let v = serde_json::json!({ "id": "1", "name": "Plank", "outputQuantity": 4 });
		let recipe = Recipe::read_from_json(&v).unwrap();
		assert!(recipe.ingredients.is_empty());
		assert_eq!(recipe.category_id, DEFAULT_CATEGORY_ID);
	}

	#[test]
	fn generate_skips_invalid_entries() {
		let recipes = serde_json::json!([
			{ "id": "1", "name": "Plank", "outputQuantity": 4, "ingredients": [ { "item": "Log", "quantity": 1 } ] },
			{ "id": "2", "name": "Broken", "outputQuantity": 0, "ingredients": [] },
			{ "id": "3", "name": "Plank", "outputQuantity": 2, "ingredients": [] }
		]);
		let db = RecipeDb::generate_from_json(&recipes, None, true).unwrap();
		assert_eq!(db.recipe_count(), 1);
		assert!(db.find_by_name("Plank").is_some());
	}

	#[test]
	fn generate_reassigns_missing_category() {
		let recipes = serde_json::json!([
			{ "id": "1", "name": "Plank", "outputQuantity": 4, "categoryId": "gone" }
		]);
		let db = RecipeDb::generate_from_json(&recipes, None, false).unwrap();
		assert_eq!(db.find_by_name("Plank").unwrap().category_id, DEFAULT_CATEGORY_ID);
	}
}
