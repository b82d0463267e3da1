//! Various types associated with recipes.

use serde::*;

/// A named transformation producing a fixed number of units per craft.
///
/// The `name` doubles as the lookup key for ingredient references, so it must be
/// unique among recipes just like the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
	pub id: String,
	pub name: String,
	/// Units produced by a single craft. Always at least 1.
	pub output_quantity: f64,
	pub ingredients: Vec<Ingredient>,
	pub category_id: String,
}

impl std::hash::Hash for Recipe {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl std::cmp::Ord for Recipe {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match self.name.cmp(&other.name) {
			core::cmp::Ordering::Equal => {}
			ord => return ord,
		}
		self.id.cmp(&other.id)
	}
}

impl std::cmp::PartialOrd for Recipe {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::cmp::PartialEq for Recipe {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl std::cmp::Eq for Recipe {}

impl Recipe {
	/// Checks the structural invariants of a single recipe.
	///
	/// `Err` carries a human readable reason. Cross-recipe invariants (unique names,
	/// resolvable categories) are the database's job.
	pub fn validate(&self) -> std::result::Result<(), String> {
		if self.id.is_empty() {
			return Err(format!("recipe \"{}\" has an empty id", self.name));
		}
		if self.name.is_empty() {
			return Err(format!("recipe with id \"{}\" has an empty name", self.id));
		}
		if !self.output_quantity.is_finite() || self.output_quantity < 1.0 {
			return Err(format!("recipe \"{}\" output quantity must be at least 1, got {}", self.name, self.output_quantity));
		}
		for ing in &self.ingredients {
			if ing.item.is_empty() {
				return Err(format!("recipe \"{}\" has an unnamed ingredient", self.name));
			}
			if !ing.quantity.is_finite() || ing.quantity <= 0.0 {
				return Err(format!("recipe \"{}\" ingredient \"{}\" quantity must be positive, got {}", self.name, ing.item, ing.quantity));
			}
		}
		Ok(())
	}
}

/// A reference by name to either another recipe or a raw item, with a per-batch quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
	pub item: String,
	pub quantity: f64,
	/// Authoring-time hint only. Recipes can be added or removed after a reference was
	/// created, so resolution always re-derives this from the live index.
	#[serde(default)]
	pub is_recipe: bool,
}
