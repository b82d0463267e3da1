//! The depth-first requirement expansion itself.

use super::*;
use crate::recipedb::RecipeDb;

/// These errors halt resolution before any lines are produced.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
	/// Expansion reached an item already being expanded further up the path.
	#[error("recipe requirement cycle through \"{item}\"")]
	CyclicRecipe { item: String },
	/// A negative or non-finite target or availability quantity was supplied.
	#[error("invalid quantity: {value}")]
	InvalidQuantity { value: f64 },
}

/// Expands a [`ResolveTarget`] into net requirement lines.
///
/// Borrows an immutable snapshot of the recipe index for its whole lifetime; recipe
/// or availability edits mean building a fresh resolver.
#[derive(Debug)]
pub struct RequirementResolver<'db> {
	db: &'db RecipeDb,
	availability: AvailabilityTable,
}

impl<'db> RequirementResolver<'db> {
	pub fn new(db: &'db RecipeDb, availability: AvailabilityTable) -> Self {
		RequirementResolver { db, availability }
	}

	/// Runs the expansion.
	///
	/// A target with no matching recipe resolves to an empty [`Resolution`], not an
	/// error. Quantities are checked before traversal; a cyclic recipe graph fails
	/// with [`ResolveError::CyclicRecipe`] instead of recursing unboundedly.
	pub fn resolve(&self, target: &ResolveTarget) -> Result<Resolution, ResolveError> {
		if !target.quantity.is_finite() || target.quantity < 0.0 {
			return Err(ResolveError::InvalidQuantity { value: target.quantity });
		}
		for (_, quantity) in self.availability.iter() {
			if !quantity.is_finite() || quantity < 0.0 {
				return Err(ResolveError::InvalidQuantity { value: quantity });
			}
		}

		let mut lines = Vec::<CalculatedIngredient>::new();
		let mut path = Vec::<String>::new();
		self.expand(&target.item, target.quantity, 0, &mut path, &mut lines)?;
		Ok(Resolution::new(lines))
	}

	/// One node of the pre-order walk: net `want` against stock, round up to whole
	/// batches, emit the net line, then push the scaled demand into each ingredient.
	fn expand(&self, name: &str, want: f64, level: u32, path: &mut Vec<String>, out: &mut Vec<CalculatedIngredient>) -> Result<(), ResolveError> {
		let Some(recipe) = self.db.find_by_name(name) else {
			/* Unknown targets silently yield nothing; raw ingredients are netted at their reference site */
			return Ok(());
		};

		let remaining = (want - self.availability.get_or_zero(name)).max(0.0);
		if remaining <= 0.0 {
			/* Fully covered by stock, nothing to produce and nothing to recurse into */
			return Ok(());
		}

		if path.iter().any(|p| p == name) {
			return Err(ResolveError::CyclicRecipe { item: name.to_string() });
		}

		/* Partial batches are not a thing, the last craft overproduces instead */
		let batches = (remaining / recipe.output_quantity).ceil();

		out.push(CalculatedIngredient {
			item: recipe.name.clone(),
			quantity: remaining,
			level,
		});

		path.push(name.to_string());
		for ing in &recipe.ingredients {
			/* Demand scales with whole batches, not with the fractional remainder */
			let required = ing.quantity * batches;

			/* `ing.is_recipe` is stale authoring metadata, consult the live index instead */
			if self.db.find_by_name(&ing.item).is_some() {
				self.expand(&ing.item, required, level + 1, path, out)?;
			} else {
				let net = (required - self.availability.get_or_zero(&ing.item)).max(0.0);
				if net > 0.0 {
					out.push(CalculatedIngredient {
						item: ing.item.clone(),
						quantity: net,
						level: level + 1,
					});
				}
			}
		}
		path.pop();

		Ok(())
	}
}
