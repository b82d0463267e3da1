//! Utilities for expanding a craft target into the full multi-level list of everything
//! still to be produced or acquired, netting out on-hand stock.
//!
//! # Usage
//! 1. Build an [`AvailabilityTable`] of on-hand stock (may be empty).
//! 1. Create a [`RequirementResolver`] borrowing the [`crate::RecipeDb`] snapshot.
//! 1. [`RequirementResolver::resolve()`] with a [`ResolveTarget`] to get a [`Resolution`].
//! 1. [`Resolution::levels()`] to get the per-level shopping list, one line per item.
//!
//! The resolver is a pure function of its inputs: re-create and re-run it wholesale
//! whenever the recipe set, the target, or availability change. There is no cached
//! state to invalidate.

use serde::Serialize;

mod availability;
pub use availability::AvailabilityTable;

mod recipe_graph;
pub use recipe_graph::RecipeGraph;
pub use recipe_graph::NodeData;

mod expansion;
pub use expansion::RequirementResolver;
pub use expansion::ResolveError;

mod craft_levels;
pub use craft_levels::Resolution;
pub use craft_levels::CraftLevel;
pub use craft_levels::CraftLine;

/// A craft request that can be given to the resolver to fulfill.
#[derive(Debug, Default, Clone)]
pub struct ResolveTarget {
	pub item: String,
	pub quantity: f64,
}

impl ResolveTarget {
	pub fn new(item: impl Into<String>, quantity: f64) -> Self {
		ResolveTarget { item: item.into(), quantity }
	}
}

/// A single net requirement line emitted during expansion.
///
/// `quantity` is the amount still needed after netting availability, not the amount
/// the whole batches actually produce. `level` is the recursion depth from the
/// target, 0 being the target itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedIngredient {
	pub item: String,
	pub quantity: f64,
	pub level: u32,
}
