//! Graph view of the recipe index, used for cycle reporting and inspection.

use std::collections::HashMap;
use std::collections::VecDeque;

use petgraph::prelude::*;
use serde::{Serialize, Deserialize};

use crate::recipedb::RecipeDb;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NodeData {
	/// An item some recipe in the index produces.
	Recipe(String),
	/// An item no recipe produces; it can only be acquired, never crafted.
	Raw(String),
}

impl NodeData {
	pub fn item(&self) -> &str {
		match self {
			NodeData::Recipe(name) | NodeData::Raw(name) => name,
		}
	}
}

/// Items as nodes, ingredient references as edges weighted by the per-batch quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeGraph {
	pub graph: DiGraph<NodeData, f64>,
	indices: HashMap<String, NodeIndex>,
}

impl RecipeGraph {
	/// Builds the graph of the whole index.
	pub fn from_index(db: &RecipeDb) -> Self {
		let mut graph = RecipeGraph { graph: Default::default(), indices: Default::default() };
		for recipe in db.recipes() {
			graph.add_recipe_edges(db, &recipe.name);
		}
		graph
	}

	/// Builds only the sub-graph reachable from `root`.
	pub fn from_target(db: &RecipeDb, root: &str) -> Self {
		let mut graph = RecipeGraph { graph: Default::default(), indices: Default::default() };
		let mut queue = VecDeque::<String>::new();
		queue.push_back(root.to_string());
		while let Some(name) = queue.pop_front() {
			for discovered in graph.add_recipe_edges(db, &name) {
				queue.push_back(discovered);
			}
		}
		graph
	}

	/// Adds `name` and its direct ingredient edges. Returns ingredient names first
	/// seen by this call, so callers can keep expanding.
	fn add_recipe_edges(&mut self, db: &RecipeDb, name: &str) -> Vec<String> {
		let mut discovered = Vec::<String>::new();
		let src = self.get_or_add_node_index(name);
		let Some(recipe) = db.find_by_name(name) else { return discovered };
		self.graph[src] = NodeData::Recipe(name.to_string());
		for ing in &recipe.ingredients {
			let first_seen = !self.indices.contains_key(&ing.item);
			let target = self.get_or_add_node_index(&ing.item);
			if self.graph.find_edge(src, target).is_none() {
				self.graph.add_edge(src, target, ing.quantity);
			}
			if first_seen {
				discovered.push(ing.item.clone());
			}
		}
		discovered
	}

	/// Returns the index of the existing node or a fresh `Raw` node with `name`
	fn get_or_add_node_index(&mut self, name: &str) -> NodeIndex {
		match self.indices.get(name) {
			Some(i) => *i,
			None => {
				let i = self.graph.add_node(NodeData::Raw(name.to_string()));
				self.indices.insert(name.to_string(), i);
				i
			}
		}
	}

	pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
		self.indices.get(name).copied()
	}

	/// An item participating in a requirement cycle, if the graph has one.
	pub fn find_cycle_member(&self) -> Option<&str> {
		petgraph::algo::toposort(&self.graph, None)
			.err()
			.map(|cycle| self.graph[cycle.node_id()].item())
	}
}
