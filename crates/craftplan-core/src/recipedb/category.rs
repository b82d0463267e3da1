//! Categories and the tree operations over them.
//!
//! Categories form a forest via `parent_id`. Exactly one category with
//! [`DEFAULT_CATEGORY_ID`] always exists and can never be deleted; recipes whose
//! category goes away are reassigned to it so `category_id` always resolves.

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

use serde::*;

pub const DEFAULT_CATEGORY_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	pub id: String,
	pub name: String,
	pub parent_id: Option<String>,
}

impl Category {
	pub(super) fn default_category() -> Self {
		Category {
			id: DEFAULT_CATEGORY_ID.to_string(),
			name: "Uncategorized".to_string(),
			parent_id: None,
		}
	}
}

impl super::RecipeDb {
	pub fn categories(&self) -> impl Iterator<Item = &Category> {
		self.categories.values()
	}

	pub fn get_category(&self, id: &str) -> Option<&Category> {
		self.categories.get(id)
	}

	/// Adds a new category. The id must be unused.
	///
	/// A dangling `parent_id` is normalized to a root rather than rejected.
	pub fn add_category(&mut self, mut category: Category) -> crate::Result<()> {
		if self.categories.contains_key(&category.id) {
			return Err(crate::Error::AlreadyExists);
		}
		if category.id.is_empty() || category.name.is_empty() {
			return Err(crate::Error::Validation("category id and name must be non-empty".to_string()));
		}
		if let Some(parent) = &category.parent_id {
			if !self.categories.contains_key(parent) {
				log::warn!("Category \"{}\" references missing parent \"{}\", adding as root", category.name, parent);
				category.parent_id = None;
			}
		}
		log::trace!("Adding category \"{}\"", category.name);
		self.categories.insert(category.id.clone(), category);
		Ok(())
	}

	/// Renames a category in place. Returns whether the id existed.
	pub fn rename_category(&mut self, id: &str, new_name: &str) -> bool {
		match self.categories.get_mut(id) {
			Some(category) => {
				log::trace!("Renaming category \"{}\" to \"{}\"", category.name, new_name);
				category.name = new_name.to_string();
				true
			}
			None => false,
		}
	}

	/// Deletes a category and every descendant, reassigning orphaned recipes to the
	/// default category. Returns the removed ids in traversal order.
	///
	/// Deleting the default category or an unknown id is a silent no-op.
	pub fn delete_category(&mut self, id: &str) -> Vec<String> {
		if id == DEFAULT_CATEGORY_ID || !self.categories.contains_key(id) {
			return Vec::new();
		}

		let mut children = HashMap::<String, Vec<String>>::new();
		for category in self.categories.values() {
			if let Some(parent) = &category.parent_id {
				children.entry(parent.clone()).or_default().push(category.id.clone());
			}
		}

		let mut removed = Vec::<String>::new();
		let mut queue = VecDeque::<String>::new();
		queue.push_back(id.to_string());
		while let Some(current) = queue.pop_front() {
			/* The default category survives even when authored under a deleted parent */
			if current == DEFAULT_CATEGORY_ID {
				continue;
			}
			for child in children.remove(&current).unwrap_or_default() {
				queue.push_back(child);
			}
			removed.push(current);
		}

		for removed_id in &removed {
			self.categories.remove(removed_id);
		}

		let removed_set: HashSet<&String> = removed.iter().collect();
		for recipe in self.recipes.values_mut() {
			if removed_set.contains(&recipe.category_id) {
				log::trace!("Reassigning recipe \"{}\" to the default category", recipe.name);
				recipe.category_id = DEFAULT_CATEGORY_ID.to_string();
			}
		}

		removed
	}

	/// A category id plus every descendant id, for category-scoped recipe filtering.
	pub fn category_with_descendants(&self, id: &str) -> HashSet<String> {
		let mut children = HashMap::<&str, Vec<&str>>::new();
		for category in self.categories.values() {
			if let Some(parent) = &category.parent_id {
				children.entry(parent.as_str()).or_default().push(category.id.as_str());
			}
		}

		let mut set = HashSet::<String>::new();
		let mut queue = VecDeque::<&str>::new();
		queue.push_back(id);
		while let Some(current) = queue.pop_front() {
			if !set.insert(current.to_string()) {
				continue;
			}
			for child in children.get(current).into_iter().flatten() {
				queue.push_back(child);
			}
		}
		set
	}

	/// The whole forest flattened to `(depth, category)` rows in display order,
	/// children sorted by name under their parent. Categories whose parent is
	/// missing are listed as roots.
	pub fn category_tree(&self) -> Vec<(usize, &Category)> {
		let mut children = HashMap::<Option<&str>, Vec<&Category>>::new();
		for category in self.categories.values() {
			let parent = category.parent_id.as_deref().filter(|p| self.categories.contains_key(*p));
			children.entry(parent).or_default().push(category);
		}
		for list in children.values_mut() {
			list.sort_by(|a, b| a.name.cmp(&b.name));
		}

		let mut rows = Vec::<(usize, &Category)>::new();
		let mut stack = Vec::<(usize, &Category)>::new();
		if let Some(roots) = children.get(&None) {
			for root in roots.iter().rev() {
				stack.push((0, root));
			}
		}
		while let Some((depth, category)) = stack.pop() {
			rows.push((depth, category));
			if let Some(list) = children.get(&Some(category.id.as_str())) {
				for child in list.iter().rev() {
					stack.push((depth + 1, child));
				}
			}
		}
		rows
	}
}
