//! Grouping the flat expansion output into per-level lines.

use super::*;

/// One presentation line: an item and the whole units still required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CraftLine {
	pub item: String,
	pub quantity: u64,
}

/// All lines at one depth of the expansion, one per distinct item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CraftLevel {
	pub level: u32,
	pub ingredients: Vec<CraftLine>,
}

/// A completed resolve, ready to query.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
	lines: Vec<CalculatedIngredient>,
}

impl Resolution {
	pub(super) fn new(lines: Vec<CalculatedIngredient>) -> Self {
		Resolution { lines }
	}

	/// No production or sourcing required at all.
	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// The raw expansion lines in traversal order, before grouping.
	pub fn lines(&self) -> &[CalculatedIngredient] {
		&self.lines
	}

	/// Groups the expansion by level, ascending, merging duplicate items within a
	/// level. When the same item appears twice at one level the LATER occurrence
	/// overwrites the earlier quantity; occurrences are never summed. Quantities are
	/// rounded up to whole units for presentation, which is idempotent.
	pub fn levels(&self) -> Vec<CraftLevel> {
		let mut grouped = Vec::<(u32, Vec<(String, f64)>)>::new();

		for line in &self.lines {
			let slot = match grouped.iter().position(|(level, _)| *level == line.level) {
				Some(i) => i,
				None => {
					grouped.push((line.level, Vec::new()));
					grouped.len() - 1
				}
			};
			let entries = &mut grouped[slot].1;
			match entries.iter_mut().find(|(item, _)| *item == line.item) {
				Some((_, quantity)) => *quantity = line.quantity,
				None => entries.push((line.item.clone(), line.quantity)),
			}
		}

		grouped.sort_by_key(|(level, _)| *level);

		grouped.into_iter()
			.map(|(level, entries)| CraftLevel {
				level,
				ingredients: entries.into_iter()
					.map(|(item, quantity)| CraftLine { item, quantity: quantity.ceil() as u64 })
					.collect(),
			})
			.collect()
	}
}
