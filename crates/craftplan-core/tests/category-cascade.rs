use craftplan::recipedb::{Category, DEFAULT_CATEGORY_ID};

#[test]
fn delete_cascades_and_reassigns_recipes() {
	let mut db = craftplan_test_utils::get_recipedb(None);

	/* "smelting" is a child of "materials"; recipes live in both */
	let removed = db.delete_category("materials");
	assert_eq!(removed.len(), 2);
	assert!(removed.contains(&"materials".to_string()));
	assert!(removed.contains(&"smelting".to_string()));
	assert!(db.get_category("materials").is_none());
	assert!(db.get_category("smelting").is_none());

	for name in ["Plank", "Stick", "Iron Ingot", "Nail"] {
		assert_eq!(db.find_by_name(name).unwrap().category_id, DEFAULT_CATEGORY_ID, "recipe \"{}\" should move to the default category", name);
	}

	/* Recipes in untouched categories keep theirs */
	assert_eq!(db.find_by_name("Table").unwrap().category_id, "furniture");
}

#[test]
fn delete_child_leaves_parent_alone() {
	let mut db = craftplan::RecipeDb::default();
	db.add_category(Category { id: "a".to_string(), name: "A".to_string(), parent_id: None }).unwrap();
	db.add_category(Category { id: "b".to_string(), name: "B".to_string(), parent_id: Some("a".to_string()) }).unwrap();

	let recipe = craftplan::Recipe {
		id: "1".to_string(),
		name: "Widget".to_string(),
		output_quantity: 1.0,
		ingredients: vec![],
		category_id: "b".to_string(),
	};
	db.add_recipe(recipe).unwrap();

	assert_eq!(db.delete_category("b"), vec!["b".to_string()]);
	assert!(db.get_category("a").is_some());
	assert_eq!(db.get_recipe("1").unwrap().category_id, DEFAULT_CATEGORY_ID);

	/* Deleting the parent of the already-moved recipe changes nothing further */
	assert_eq!(db.delete_category("a"), vec!["a".to_string()]);
	assert_eq!(db.get_recipe("1").unwrap().category_id, DEFAULT_CATEGORY_ID);
}

#[test]
fn default_category_cannot_be_deleted() {
	let mut db = craftplan_test_utils::get_recipedb(None);

	assert!(db.delete_category(DEFAULT_CATEGORY_ID).is_empty());
	assert!(db.get_category(DEFAULT_CATEGORY_ID).is_some());

	/* Unknown ids are a silent no-op too */
	assert!(db.delete_category("nonsense").is_empty());
}

#[test]
fn rename_category_in_place() {
	let mut db = craftplan_test_utils::get_recipedb(None);

	assert!(db.rename_category("furniture", "Woodshop"));
	assert_eq!(db.get_category("furniture").unwrap().name, "Woodshop");

	assert!(!db.rename_category("nonsense", "Nope"));
}

#[test]
fn add_category_normalizes_dangling_parent() {
	let mut db = craftplan::RecipeDb::default();

	db.add_category(Category { id: "x".to_string(), name: "X".to_string(), parent_id: Some("gone".to_string()) }).unwrap();
	assert_eq!(db.get_category("x").unwrap().parent_id, None);

	assert!(matches!(
		db.add_category(Category { id: "x".to_string(), name: "X again".to_string(), parent_id: None }),
		Err(craftplan::Error::AlreadyExists)
	));
}

#[test]
fn category_tree_rows_follow_depth() {
	let db = craftplan_test_utils::get_recipedb(None);

	let rows = db.category_tree();
	assert_eq!(rows.len(), 4);

	let materials_pos = rows.iter().position(|(_, c)| c.id == "materials").unwrap();
	let smelting_pos = rows.iter().position(|(_, c)| c.id == "smelting").unwrap();
	assert_eq!(rows[materials_pos].0, 0);
	assert_eq!(rows[smelting_pos].0, 1);
	assert_eq!(smelting_pos, materials_pos + 1, "children come directly under their parent");
}

#[test]
fn category_descendants_for_filtering() {
	use craftplan::recipedb::iterator::CategoryMatchesExt;

	let db = craftplan_test_utils::get_recipedb(None);

	let subtree = db.category_with_descendants("materials");
	assert!(subtree.contains("materials") && subtree.contains("smelting"));
	assert!(!subtree.contains("furniture"));

	let mut names: Vec<_> = db.recipes().category_matches(subtree).map(|r| r.name.as_str()).collect();
	names.sort();
	assert_eq!(names, vec!["Iron Ingot", "Nail", "Plank", "Stick"]);
}
