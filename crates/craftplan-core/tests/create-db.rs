use craftplan::recipedb::DEFAULT_CATEGORY_ID;

#[test]
fn recipedb_create_from_sample_collections() {
	let db = craftplan_test_utils::get_recipedb(None);

	assert_eq!(db.recipe_count(), 6);
	for id in [DEFAULT_CATEGORY_ID, "materials", "smelting", "furniture"] {
		assert!(db.get_category(id).is_some(), "category \"{}\" should have imported", id);
	}

	let table = db.find_by_name("Table").expect("Table should have imported");
	assert_eq!(table.output_quantity, 1.0);
	assert_eq!(table.ingredients.len(), 3);
	assert_eq!(table.category_id, "furniture");

	/* No categoryId in the native entry falls back to the default category */
	assert_eq!(db.find_by_name("Charcoal").unwrap().category_id, DEFAULT_CATEGORY_ID);
}

#[test]
fn recipedb_snapshot_roundtrip() {
	let (_dir, options) = craftplan_test_utils::temp_options();

	let db = craftplan_test_utils::get_recipedb(None);
	db.save_to_disk(&options).expect("save should succeed");

	let restored = craftplan::RecipeDb::load_from_disk(&options).expect("load should succeed");
	assert_eq!(restored.recipe_count(), db.recipe_count());
	assert_eq!(restored.categories().count(), db.categories().count());
	assert_eq!(
		restored.find_by_name("Plank").unwrap().ingredients,
		db.find_by_name("Plank").unwrap().ingredients,
	);
}

#[test]
fn recipedb_load_missing_snapshot_is_not_found() {
	let (_dir, options) = craftplan_test_utils::temp_options();

	match craftplan::RecipeDb::load_from_disk(&options) {
		Err(craftplan::Error::IO(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
		other => panic!("expected IO not-found error, got {:?}", other),
	}
}

#[test]
fn recipedb_rejects_duplicate_names_and_ids() {
	use craftplan::recipedb::{Recipe, Ingredient};

	let mut db = craftplan::RecipeDb::default();
	let plank = Recipe {
		id: "1".to_string(),
		name: "Plank".to_string(),
		output_quantity: 4.0,
		ingredients: vec![Ingredient { item: "Log".to_string(), quantity: 1.0, is_recipe: false }],
		category_id: DEFAULT_CATEGORY_ID.to_string(),
	};
	db.add_recipe(plank.clone()).unwrap();

	assert!(matches!(db.add_recipe(plank.clone()), Err(craftplan::Error::AlreadyExists)));

	let same_name = Recipe { id: "2".to_string(), ..plank.clone() };
	assert!(matches!(db.add_recipe(same_name), Err(craftplan::Error::AlreadyExists)));

	let bad_quantity = Recipe { id: "3".to_string(), name: "Beam".to_string(), output_quantity: 0.0, ..plank.clone() };
	assert!(matches!(db.add_recipe(bad_quantity), Err(craftplan::Error::Validation(_))));

	let bad_category = Recipe { id: "4".to_string(), name: "Beam".to_string(), category_id: "gone".to_string(), ..plank };
	assert!(matches!(db.add_recipe(bad_category), Err(craftplan::Error::Validation(_))));
}

#[test]
fn recipe_name_search_is_case_insensitive() {
	use craftplan::recipedb::iterator::NameContainsExt;

	let db = craftplan_test_utils::get_recipedb(None);

	let mut names: Vec<_> = db.recipes().name_contains("iRoN").map(|r| r.name.as_str()).collect();
	names.sort();
	assert_eq!(names, vec!["Iron Ingot"]);
}

#[test]
fn recipedb_update_preserves_id_uniqueness() {
	use craftplan::recipedb::Recipe;

	let mut db = craftplan_test_utils::get_recipedb(None);

	let mut plank = db.find_by_name("Plank").unwrap().clone();
	plank.output_quantity = 6.0;
	db.update_recipe(plank).unwrap();
	assert_eq!(db.find_by_name("Plank").unwrap().output_quantity, 6.0);

	/* Renaming onto another recipe's name is rejected */
	let mut stick = db.find_by_name("Stick").unwrap().clone();
	stick.name = "Plank".to_string();
	assert!(matches!(db.update_recipe(stick), Err(craftplan::Error::AlreadyExists)));

	let ghost = Recipe { id: "missing".to_string(), ..db.find_by_name("Plank").unwrap().clone() };
	assert!(db.update_recipe(ghost).is_err());
}
