fn main() {
	env_logger::init();

	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",        "Show help");
		opts.optmulti("a", "have",        "On-hand stock netted out of the plan, repeatable", "ITEM=QTY");
		opts.optopt(  "c", "category",    "Restrict listing to a category and its descendants", "ID");
		opts.optopt(  "f", "find",        "Restrict listing to names containing a term", "TERM");
		opts.optflag( "",  "no-validate", "Skip JSON schema validation during import");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") || parsed_options.free.is_empty() {
			eprint!("{}", opts.usage(USAGE));
			return;
		}

		parsed_options
	};

	let config = craftplan::CraftPlanOptions::load_from_disk().unwrap_or_else(|e| {
		log::warn!("Failed to read config file: {}", e);
		log::warn!("Using default config.");
		craftplan::CraftPlanOptions::default()
	});

	let result = match parsed_options.free.get(0).unwrap().as_str() {
		"import" => import_collections(&config, &parsed_options),
		"plan" => plan_target(&config, &parsed_options),
		"list" => list_recipes(&config, &parsed_options),
		"category" => manage_categories(&config, &parsed_options),
		other => {
			eprintln!("Unknown command \"{}\".", other);
			eprint!("{}", opts.usage(USAGE));
			return;
		}
	};

	if let Err(e) = result {
		log::error!("{}", e);
		std::process::exit(1);
	}
}

const USAGE: &str = "Usage:
	craftplan-terminal import <recipes.json> [categories.json]
	craftplan-terminal plan <item> <quantity> [--have ITEM=QTY ...]
	craftplan-terminal list [--category ID] [--find TERM]
	craftplan-terminal category list
	craftplan-terminal category add <id> <name> [parent-id]
	craftplan-terminal category rename <id> <new-name>
	craftplan-terminal category delete <id>";

fn import_collections(config: &craftplan::CraftPlanOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	let recipes_path = parsed_options.free.get(1).ok_or(Error::MissingArgument("recipes file"))?;

	let recipes: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(recipes_path)?)?;
	let categories: Option<serde_json::Value> = match parsed_options.free.get(2) {
		Some(path) => Some(serde_json::from_str(&std::fs::read_to_string(path)?)?),
		None => None,
	};

	let do_validation = config.validate_imports() && !parsed_options.opt_present("no-validate");
	let db = craftplan::RecipeDb::generate_from_json(&recipes, categories.as_ref(), do_validation)?;

	/* A cycle is only fatal when a plan actually reaches it, but the author wants to know now */
	if let Some(item) = craftplan::requirement_resolver::RecipeGraph::from_index(&db).find_cycle_member() {
		log::warn!("Imported recipes contain a requirement cycle through \"{}\". Plans through it will fail.", item);
	}

	db.save_to_disk(config)?;
	println!("Imported {} recipes.", db.recipe_count());
	Ok(())
}

fn plan_target(config: &craftplan::CraftPlanOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	use craftplan::requirement_resolver::*;

	let item = parsed_options.free.get(1).ok_or(Error::MissingArgument("item name"))?;
	let quantity = parsed_options.free.get(2)
		.ok_or(Error::MissingArgument("quantity"))?
		.parse::<f64>().map_err(|e| Error::InvalidArgument(format!("quantity: {}", e)))?;

	let mut availability = AvailabilityTable::new();
	for entry in parsed_options.opt_strs("have") {
		let (stock_item, stock_quantity) = entry.split_once('=')
			.ok_or_else(|| Error::InvalidArgument(format!("--have \"{}\", expected ITEM=QTY", entry)))?;
		let stock_quantity = stock_quantity.parse::<f64>().map_err(|e| Error::InvalidArgument(format!("--have \"{}\": {}", entry, e)))?;
		availability.set(stock_item, stock_quantity).map_err(craftplan::Error::from)?;
	}

	let db = load_db(config)?;
	let resolver = RequirementResolver::new(&db, availability);
	let resolution = resolver.resolve(&ResolveTarget::new(item.as_str(), quantity)).map_err(craftplan::Error::from)?;

	if resolution.is_empty() {
		println!("Nothing to craft or acquire.");
		return Ok(());
	}

	for level in resolution.levels() {
		if level.level == 0 {
			println!("Final product");
		} else {
			println!("Level {}", level.level);
		}
		for line in &level.ingredients {
			println!("\t{} x{}", line.item, line.quantity);
		}
	}
	Ok(())
}

fn list_recipes(config: &craftplan::CraftPlanOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	use craftplan::recipedb::iterator::CategoryMatchesExt;
	use craftplan::recipedb::iterator::NameContainsExt;

	let db = load_db(config)?;

	let mut recipes: Vec<_> = match parsed_options.opt_str("category") {
		Some(category_id) => {
			if db.get_category(&category_id).is_none() {
				return Err(Error::InvalidArgument(format!("unknown category \"{}\"", category_id)));
			}
			db.recipes().category_matches(db.category_with_descendants(&category_id)).collect()
		}
		None => db.recipes().collect(),
	};

	if let Some(term) = parsed_options.opt_str("find") {
		recipes = recipes.into_iter().name_contains(&term).collect();
	}

	recipes.sort();
	for recipe in recipes {
		println!("{} (makes {})", recipe.name, recipe.output_quantity);
	}
	Ok(())
}

fn manage_categories(config: &craftplan::CraftPlanOptions, parsed_options: &getopts::Matches) -> Result<(), Error> {
	let mut db = load_db(config)?;

	match parsed_options.free.get(1).map(String::as_str) {
		Some("list") | None => {
			for (depth, category) in db.category_tree() {
				println!("{}{} [{}]", "\t".repeat(depth), category.name, category.id);
			}
			return Ok(());
		}
		Some("add") => {
			let id = parsed_options.free.get(2).ok_or(Error::MissingArgument("category id"))?;
			let name = parsed_options.free.get(3).ok_or(Error::MissingArgument("category name"))?;
			db.add_category(craftplan::recipedb::Category {
				id: id.clone(),
				name: name.clone(),
				parent_id: parsed_options.free.get(4).cloned(),
			})?;
		}
		Some("rename") => {
			let id = parsed_options.free.get(2).ok_or(Error::MissingArgument("category id"))?;
			let name = parsed_options.free.get(3).ok_or(Error::MissingArgument("category name"))?;
			if !db.rename_category(id, name) {
				return Err(Error::InvalidArgument(format!("unknown category \"{}\"", id)));
			}
		}
		Some("delete") => {
			let id = parsed_options.free.get(2).ok_or(Error::MissingArgument("category id"))?;
			let removed = db.delete_category(id);
			if removed.is_empty() {
				println!("Nothing deleted.");
				return Ok(());
			}
			println!("Deleted {} categories.", removed.len());
		}
		Some(other) => {
			return Err(Error::InvalidArgument(format!("unknown category action \"{}\"", other)));
		}
	}

	db.save_to_disk(config)?;
	Ok(())
}

fn load_db(config: &craftplan::CraftPlanOptions) -> Result<craftplan::RecipeDb, Error> {
	match craftplan::RecipeDb::load_from_disk(config) {
		Ok(db) => Ok(db),
		Err(e) => match e {
			craftplan::Error::IO(ref inner) if inner.kind() == std::io::ErrorKind::NotFound => {
				Err(Error::NoDatabase)
			}
			craftplan::Error::Parse(_) => {
				log::warn!("Recipe database snapshot unreadable, format likely changed. Re-import your collections.");
				Err(Error::NoDatabase)
			}
			_ => Err(Error::CraftPlan(e)),
		},
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("craftplan error: {0}")]
	CraftPlan(#[from] craftplan::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("no recipe database on disk, run import first")]
	NoDatabase,
}
