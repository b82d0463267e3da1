pub mod error;
pub use error::Result;
pub use error::Error;

pub mod recipedb;
pub use recipedb::RecipeDb;
pub use recipedb::Recipe;

pub mod config;
pub use config::CraftPlanOptions;

pub mod requirement_resolver;
