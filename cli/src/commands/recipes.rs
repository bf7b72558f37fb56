use smartfridge_core::{
    application::{Alert, FridgeService},
    domain::{common::in_flight::RequestKind, recipe::ports::RecipeService},
};

use crate::{
    args::RecipesCommand,
    commands::{CommandError, During},
    render::{self, Output},
};

pub async fn run(
    service: &FridgeService,
    command: RecipesCommand,
    output: Output,
) -> Result<(), CommandError> {
    match command {
        RecipesCommand::Generate => {
            if !output.is_json() {
                println!("Generating recipes...");
            }
            let recipes = service
                .generate_recipes()
                .await
                .during(RequestKind::GenerateRecipes)?;

            if output.is_json() {
                println!("{}", render::json(&recipes)?);
            } else {
                print!("{}", render::recipes(&recipes));
            }
        }
        RecipesCommand::Show => {
            let recipes = service.cached_recipes().await?;

            if output.is_json() {
                println!("{}", render::json(&recipes)?);
            } else if recipes.is_empty() {
                println!("No recipes yet. Run `smartfridge recipes generate`.");
            } else {
                print!("{}", render::recipes(&recipes));
            }
        }
        RecipesCommand::Clear => {
            service.clear_cached_recipes().await?;

            println!("{}", Alert::success("Recipes cleared"));
        }
    }

    Ok(())
}
