use std::io::{self, BufRead, Write};

use chrono::Utc;
use smartfridge_core::{
    application::{Alert, FridgeService},
    domain::{
        common::in_flight::RequestKind,
        fridge_item::{ports::FridgeItemService, value_objects::ItemView},
    },
};
use tracing::info;
use uuid::Uuid;

use crate::{
    args::ItemsCommand,
    commands::{CommandError, During},
    render::{self, Output},
    validators::ItemFormValidator,
};

pub async fn run(
    service: &FridgeService,
    command: ItemsCommand,
    output: Output,
) -> Result<(), CommandError> {
    match command {
        ItemsCommand::List => list(service, output).await,
        ItemsCommand::Show { id } => show(service, id, output).await,
        ItemsCommand::Add(fields) => {
            let item = ItemFormValidator::from(fields)
                .into_new_item()
                .during(RequestKind::SaveItem)?;
            let created = service.add_item(item).await.during(RequestKind::SaveItem)?;

            info!(id = %created.id, "item added");
            println!("{}", Alert::success("Item added successfully!"));
            println!("{}", created.id);
            Ok(())
        }
        ItemsCommand::Edit { id, fields } => {
            let existing = service
                .get_item(id, Utc::now())
                .await
                .during(RequestKind::LoadItems)?;
            let item = ItemFormValidator::from_existing(&existing.item, fields)
                .into_new_item()
                .during(RequestKind::SaveItem)?;
            service
                .update_item(id, item)
                .await
                .during(RequestKind::SaveItem)?;

            println!("{}", Alert::success("Item updated successfully!"));
            Ok(())
        }
        ItemsCommand::Remove { id, yes } => remove(service, id, yes).await,
    }
}

async fn list(service: &FridgeService, output: Output) -> Result<(), CommandError> {
    let views = service
        .list_items(Utc::now())
        .await
        .during(RequestKind::LoadItems)?;

    if output.is_json() {
        println!("{}", render::json(&views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("Your fridge is empty. Add an item with `smartfridge items add`.");
        return Ok(());
    }

    for view in &views {
        println!("{}", render::item_line(view));
    }
    Ok(())
}

async fn show(service: &FridgeService, id: Uuid, output: Output) -> Result<(), CommandError> {
    let view = service
        .get_item(id, Utc::now())
        .await
        .during(RequestKind::LoadItems)?;

    if output.is_json() {
        println!("{}", render::json(&view)?);
    } else {
        print!("{}", render::item_details(&view));
    }
    Ok(())
}

async fn remove(service: &FridgeService, id: Uuid, yes: bool) -> Result<(), CommandError> {
    if !yes {
        let view = service
            .get_item(id, Utc::now())
            .await
            .during(RequestKind::LoadItems)?;
        if !confirm_delete(&view)? {
            println!("Cancelled");
            return Ok(());
        }
    }

    service.delete_item(id).await.during(RequestKind::DeleteItem)?;

    println!("{}", Alert::success("Item deleted"));
    Ok(())
}

fn confirm_delete(view: &ItemView) -> Result<bool, io::Error> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "Delete Item: Are you sure you want to delete {}? [y/N] ",
        view.item.name
    )?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
