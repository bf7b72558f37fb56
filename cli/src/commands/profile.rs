use smartfridge_core::{
    application::FridgeService,
    domain::device_profile::ports::ProfileService,
};

use crate::{
    args::ProfileCommand,
    commands::CommandError,
    render::{self, Output},
};

pub async fn run(
    service: &FridgeService,
    command: ProfileCommand,
    output: Output,
) -> Result<(), CommandError> {
    match command {
        ProfileCommand::Show => {
            let profile = service.profile().await?;
            if output.is_json() {
                println!("{}", render::json(&profile)?);
            } else {
                println!("Name:   {}", profile.display_name);
                println!("Device: {}", profile.device_id);
            }
        }
        ProfileCommand::SetName { name } => {
            let name = service.set_display_name(name).await?;
            println!("Hello, {}!", name);
        }
        ProfileCommand::DeviceId => {
            println!("{}", service.device_id().await?);
        }
    }

    Ok(())
}
