use chrono::Local;
use smartfridge_core::{
    application::FridgeService,
    domain::{common::in_flight::RequestKind, dashboard::ports::DashboardService},
};

use crate::{
    commands::{CommandError, During},
    render::{self, Output},
};

pub async fn run(service: &FridgeService, output: Output) -> Result<(), CommandError> {
    let now = Local::now().fixed_offset();
    let overview = service.overview(now).await.during(RequestKind::LoadItems)?;

    if output.is_json() {
        println!("{}", render::json(&overview)?);
    } else {
        print!("{}", render::dashboard(&overview));
    }
    Ok(())
}
