mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use common::{FridgeContext, eggs, milk};
use smartfridge_core::domain::{
    common::entities::app_errors::CoreError,
    dashboard::{ports::DashboardService, value_objects::Greeting},
    device_profile::ports::ProfileService,
    expiry::ExpiryBucket,
    fridge_item::{entities::Unit, ports::FridgeItemService, value_objects::NewFridgeItem},
};
use test_context::test_context;
use uuid::Uuid;

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_add_then_list_newest_first(ctx: &mut FridgeContext) {
    ctx.service.add_item(milk()).await.unwrap();
    ctx.service.add_item(eggs()).await.unwrap();

    let views = ctx.service.list_items(Utc::now()).await.unwrap();
    let names: Vec<_> = views.iter().map(|v| v.item.name.as_str()).collect();
    assert_eq!(names, vec!["Eggs", "Milk"]);
    assert_eq!(views[0].expiry.bucket, ExpiryBucket::Unknown);
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_invalid_form_is_rejected_before_insert(ctx: &mut FridgeContext) {
    let mut blank = milk();
    blank.name = "   ".to_string();
    assert_eq!(ctx.service.add_item(blank).await.unwrap_err(), CoreError::InvalidName);

    let mut negative = milk();
    negative.quantity = -1.0;
    assert_eq!(
        ctx.service.add_item(negative).await.unwrap_err(),
        CoreError::InvalidQuantity
    );

    assert!(ctx.service.list_items(Utc::now()).await.unwrap().is_empty());
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_name_is_trimmed_on_save(ctx: &mut FridgeContext) {
    let mut padded = milk();
    padded.name = "  Oat milk ".to_string();

    let created = ctx.service.add_item(padded).await.unwrap();
    assert_eq!(created.name, "Oat milk");
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_update_replaces_fields(ctx: &mut FridgeContext) {
    let created = ctx.service.add_item(milk()).await.unwrap();

    let changes = NewFridgeItem {
        quantity: 0.5,
        unit: Unit::Custom("carton".to_string()),
        ..milk()
    };
    let updated = ctx.service.update_item(created.id, changes).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.quantity, 0.5);
    assert_eq!(updated.unit.as_str(), "carton");
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_delete_removes_only_the_target(ctx: &mut FridgeContext) {
    let keep = ctx.service.add_item(milk()).await.unwrap();
    let drop = ctx.service.add_item(eggs()).await.unwrap();

    ctx.service.delete_item(drop.id).await.unwrap();

    let remaining = ctx.service.list_items(Utc::now()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].item.id, keep.id);

    assert_eq!(
        ctx.service.delete_item(drop.id).await.unwrap_err(),
        CoreError::NotFound
    );
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_get_unknown_item(ctx: &mut FridgeContext) {
    assert_eq!(
        ctx.service.get_item(Uuid::new_v4(), Utc::now()).await.unwrap_err(),
        CoreError::NotFound
    );
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_dashboard_overview(ctx: &mut FridgeContext) {
    for _ in 0..3 {
        ctx.service.add_item(eggs()).await.unwrap();
    }
    let created = ctx.service.add_item(milk()).await.unwrap();
    ctx.service.add_item(eggs()).await.unwrap();

    // Evening in UTC+2, two days before the milk expires
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = offset.with_ymd_and_hms(2030, 1, 8, 19, 0, 0).unwrap();

    let overview = ctx.service.overview(now).await.unwrap();
    assert_eq!(overview.greeting, Greeting::Evening);
    assert_eq!(overview.display_name, "Chef");
    assert_eq!(overview.summary.total, 5);
    assert_eq!(overview.summary.expiring_soon, 1);
    assert_eq!(overview.recent.len(), 4);
    assert_eq!(overview.recent[1].item.id, created.id);

    ctx.service.set_display_name(" Sam ".to_string()).await.unwrap();
    let overview = ctx.service.overview(now).await.unwrap();
    assert_eq!(overview.display_name, "Sam");
}

#[test_context(FridgeContext)]
#[tokio::test]
async fn test_profile_adopts_platform_id(ctx: &mut FridgeContext) {
    let first = ctx.service.device_id().await.unwrap();
    assert_eq!(first, "test-machine");

    let profile = ctx.service.profile().await.unwrap();
    assert_eq!(profile.device_id, first);
    assert_eq!(
        ctx.service.set_display_name("  ".to_string()).await.unwrap_err(),
        CoreError::InvalidDisplayName
    );
}
