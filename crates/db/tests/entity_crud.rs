//! Integration tests for entity CRUD at the repository layer.
//!
//! Exercises create/read/update/delete for asset types, employees, and
//! assets against a real database, plus unique constraint behaviour.

use sqlx::PgPool;

use assetbase_core::lifecycle::AssetStatus;
use assetbase_db::models::asset::{AssetFilter, CreateAsset, UpdateAsset};
use assetbase_db::models::asset_type::{CreateAssetType, UpdateAssetType};
use assetbase_db::models::employee::{CreateEmployee, UpdateEmployee};
use assetbase_db::repositories::{AssetRepo, AssetTypeRepo, EmployeeRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_type(name: &str) -> CreateAssetType {
    CreateAssetType {
        name: name.to_string(),
        description: None,
    }
}

fn new_employee(last_name: &str, email: &str) -> CreateEmployee {
    CreateEmployee {
        first_name: "Alex".to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        department: None,
    }
}

fn new_asset(code: &str, type_id: i64) -> CreateAsset {
    CreateAsset {
        code: code.to_string(),
        name: format!("Asset {code}"),
        type_id,
        serial_number: None,
        price: None,
        purchase_date: None,
    }
}

// ---------------------------------------------------------------------------
// Asset types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_asset_type(pool: PgPool) {
    let created = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    assert_eq!(created.name, "Laptop");
    assert!(created.description.is_none());

    let found = AssetTypeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("should find created type");
    assert_eq!(found.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_asset_type_name_rejected(pool: PgPool) {
    AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    let err = AssetTypeRepo::create(&pool, &new_type("Laptop"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_asset_types_name"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_asset_type_patches_fields(pool: PgPool) {
    let created = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();

    let updated = AssetTypeRepo::update(
        &pool,
        created.id,
        &UpdateAssetType {
            name: None,
            description: Some("Portable computers".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("row should exist");

    assert_eq!(updated.name, "Laptop");
    assert_eq!(updated.description.as_deref(), Some("Portable computers"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_asset_type_list_ordered_by_name_with_counts(pool: PgPool) {
    let monitor = AssetTypeRepo::create(&pool, &new_type("Monitor")).await.unwrap();
    AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();

    AssetRepo::create(&pool, &new_asset("MON-001", monitor.id)).await.unwrap();
    AssetRepo::create(&pool, &new_asset("MON-002", monitor.id)).await.unwrap();

    let types = AssetTypeRepo::list(&pool).await.unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].name, "Laptop");
    assert_eq!(types[0].asset_count, 0);
    assert_eq!(types[1].name, "Monitor");
    assert_eq!(types[1].asset_count, 2);
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_update_employee(pool: PgPool) {
    let created = EmployeeRepo::create(&pool, &new_employee("Rivera", "alex@example.com"))
        .await
        .unwrap();
    assert_eq!(created.email, "alex@example.com");

    let updated = EmployeeRepo::update(
        &pool,
        created.id,
        &UpdateEmployee {
            first_name: None,
            last_name: None,
            email: None,
            department: Some("IT".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("row should exist");

    assert_eq!(updated.department.as_deref(), Some("IT"));
    assert_eq!(updated.last_name, "Rivera");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_employee_email_rejected(pool: PgPool) {
    EmployeeRepo::create(&pool, &new_employee("Rivera", "dup@example.com"))
        .await
        .unwrap();
    let err = EmployeeRepo::create(&pool, &new_employee("Chen", "dup@example.com"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_employees_email"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_list_ordered_by_last_name(pool: PgPool) {
    EmployeeRepo::create(&pool, &new_employee("Zhou", "zhou@example.com"))
        .await
        .unwrap();
    EmployeeRepo::create(&pool, &new_employee("Adams", "adams@example.com"))
        .await
        .unwrap();

    let employees = EmployeeRepo::list(&pool).await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].last_name, "Adams");
    assert_eq!(employees[1].last_name, "Zhou");
    assert_eq!(employees[0].transaction_count, 0);
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_asset_starts_available(pool: PgPool) {
    let laptop = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    let asset = AssetRepo::create(&pool, &new_asset("LT-001", laptop.id)).await.unwrap();

    assert_eq!(asset.status, AssetStatus::Available);
    assert_eq!(asset.code, "LT-001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_asset_code_rejected(pool: PgPool) {
    let laptop = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    AssetRepo::create(&pool, &new_asset("LT-001", laptop.id)).await.unwrap();

    let err = AssetRepo::create(&pool, &new_asset("LT-001", laptop.id))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_assets_code"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_asset_does_not_change_status(pool: PgPool) {
    let laptop = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    let asset = AssetRepo::create(&pool, &new_asset("LT-001", laptop.id)).await.unwrap();

    let updated = AssetRepo::update(
        &pool,
        asset.id,
        &UpdateAsset {
            code: None,
            name: Some("Renamed".to_string()),
            type_id: None,
            serial_number: Some("SN-42".to_string()),
            price: None,
            purchase_date: None,
        },
    )
    .await
    .unwrap()
    .expect("row should exist");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.serial_number.as_deref(), Some("SN-42"));
    assert_eq!(updated.status, AssetStatus::Available);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_asset_removes_row(pool: PgPool) {
    let laptop = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    let asset = AssetRepo::create(&pool, &new_asset("LT-001", laptop.id)).await.unwrap();

    assert!(AssetRepo::delete(&pool, asset.id).await.unwrap());
    assert!(AssetRepo::find_by_id(&pool, asset.id).await.unwrap().is_none());

    // Deleting again reports no row.
    assert!(!AssetRepo::delete(&pool, asset.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_asset_type_restricts_delete_via_fk(pool: PgPool) {
    let laptop = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    AssetRepo::create(&pool, &new_asset("LT-001", laptop.id)).await.unwrap();

    // A raw delete (bypassing the guard) trips the RESTRICT foreign key.
    let err = sqlx::query("DELETE FROM asset_types WHERE id = $1")
        .bind(laptop.id)
        .execute(&pool)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_assets_unfiltered_newest_first(pool: PgPool) {
    let laptop = AssetTypeRepo::create(&pool, &new_type("Laptop")).await.unwrap();
    AssetRepo::create(&pool, &new_asset("LT-001", laptop.id)).await.unwrap();
    AssetRepo::create(&pool, &new_asset("LT-002", laptop.id)).await.unwrap();

    let items = AssetRepo::list(&pool, &AssetFilter::default()).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].created_at >= items[1].created_at);
    assert_eq!(items[0].type_name, "Laptop");
}
