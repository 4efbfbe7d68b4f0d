//! Integration tests for the repository layer.
//!
//! Exercises repositories against a real database:
//! - Creation defaults (status, priority, total_amount)
//! - The completed_at side effect on status updates
//! - Client-name join shapes
//! - Check constraint behaviour

use sqlx::PgPool;

use allagro_core::status::{OrderCategory, OrderStatus, ProjectPriority, ProjectStatus};
use allagro_db::models::client::CreateClient;
use allagro_db::models::order::CreateOrder;
use allagro_db::models::profile::CreateProfile;
use allagro_db::models::project::CreateProject;
use allagro_db::repositories::{ClientRepo, OrderRepo, ProfileRepo, ProjectRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_client(name: &str) -> CreateClient {
    CreateClient {
        name: name.to_string(),
        phone: None,
        region: None,
    }
}

fn new_project(client_id: Option<i64>, culture_type: &str) -> CreateProject {
    CreateProject {
        client_id,
        culture_type: culture_type.to_string(),
        description: None,
        priority: None,
        surface_area: None,
    }
}

fn new_order(client_id: Option<i64>, product_name: &str) -> CreateOrder {
    CreateOrder {
        client_id,
        product_name: product_name.to_string(),
        category: OrderCategory::Equipment,
        quantity: 1,
        total_amount: None,
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn client_create_and_list(pool: PgPool) {
    let created = ClientRepo::create(
        &pool,
        &CreateClient {
            name: "Ferme Atlas".to_string(),
            phone: Some("0600000000".to_string()),
            region: Some("Souss".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(created.name, "Ferme Atlas");
    assert_eq!(created.region.as_deref(), Some("Souss"));

    let listed = ClientRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    assert_eq!(ClientRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test]
async fn client_refs_are_ordered_by_name(pool: PgPool) {
    ClientRepo::create(&pool, &new_client("Zitoune")).await.unwrap();
    ClientRepo::create(&pool, &new_client("Atlas")).await.unwrap();

    let refs = ClientRepo::list_refs(&pool).await.unwrap();
    let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Atlas", "Zitoune"]);
}

#[sqlx::test]
async fn blank_client_name_is_rejected(pool: PgPool) {
    let result = ClientRepo::create(&pool, &new_client("   ")).await;
    assert!(result.is_err(), "blank name must violate the check constraint");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn project_creation_defaults(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project(None, "Agrumes"))
        .await
        .unwrap();

    assert_eq!(project.status, ProjectStatus::Planned);
    assert_eq!(project.priority, ProjectPriority::Medium);
    assert_eq!(project.completed_at, None);
    assert_eq!(project.client_id, None);
}

#[sqlx::test]
async fn project_priority_is_kept_when_given(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            priority: Some(ProjectPriority::High),
            surface_area: Some(12.5),
            ..new_project(None, "Olives")
        },
    )
    .await
    .unwrap();

    assert_eq!(project.priority, ProjectPriority::High);
    assert_eq!(project.surface_area, Some(12.5));
}

#[sqlx::test]
async fn completing_a_project_stamps_completed_at(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project(None, "Agrumes"))
        .await
        .unwrap();

    let now = chrono::Utc::now();
    let completed = ProjectRepo::update_status(&pool, project.id, ProjectStatus::Completed, Some(now))
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(completed.status, ProjectStatus::Completed);
    assert!(completed.completed_at.is_some());

    // Reverting clears the timestamp again.
    let reverted =
        ProjectRepo::update_status(&pool, project.id, ProjectStatus::InProgress, None)
            .await
            .unwrap()
            .expect("row should exist");
    assert_eq!(reverted.status, ProjectStatus::InProgress);
    assert_eq!(reverted.completed_at, None);
}

#[sqlx::test]
async fn completed_without_timestamp_is_rejected(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project(None, "Agrumes"))
        .await
        .unwrap();

    // The table enforces "completed iff completed_at" as a CHECK.
    let result =
        ProjectRepo::update_status(&pool, project.id, ProjectStatus::Completed, None).await;
    assert!(result.is_err());

    // The failed write must not have changed the row.
    let unchanged = ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, ProjectStatus::Planned);
    assert_eq!(unchanged.completed_at, None);
}

#[sqlx::test]
async fn update_status_on_missing_project_returns_none(pool: PgPool) {
    let updated = ProjectRepo::update_status(&pool, 999_999, ProjectStatus::InProgress, None)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test]
async fn project_delete_is_permanent(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project(None, "Agrumes"))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .is_none());
    // A second delete finds nothing.
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());
}

#[sqlx::test]
async fn project_list_joins_client_name(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Ferme Atlas"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project(Some(client.id), "Agrumes"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project(None, "Olives"))
        .await
        .unwrap();

    let listed = ProjectRepo::list_with_clients(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);

    let with_client = listed
        .iter()
        .find(|p| p.project.culture_type == "Agrumes")
        .unwrap();
    assert_eq!(with_client.client_name.as_deref(), Some("Ferme Atlas"));

    let without_client = listed
        .iter()
        .find(|p| p.project.culture_type == "Olives")
        .unwrap();
    assert_eq!(without_client.client_name, None);
}

#[sqlx::test]
async fn recent_projects_respects_limit(pool: PgPool) {
    for culture in ["A", "B", "C"] {
        ProjectRepo::create(&pool, &new_project(None, culture))
            .await
            .unwrap();
    }

    let recent = ProjectRepo::recent_with_clients(&pool, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn order_creation_defaults(pool: PgPool) {
    let order = OrderRepo::create(&pool, &new_order(None, "Pompe")).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, 0.0);
    assert_eq!(order.quantity, 1);
    assert_eq!(order.category, OrderCategory::Equipment);
}

#[sqlx::test]
async fn order_keeps_given_fields_verbatim(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Ferme Atlas"))
        .await
        .unwrap();
    let order = OrderRepo::create(
        &pool,
        &CreateOrder {
            client_id: Some(client.id),
            product_name: "Pompe".to_string(),
            category: OrderCategory::Equipment,
            quantity: 2,
            total_amount: Some(150.0),
        },
    )
    .await
    .unwrap();

    assert_eq!(order.client_id, Some(client.id));
    assert_eq!(order.product_name, "Pompe");
    assert_eq!(order.quantity, 2);
    assert_eq!(order.total_amount, 150.0);
    assert_eq!(order.status, OrderStatus::Pending);
}

#[sqlx::test]
async fn zero_quantity_is_rejected(pool: PgPool) {
    let result = OrderRepo::create(
        &pool,
        &CreateOrder {
            quantity: 0,
            ..new_order(None, "Pompe")
        },
    )
    .await;
    assert!(result.is_err(), "quantity below 1 must violate the check constraint");
}

#[sqlx::test]
async fn order_status_update_has_no_side_effect(pool: PgPool) {
    let order = OrderRepo::create(&pool, &new_order(None, "Pompe")).await.unwrap();

    let delivered = OrderRepo::update_status(&pool, order.id, OrderStatus::Delivered)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.total_amount, order.total_amount);
    assert_eq!(delivered.created_at, order.created_at);
}

#[sqlx::test]
async fn order_list_joins_client_name(pool: PgPool) {
    let client = ClientRepo::create(&pool, &new_client("Coopérative Sud"))
        .await
        .unwrap();
    OrderRepo::create(&pool, &new_order(Some(client.id), "Pompe"))
        .await
        .unwrap();

    let listed = OrderRepo::list_with_clients(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].client_name.as_deref(), Some("Coopérative Sud"));
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn profile_lookup_by_username(pool: PgPool) {
    let created = ProfileRepo::create(
        &pool,
        &CreateProfile {
            username: "admin".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            full_name: Some("Administrateur".to_string()),
            role: "admin".to_string(),
        },
    )
    .await
    .unwrap();

    let found = ProfileRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .expect("profile should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, "admin");

    assert!(ProfileRepo::find_by_username(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
    assert_eq!(ProfileRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test]
async fn duplicate_username_is_rejected(pool: PgPool) {
    let input = CreateProfile {
        username: "admin".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        full_name: None,
        role: "employee".to_string(),
    };
    ProfileRepo::create(&pool, &input).await.unwrap();

    let result = ProfileRepo::create(&pool, &input).await;
    assert!(result.is_err(), "username carries a unique constraint");
}
