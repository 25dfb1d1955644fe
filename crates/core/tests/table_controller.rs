//! Integration tests for table controllers bound to real services
//!
//! **Coverage:**
//! - Admins can list disabled accounts; the flag reaches the backend
//! - Non-admins never send `IncludeDeleted`
//! - Debounced search resets to the first page (paused clock)
//! - Row actions follow account state

mod support;

use std::sync::Arc;

use baitulmal_core::table::configs::users_table;
use baitulmal_core::{TableController, UserService};
use baitulmal_domain::{EntityMeta, User, UserRole};
use support::gateways::MockUserGateway;

fn user(id: &str, name: &str, deleted: bool) -> User {
    User {
        entity: EntityMeta { is_deleted: deleted, ..EntityMeta::with_id(id) },
        name: name.into(),
        last_name: "Begović".into(),
        email: format!("{}@baitulmal.ba", name.to_lowercase()),
        role: Some(UserRole::Contributor),
        ..User::default()
    }
}

fn controller(viewer: UserRole) -> (TableController<User>, MockUserGateway) {
    let gateway = MockUserGateway::new(vec![
        user("u-1", "Amina", false),
        user("u-2", "Emir", true),
        user("u-3", "Lejla", false),
    ]);
    let (query, _notifier) = support::query_client();
    let service = Arc::new(UserService::new(Arc::new(gateway.clone()), query.clone()));
    (TableController::new(service, query, users_table(None, Some(viewer))), gateway)
}

#[tokio::test]
async fn admin_sees_disabled_accounts_on_request() {
    let (controller, gateway) = controller(UserRole::Admin);

    let view = controller.refresh().await;
    assert!(view.show_include_deleted);
    assert_eq!(view.rows().len(), 2);

    let view = controller.set_include_deleted(true).await;
    assert!(view.include_deleted);
    assert_eq!(view.rows().len(), 3);
    let emir = &view.rows()[1];
    assert_eq!(emir.cells[3], "Disabled");
    assert_eq!(emir.actions, vec!["EDIT_USER", "ENABLE_USER"]);
    assert_eq!(view.rows()[0].actions, vec!["EDIT_USER", "DELETE_USER"]);

    let requested = gateway.requested();
    assert_eq!(requested.last().and_then(|params| params.include_deleted), Some(true));
}

#[tokio::test]
async fn contributors_cannot_include_deleted() {
    let (controller, gateway) = controller(UserRole::Contributor);

    controller.refresh().await;
    let view = controller.set_include_deleted(true).await;

    assert!(!view.show_include_deleted);
    assert_eq!(gateway.requested().len(), 1);
    assert!(gateway.requested().iter().all(|params| params.include_deleted.is_none()));
}

#[tokio::test]
async fn losing_admin_role_drops_the_flag() {
    let (controller, gateway) = controller(UserRole::Admin);
    controller.set_include_deleted(true).await;

    let view = controller.set_viewer_role(Some(UserRole::FinanceLead)).await;

    assert_eq!(view.rows().len(), 2);
    assert_eq!(gateway.requested().last().unwrap().include_deleted, None);
}

#[tokio::test(start_paused = true)]
async fn search_returns_to_first_page() {
    let (controller, gateway) = controller(UserRole::Admin);
    controller.go_to_page(2).await;
    assert_eq!(controller.params().page_number, Some(3));

    let view = controller.search("lejla").await.unwrap();

    assert_eq!(view.pagination.page_index, 0);
    let last = gateway.requested().last().cloned().unwrap();
    assert_eq!(last.search_term.as_deref(), Some("lejla"));
    assert_eq!(last.page_number, Some(1));
    assert_eq!(last.filters.get("Role"), None);
}
