//! Integration tests for project creation through the query client
//!
//! **Coverage:**
//! - Create "Water Wells" in a sector: request body, sector path, toasts
//! - Cached project and sector lists are refetched after a successful create
//! - Backend refusal raises the global toast followed by the keyed error toast
//! - Invalid forms never reach the gateway

mod support;

use std::sync::Arc;

use baitulmal_core::forms::ProjectForm;
use baitulmal_core::{ProjectService, SectorService, ToastVariant};
use baitulmal_domain::{
    ApiErrorResponse, ApiFailure, BaitulMalError, EntityMeta, Project, QueryParams, Sector,
};
use support::gateways::{MockProjectGateway, MockSectorGateway};

fn water_wells() -> ProjectForm {
    ProjectForm {
        name: "Water Wells".into(),
        description: "  ".into(),
        sector_id: "sector-7".into(),
        assigned_coordinator_ids: vec!["u1".into(), "u2".into()],
    }
}

fn gateway() -> MockProjectGateway {
    MockProjectGateway {
        projects: Arc::new(vec![Project {
            entity: EntityMeta::with_id("p-1"),
            name: "Iftar 2024".into(),
            ..Project::default()
        }]),
        ..MockProjectGateway::default()
    }
}

#[tokio::test]
async fn create_posts_to_sector_and_announces_success() {
    let gateway = gateway();
    let (query, notifier) = support::query_client();
    let service = ProjectService::new(Arc::new(gateway.clone()), query);

    service.create(water_wells()).await.unwrap();

    let created = gateway.created();
    assert_eq!(created.len(), 1);
    let (sector_id, request) = &created[0];
    assert_eq!(sector_id, "sector-7");
    assert_eq!(request.name, "Water Wells");
    assert_eq!(request.description, None);
    assert_eq!(request.assigned_coordinator_ids, vec!["u1".to_string(), "u2".to_string()]);

    assert_eq!(notifier.titles(), vec!["PROJECT_CREATED_SUCCESS_TITLE".to_string()]);
}

#[tokio::test]
async fn create_refreshes_cached_project_lists() {
    let gateway = gateway();
    let (query, _notifier) = support::query_client();
    let service = ProjectService::new(Arc::new(gateway.clone()), query);
    let params = QueryParams::new();

    service.list(&params).await.unwrap();
    service.list(&params).await.unwrap();
    assert_eq!(gateway.list_count(), 1);

    service.create(water_wells()).await.unwrap();
    service.list(&params).await.unwrap();
    assert_eq!(gateway.list_count(), 2);
}

#[tokio::test]
async fn create_refreshes_cached_sector_lists() {
    let projects = gateway();
    let sectors = MockSectorGateway {
        sectors: Arc::new(vec![Sector {
            entity: EntityMeta::with_id("sector-7"),
            name: "Humanitarian".into(),
            ..Sector::default()
        }]),
        ..MockSectorGateway::default()
    };
    let (query, notifier) = support::query_client();
    let project_service = ProjectService::new(Arc::new(projects.clone()), query.clone());
    let sector_service = SectorService::new(Arc::new(sectors.clone()), query);
    let params = QueryParams::new();

    sector_service.list(&params).await.unwrap();
    project_service.list(&params).await.unwrap();
    sector_service.list(&params).await.unwrap();
    assert_eq!(sectors.list_count(), 1);

    project_service.create(water_wells()).await.unwrap();

    let refreshed = sector_service.list(&params).await.unwrap();
    assert_eq!(sectors.list_count(), 2);
    assert_eq!(refreshed.items[0].name, "Humanitarian");
    project_service.list(&params).await.unwrap();
    assert_eq!(projects.list_count(), 2);
    assert_eq!(notifier.titles(), vec!["PROJECT_CREATED_SUCCESS_TITLE".to_string()]);
}

#[tokio::test]
async fn refusal_raises_global_then_keyed_toast() {
    let gateway = gateway();
    gateway.failure.arm(BaitulMalError::Api(ApiFailure::from_response(
        409,
        Some(ApiErrorResponse {
            message: Some("Project name already exists".into()),
            ..ApiErrorResponse::default()
        }),
    )));
    let (query, notifier) = support::query_client();
    let service = ProjectService::new(Arc::new(gateway.clone()), query);

    let err = service.create(water_wells()).await.unwrap_err();
    assert_eq!(err.backend_message(), Some("Project name already exists"));

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].title, None);
    assert_eq!(toasts[0].description, "Project name already exists");
    assert_eq!(toasts[1].title.as_deref(), Some("PROJECT_CREATED_ERROR_TITLE"));
    assert!(toasts.iter().all(|toast| toast.variant == ToastVariant::Destructive));
    assert!(gateway.created().is_empty());
}

#[tokio::test]
async fn short_name_is_rejected_locally() {
    let gateway = gateway();
    let (query, notifier) = support::query_client();
    let service = ProjectService::new(Arc::new(gateway.clone()), query);

    let form = ProjectForm { name: "Wa".into(), ..water_wells() };
    let err = service.create(form).await.unwrap_err();

    assert!(matches!(err, BaitulMalError::Validation(_)));
    assert!(gateway.created().is_empty());
    assert!(notifier.toasts().is_empty());
}
