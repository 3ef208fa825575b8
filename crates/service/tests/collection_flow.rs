//! End-to-end exercises of the data-access modules against the in-process
//! store: a whole-console flow across the four tables, the two-tier error
//! policy, and the stale-fetch guard.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Semaphore;
use uuid::Uuid;

use models::{CarChanges, JobStatus, NewCar, NewCrewMember, NewService, NewServicePackage, SizeClass, SizePricing};
use service::cars::{crew_names, Cars};
use service::crew::Crew;
use service::packages::{included_services, Packages};
use service::services::Services;
use store::{DataStore, MemoryStore, Order, StoreError};

fn wash_service() -> NewService {
    NewService {
        name: "Full Wash".into(),
        price: 10.0,
        description: None,
        pricing: Some(SizePricing { small: 8.0, medium: 10.0, large: 12.0, extra_large: 15.0 }),
    }
}

#[tokio::test]
async fn console_flow_across_all_four_tables() -> Result<(), anyhow::Error> {
    let db: Arc<MemoryStore> = Arc::new(MemoryStore::new());

    let services = Services::mount(db.clone()).await;
    let crew = Crew::mount(db.clone()).await;
    let packages = Packages::mount(db.clone()).await;
    let cars = Cars::mount(db.clone()).await;

    let wash = services.create(wash_service()).await?;
    let ana = crew
        .create(NewCrewMember {
            name: "Ana".into(),
            phone: None,
            role: Some("supervisor".into()),
            is_active: None,
        })
        .await?;
    let combo = packages
        .create(NewServicePackage {
            name: "Combo".into(),
            description: None,
            service_ids: Some(vec![wash.id]),
            pricing: None,
            is_active: Some(true),
        })
        .await?;

    let job = cars
        .create(NewCar {
            plate: "AB-123".into(),
            model: "Civic".into(),
            size: SizeClass::Large,
            service: wash.name.clone(),
            status: JobStatus::Pending,
            crew: Some(vec![ana.id]),
            services: Some(vec![wash.id]),
            phone: "555-0101".into(),
            total_cost: Some(wash.price_for(SizeClass::Large)),
        })
        .await?;
    assert_eq!(job.total_cost, Some(12.0));

    // Display-time id resolution across tables.
    assert_eq!(crew_names(&job, &crew.rows().await), ["Ana"]);
    let catalog = services.rows().await;
    assert_eq!(included_services(&combo, &catalog)[0].id, wash.id);

    let done = cars
        .update(job.id, CarChanges { status: Some(JobStatus::Completed), ..Default::default() })
        .await?;
    assert_eq!(done.status, JobStatus::Completed);

    packages.delete(combo.id).await?;
    assert!(packages.rows().await.is_empty());

    // A page opened later sees exactly what the store holds.
    let fresh = Cars::mount(db).await;
    assert_eq!(fresh.rows().await, vec![done]);
    Ok(())
}

#[tokio::test]
async fn write_failures_propagate_without_touching_module_state() -> Result<(), anyhow::Error> {
    let db = Arc::new(MemoryStore::new());
    let services = Services::mount(db.clone()).await;
    services.create(wash_service()).await?;

    db.fail_with("permission denied").await;
    let err = services.create(wash_service()).await.expect_err("store is failing");
    assert_eq!(err.message(), "Failed to add service: permission denied");

    let state = services.state().await;
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.error, None, "write failures never land in the error field");

    // A failure with no message falls back to the bare operation text.
    db.fail_with("").await;
    let err = services.create(wash_service()).await.expect_err("store is failing");
    assert_eq!(err.message(), "Failed to add service");
    Ok(())
}

/// Store wrapper that reads immediately but holds each select response until
/// the test releases a permit, so responses can be made to resolve after a
/// later mutation.
struct GatedStore {
    inner: Arc<MemoryStore>,
    gate: Semaphore,
}

#[async_trait]
impl DataStore for GatedStore {
    async fn select(&self, table: &str, order: Order) -> Result<Vec<Value>, StoreError> {
        let rows = self.inner.select(table, order).await;
        let permit = self.gate.acquire().await.expect("gate never closed");
        permit.forget();
        rows
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        self.inner.insert(table, row).await
    }

    async fn update_by_id(&self, table: &str, id: Uuid, patch: Value) -> Result<Value, StoreError> {
        self.inner.update_by_id(table, id, patch).await
    }

    async fn delete_by_id(&self, table: &str, id: Uuid) -> Result<(), StoreError> {
        self.inner.delete_by_id(table, id).await
    }
}

#[tokio::test]
async fn stale_fetch_response_does_not_resurrect_a_deleted_row() -> Result<(), anyhow::Error> {
    let inner = Arc::new(MemoryStore::new());
    let gated = Arc::new(GatedStore { inner: inner.clone(), gate: Semaphore::new(1) });

    let crew = Crew::mount(gated.clone()).await; // consumes the initial permit
    let keep = crew.create(NewCrewMember { name: "Ana".into(), phone: None, role: None, is_active: None }).await?;
    let gone = crew.create(NewCrewMember { name: "Leo".into(), phone: None, role: None, is_active: None }).await?;

    // Fetch reads both rows, then parks waiting for the gate.
    let in_flight = tokio::spawn({
        let crew = crew.clone();
        async move { crew.refetch().await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    crew.delete(gone.id).await?;

    // Release the parked response; it predates the delete and must be dropped.
    gated.gate.add_permits(1);
    in_flight.await?;

    let state = crew.state().await;
    assert_eq!(state.rows, vec![keep]);
    assert!(!state.loading);
    Ok(())
}
