//! Crew roster: the `crew_members` table, fetched alphabetically.

use models::{CrewMember, CrewMemberChanges, NewCrewMember};
use store::Order;
use uuid::Uuid;

use crate::collection::Collection;
use crate::entity::{Entity, InsertAt};

impl Entity for CrewMember {
    type New = NewCrewMember;
    type Changes = CrewMemberChanges;

    const TABLE: &'static str = "crew_members";
    const LABEL: &'static str = "crew member";
    const ORDER: Order = Order::asc("name");
    const INSERT_AT: InsertAt = InsertAt::Tail;

    fn id(&self) -> Uuid {
        self.id
    }
}

pub type Crew = Collection<CrewMember>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use store::MemoryStore;

    fn new_member(name: &str, role: &str) -> NewCrewMember {
        NewCrewMember {
            name: name.into(),
            phone: Some("555-0199".into()),
            role: Some(role.into()),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn create_appends_to_the_roster() -> Result<(), anyhow::Error> {
        let db = Arc::new(MemoryStore::new());
        let crew = Crew::mount(db).await;

        crew.create(new_member("Zoe", "worker")).await?;
        let last = crew.create(new_member("Ana", "supervisor")).await?;

        let rows = crew.rows().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], last, "insertion order preserved, no re-sort");
        assert!(last.is_active(), "active by default");
        Ok(())
    }

    #[tokio::test]
    async fn deactivating_a_member_refreshes_updated_at() -> Result<(), anyhow::Error> {
        let db = Arc::new(MemoryStore::new());
        let crew = Crew::mount(db).await;
        let created = crew.create(new_member("Ana", "manager")).await?;

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = crew
            .update(created.id, CrewMemberChanges { is_active: Some(false), ..Default::default() })
            .await?;

        assert_eq!(updated.is_active, Some(false));
        assert!(!updated.is_active());
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(crew.rows().await, vec![updated]);
        Ok(())
    }

    #[tokio::test]
    async fn refetch_is_idempotent_against_a_stable_store() -> Result<(), anyhow::Error> {
        let db = Arc::new(MemoryStore::new());
        let crew = Crew::mount(db).await;
        crew.create(new_member("Ana", "worker")).await?;
        crew.create(new_member("Leo", "worker")).await?;

        crew.refetch().await;
        let first = crew.rows().await;
        crew.refetch().await;
        let second = crew.rows().await;
        assert_eq!(first, second);
        Ok(())
    }
}
