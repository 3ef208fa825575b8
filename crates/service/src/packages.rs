//! Service packages: the `service_packages` table, fetched alphabetically.

use models::{NewServicePackage, Service, ServicePackage, ServicePackageChanges};
use store::Order;
use uuid::Uuid;

use crate::collection::Collection;
use crate::entity::{Entity, InsertAt};

impl Entity for ServicePackage {
    type New = NewServicePackage;
    type Changes = ServicePackageChanges;

    const TABLE: &'static str = "service_packages";
    const LABEL: &'static str = "service package";
    const ORDER: Order = Order::asc("name");
    const INSERT_AT: InsertAt = InsertAt::Tail;

    fn id(&self) -> Uuid {
        self.id
    }
}

pub type Packages = Collection<ServicePackage>;

/// Resolve a bundle's contents against the service catalog, omitting ids
/// that no longer match a catalog row.
pub fn included_services<'a>(pkg: &ServicePackage, catalog: &'a [Service]) -> Vec<&'a Service> {
    pkg.service_ids
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|id| catalog.iter().find(|s| s.id == *id))
        .collect()
}
