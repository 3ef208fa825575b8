//! Service catalog: the `services` table, fetched alphabetically.

use models::{NewService, Service, ServiceChanges};
use store::Order;
use uuid::Uuid;

use crate::collection::Collection;
use crate::entity::{Entity, InsertAt};

impl Entity for Service {
    type New = NewService;
    type Changes = ServiceChanges;

    const TABLE: &'static str = "services";
    const LABEL: &'static str = "service";
    const ORDER: Order = Order::asc("name");
    const INSERT_AT: InsertAt = InsertAt::Head;

    fn id(&self) -> Uuid {
        self.id
    }
}

pub type Services = Collection<Service>;
