//! Vehicle jobs: the `cars` table.
//!
//! Fetched newest first; new jobs go to the head of the mirror so they show
//! up at the top of the board immediately.

use models::{Car, CarChanges, CrewMember, NewCar};
use store::Order;
use uuid::Uuid;

use crate::collection::Collection;
use crate::entity::{Entity, InsertAt};

impl Entity for Car {
    type New = NewCar;
    type Changes = CarChanges;

    const TABLE: &'static str = "cars";
    const LABEL: &'static str = "car";
    const ORDER: Order = Order::desc("created_at");
    const INSERT_AT: InsertAt = InsertAt::Head;

    fn id(&self) -> Uuid {
        self.id
    }
}

pub type Cars = Collection<Car>;

/// Resolve a job's assigned crew ids to display names. Ids that match no
/// roster entry are silently dropped; the store enforces no integrity on
/// these lists.
pub fn crew_names(car: &Car, roster: &[CrewMember]) -> Vec<String> {
    car.crew
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|id| roster.iter().find(|m| m.id == *id))
        .map(|m| m.name.clone())
        .collect()
}
