//! Entity types for the car-wash console.
//!
//! Each type mirrors one table in the remote data store. Ids and timestamps
//! are generated by the store, so create inputs (`New*`) omit them and
//! partial-update inputs (`*Changes`) carry every field as `Option`; absent
//! fields are not serialized and leave the stored column untouched.

pub mod car;
pub mod crew_member;
pub mod service;
pub mod service_package;

pub use car::{Car, CarChanges, JobStatus, NewCar, SizeClass};
pub use crew_member::{CrewMember, CrewMemberChanges, NewCrewMember};
pub use service::{NewService, Service, ServiceChanges, SizePricing};
pub use service_package::{NewServicePackage, ServicePackage, ServicePackageChanges};
