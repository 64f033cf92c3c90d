mod combine;
mod dependents;
mod enrich;
mod locate;
mod own_package;
mod relevant;

pub use combine::combine;
pub use dependents::DependencyImpactFilter;
pub use enrich::CommitFileEnricher;
pub use locate::{OwnerResolver, PackageLocation, locate_owner_package, locate_package};
pub use own_package::OwnPackageFilter;
pub use relevant::{FilterOutcome, RelevantCommitsOperation};
