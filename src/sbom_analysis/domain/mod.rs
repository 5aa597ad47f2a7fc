/// Domain model - purls, SBOM components and Tidelift catalog records
pub mod bom;
pub mod catalog;
pub mod purl;
pub mod violation;

pub use bom::{BomComponent, BomDocument, LIBRARY_COMPONENT_TYPE};
pub use catalog::{
    Lookup, MissingPackage, MissingRelease, PackageDetail, PackageLookup, RecommendationFlag,
    ReleaseDetail, ReleaseLookup,
};
pub use purl::{Ecosystem, Purl};
pub use violation::{Violation, ViolationCategory, ViolationDetails};
