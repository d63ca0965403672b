//! Record models exchanged with the business API

mod package;
mod plant;

pub use package::{
    PackageHistory, PackageInfo, PackageSplitRequest, PackageStatus, PackageValidation,
};
pub use plant::PlantInfo;
