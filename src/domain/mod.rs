//! Domain records for tuned cases and build manifests.

pub mod case_name;
pub mod error;
pub mod manifest;
pub mod tuned_case;
pub mod value;

pub use case_name::CaseName;
pub use error::AppError;
pub use manifest::{BuildManifest, PythonPackages};
pub use tuned_case::TunedCase;
pub use value::ParamValue;
