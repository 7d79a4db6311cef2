//! Generated artifacts, one [`GeneratedFile`](dynparam_core::GeneratedFile) each.

mod config_header;
mod config_module;
mod package_marker;
mod params_dox;
mod usage_dox;

pub use config_header::ConfigHeader;
pub use config_module::{ConfigModule, pycfgdata};
pub use package_marker::PackageMarker;
pub use params_dox::ParamsDox;
pub use usage_dox::UsageDox;
