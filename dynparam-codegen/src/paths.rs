//! Output paths, relative to the package root.
//!
//! This module centralizes directory and file paths used by the rendering
//! passes and the obsolete-file cleanup.

use std::path::PathBuf;

use crate::Target;

/// Documentation fragments directory.
pub const DOX_DIR: &str = "dox";

/// Python package marker file name.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// `cfg/cpp/<package>/<Name>Config.h`
pub fn config_header(target: &Target) -> PathBuf {
    PathBuf::from("cfg")
        .join("cpp")
        .join(&target.package)
        .join(format!("{}.h", target.config_name()))
}

/// `src/<package>/cfg`
pub fn python_cfg_dir(target: &Target) -> PathBuf {
    PathBuf::from("src").join(&target.package).join("cfg")
}

/// `src/<package>/cfg/<Name>Config.py`
pub fn config_module(target: &Target) -> PathBuf {
    python_cfg_dir(target).join(format!("{}.py", target.config_name()))
}

/// `src/<package>/cfg/__init__.py`
pub fn package_marker(target: &Target) -> PathBuf {
    python_cfg_dir(target).join(PACKAGE_MARKER)
}

/// `dox/<Name>Config.dox`
pub fn params_dox(target: &Target) -> PathBuf {
    PathBuf::from(DOX_DIR).join(format!("{}.dox", target.config_name()))
}

/// `dox/<Name>Config-usage.dox`
pub fn usage_dox(target: &Target) -> PathBuf {
    PathBuf::from(DOX_DIR).join(format!("{}-usage.dox", target.config_name()))
}

/// Files written by the message/service based scheme this generator
/// replaced. They are deleted on every run.
pub fn obsolete(target: &Target) -> [PathBuf; 6] {
    let msg = target.config_name();
    let msg_cpp = PathBuf::from("msg").join("cpp").join(&target.package);
    let srv_cpp = PathBuf::from("srv").join("cpp").join(&target.package);

    [
        PathBuf::from("msg").join(format!("{}.msg", msg)),
        msg_cpp.join(format!("{}.h", msg)),
        PathBuf::from("srv").join(format!("Get{}.srv", msg)),
        srv_cpp.join(format!("Get{}.h", msg)),
        PathBuf::from("srv").join(format!("Set{}.srv", msg)),
        srv_cpp.join(format!("Set{}.h", msg)),
    ]
}
