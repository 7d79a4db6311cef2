use dynparam_manifest::GeneratorConfig;

/// What is being generated: the owning package, the node that mounts the
/// configuration, and the configuration name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub package: String,
    pub node: String,
    pub name: String,
}

impl Target {
    pub fn new(package: impl Into<String>, node: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            node: node.into(),
            name: name.into(),
        }
    }

    /// Base name shared by every artifact, e.g. `PlannerConfig`.
    pub fn config_name(&self) -> String {
        format!("{}Config", self.name)
    }
}

impl From<&GeneratorConfig> for Target {
    fn from(config: &GeneratorConfig) -> Self {
        Self::new(&config.package, &config.node, &config.name)
    }
}
