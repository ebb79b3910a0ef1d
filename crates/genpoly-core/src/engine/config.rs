use crate::core::models::template::{ConnectionTemplate, InteractionKind, TemplateError};
use nalgebra::Vector3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid connection template: {0}")]
    Template(#[from] TemplateError),

    #[error("Reference axis must have nonzero length")]
    ZeroReferenceAxis,

    #[error("Invalid topology mode '{0}' (expected \"yes\", \"no\", or \"connected\")")]
    InvalidTopologyMode(String),

    #[error("Parameter '{0}' cannot be empty")]
    EmptyParameter(&'static str),
}

/// How the ends of each chain are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopologyMode {
    /// Linear chain: end directions use one-sided differences and any connection
    /// that would wrap past an end is dropped.
    #[default]
    Open,
    /// Linear geometry, but connections wrap around so the last monomer bonds to the
    /// first.
    Connected,
    /// Closed ring: directions wrap around as well as connections.
    Circular,
}

impl TopologyMode {
    /// Whether connectivity may wrap from the last monomer back to the first.
    pub fn connects_ends(self) -> bool {
        matches!(self, Self::Connected | Self::Circular)
    }

    /// Whether direction vectors treat the chain as a ring.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Circular)
    }
}

impl FromStr for TopologyMode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" | "open" => Ok(Self::Open),
            "connected" => Ok(Self::Connected),
            "yes" | "circular" => Ok(Self::Circular),
            _ => Err(ConfigError::InvalidTopologyMode(s.to_string())),
        }
    }
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Open => "no",
                Self::Connected => "connected",
                Self::Circular => "yes",
            }
        )
    }
}

pub const DEFAULT_HEADER: &str = "import \"forcefield.lt\"";
pub const DEFAULT_MONOMER_NAME: &str = "Monomer";
pub const DEFAULT_POLYMER_NAME: &str = "Polymer";

/// Settings for one polymer build. Built once, then read-only for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct PolymerConfig {
    /// Direction the template monomer faces before it is reoriented.
    pub reference_axis: Vector3<f64>,
    pub topology: TopologyMode,
    /// Twist about the reference axis added per monomer, in degrees.
    pub helix_twist_degrees: f64,
    pub monomer_name: String,
    pub polymer_name: String,
    pub inherits: Option<String>,
    pub header: String,
    pub sequence: Option<Vec<String>>,
    pub cuts: Vec<usize>,
    pub templates: Vec<ConnectionTemplate>,
}

impl PolymerConfig {
    pub fn templates_of(&self, kind: InteractionKind) -> impl Iterator<Item = &ConnectionTemplate> {
        self.templates.iter().filter(move |t| t.kind() == kind)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_axis.norm() == 0.0 || !self.reference_axis.iter().all(|c| c.is_finite())
        {
            return Err(ConfigError::ZeroReferenceAxis);
        }
        if self.monomer_name.trim().is_empty() {
            return Err(ConfigError::EmptyParameter("monomer_name"));
        }
        if self.polymer_name.trim().is_empty() {
            return Err(ConfigError::EmptyParameter("polymer_name"));
        }
        Ok(())
    }
}

impl Default for PolymerConfig {
    fn default() -> Self {
        Self {
            reference_axis: Vector3::x(),
            topology: TopologyMode::default(),
            helix_twist_degrees: 0.0,
            monomer_name: DEFAULT_MONOMER_NAME.to_string(),
            polymer_name: DEFAULT_POLYMER_NAME.to_string(),
            inherits: None,
            header: DEFAULT_HEADER.to_string(),
            sequence: None,
            cuts: Vec::new(),
            templates: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct PolymerConfigBuilder {
    reference_axis: Option<Vector3<f64>>,
    topology: Option<TopologyMode>,
    helix_twist_degrees: Option<f64>,
    monomer_name: Option<String>,
    polymer_name: Option<String>,
    inherits: Option<String>,
    header: Option<String>,
    sequence: Option<Vec<String>>,
    cuts: Vec<usize>,
    templates: Vec<ConnectionTemplate>,
}

impl PolymerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_axis(mut self, axis: Vector3<f64>) -> Self {
        self.reference_axis = Some(axis);
        self
    }
    pub fn topology(mut self, mode: TopologyMode) -> Self {
        self.topology = Some(mode);
        self
    }
    pub fn helix_twist_degrees(mut self, degrees: f64) -> Self {
        self.helix_twist_degrees = Some(degrees);
        self
    }
    pub fn monomer_name(mut self, name: impl Into<String>) -> Self {
        self.monomer_name = Some(name.into());
        self
    }
    pub fn polymer_name(mut self, name: impl Into<String>) -> Self {
        self.polymer_name = Some(name.into());
        self
    }
    /// Parent object the generated polymer inherits from. A leading `inherits `
    /// keyword is accepted and stripped.
    pub fn inherits(mut self, parent: impl Into<String>) -> Self {
        let parent = parent.into();
        let parent = parent
            .strip_prefix("inherits ")
            .map(str::to_string)
            .unwrap_or(parent);
        self.inherits = Some(parent.trim().to_string()).filter(|p| !p.is_empty());
        self
    }
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
    pub fn sequence(mut self, names: Vec<String>) -> Self {
        self.sequence = Some(names);
        self
    }
    pub fn cuts(mut self, cuts: Vec<usize>) -> Self {
        self.cuts = cuts;
        self
    }
    pub fn template(mut self, template: ConnectionTemplate) -> Self {
        self.templates.push(template);
        self
    }
    pub fn templates(mut self, templates: impl IntoIterator<Item = ConnectionTemplate>) -> Self {
        self.templates.extend(templates);
        self
    }

    pub fn build(self) -> Result<PolymerConfig, ConfigError> {
        let defaults = PolymerConfig::default();
        let config = PolymerConfig {
            reference_axis: self.reference_axis.unwrap_or(defaults.reference_axis),
            topology: self.topology.unwrap_or(defaults.topology),
            helix_twist_degrees: self
                .helix_twist_degrees
                .unwrap_or(defaults.helix_twist_degrees),
            monomer_name: self.monomer_name.unwrap_or(defaults.monomer_name),
            polymer_name: self.polymer_name.unwrap_or(defaults.polymer_name),
            inherits: self.inherits,
            header: self.header.unwrap_or(defaults.header),
            sequence: self.sequence,
            cuts: self.cuts,
            templates: self.templates,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_mode_parses_all_three_states() {
        assert_eq!("no".parse::<TopologyMode>().unwrap(), TopologyMode::Open);
        assert_eq!("YES".parse::<TopologyMode>().unwrap(), TopologyMode::Circular);
        assert_eq!(
            "connected".parse::<TopologyMode>().unwrap(),
            TopologyMode::Connected
        );
        assert_eq!(
            "maybe".parse::<TopologyMode>(),
            Err(ConfigError::InvalidTopologyMode("maybe".to_string()))
        );
    }

    #[test]
    fn topology_mode_flags_are_distinct() {
        assert!(!TopologyMode::Open.connects_ends());
        assert!(!TopologyMode::Open.is_closed());
        assert!(TopologyMode::Connected.connects_ends());
        assert!(!TopologyMode::Connected.is_closed());
        assert!(TopologyMode::Circular.connects_ends());
        assert!(TopologyMode::Circular.is_closed());
    }

    #[test]
    fn builder_applies_defaults() {
        let config = PolymerConfigBuilder::new().build().unwrap();
        assert_eq!(config, PolymerConfig::default());
        assert_eq!(config.reference_axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(config.header, DEFAULT_HEADER);
        assert_eq!(config.topology, TopologyMode::Open);
    }

    #[test]
    fn builder_strips_inherits_keyword() {
        let config = PolymerConfigBuilder::new()
            .inherits("inherits OPLSAA")
            .build()
            .unwrap();
        assert_eq!(config.inherits.as_deref(), Some("OPLSAA"));

        let config = PolymerConfigBuilder::new().inherits("OPLSAA").build().unwrap();
        assert_eq!(config.inherits.as_deref(), Some("OPLSAA"));
    }

    #[test]
    fn builder_rejects_zero_axis() {
        let result = PolymerConfigBuilder::new()
            .reference_axis(Vector3::zeros())
            .build();
        assert_eq!(result, Err(ConfigError::ZeroReferenceAxis));
    }

    #[test]
    fn builder_rejects_empty_names() {
        let result = PolymerConfigBuilder::new().polymer_name("  ").build();
        assert_eq!(result, Err(ConfigError::EmptyParameter("polymer_name")));
    }

    #[test]
    fn templates_of_filters_by_kind_preserving_order() {
        let bond = |label: &str| {
            ConnectionTemplate::new(
                InteractionKind::Bond,
                label,
                vec!["a".into(), "b".into()],
                &[0, 1],
            )
            .unwrap()
        };
        let angle = ConnectionTemplate::new(
            InteractionKind::Angle,
            "A",
            vec!["a".into(), "b".into(), "c".into()],
            &[0, 1, 2],
        )
        .unwrap();
        let config = PolymerConfigBuilder::new()
            .template(bond("B1"))
            .template(angle)
            .template(bond("B2"))
            .build()
            .unwrap();

        let labels: Vec<_> = config
            .templates_of(InteractionKind::Bond)
            .map(|t| t.type_label())
            .collect();
        assert_eq!(labels, vec!["B1", "B2"]);
        assert_eq!(config.templates_of(InteractionKind::Improper).count(), 0);
    }
}
