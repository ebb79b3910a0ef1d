use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use genpoly::core::io::raw;
use genpoly::core::models::template::{ConnectionTemplate, InteractionKind, TemplateSpec};
use genpoly::core::templates::library::TemplateLibrary;
use genpoly::engine::config::{ConfigError, PolymerConfig, PolymerConfigBuilder, TopologyMode};
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum CircularSetting {
    Flag(bool),
    Mode(String),
}

impl CircularSetting {
    fn into_mode(self) -> std::result::Result<TopologyMode, ConfigError> {
        match self {
            Self::Flag(true) => Ok(TopologyMode::Circular),
            Self::Flag(false) => Ok(TopologyMode::Open),
            Self::Mode(s) => s.parse(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialPolymerSection {
    name: Option<String>,
    monomer_name: Option<String>,
    inherits: Option<String>,
    header: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGeometrySection {
    axis: Option<[f64; 3]>,
    helix: Option<f64>,
    circular: Option<CircularSetting>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputSection {
    sequence: Option<PathBuf>,
    cuts: Option<PathBuf>,
}

/// Settings read from a TOML configuration file, before CLI flags are layered on.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialPolymerConfig {
    #[serde(default)]
    polymer: PartialPolymerSection,
    #[serde(default)]
    geometry: PartialGeometrySection,
    #[serde(default)]
    input: PartialInputSection,
    #[serde(default)]
    templates: Vec<TemplateSpec>,
    /// Directory that relative `[input]` paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

impl PartialPolymerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Combines file settings with CLI flags and `--set` overrides into the final
    /// configuration. `--set` wins over flags, flags win over the file.
    pub fn merge_with_cli(self, args: &BuildArgs) -> Result<PolymerConfig> {
        let overrides = Self::from_set_values(&args.set_values)?;
        let mut builder = PolymerConfigBuilder::new();

        let cli_axis = args
            .axis
            .as_deref()
            .map(parser::parse_axis)
            .transpose()
            .map_err(|e| CliError::Argument(e.to_string()))?;
        if let Some(axis) = overrides
            .geometry
            .axis
            .map(Vector3::from)
            .or(cli_axis)
            .or(self.geometry.axis.map(Vector3::from))
        {
            builder = builder.reference_axis(axis);
        }

        if let Some(helix) = overrides.geometry.helix.or(args.helix).or(self.geometry.helix) {
            builder = builder.helix_twist_degrees(helix);
        }

        let cli_mode = args
            .circular
            .as_deref()
            .map(str::parse::<TopologyMode>)
            .transpose()?;
        let override_mode = overrides.geometry.circular.map(CircularSetting::into_mode).transpose()?;
        let file_mode = self.geometry.circular.map(CircularSetting::into_mode).transpose()?;
        if let Some(mode) = override_mode.or(cli_mode).or(file_mode) {
            builder = builder.topology(mode);
        }

        let pick = |over: Option<String>, cli: &Option<String>, file: Option<String>| {
            over.or_else(|| cli.clone()).or(file)
        };
        if let Some(name) = pick(overrides.polymer.name, &args.polymer_name, self.polymer.name) {
            builder = builder.polymer_name(name);
        }
        if let Some(name) = pick(
            overrides.polymer.monomer_name,
            &args.monomer_name,
            self.polymer.monomer_name,
        ) {
            builder = builder.monomer_name(name);
        }
        if let Some(parent) = pick(
            overrides.polymer.inherits,
            &args.inherits,
            self.polymer.inherits,
        ) {
            builder = builder.inherits(parent);
        }
        if let Some(header) = pick(overrides.polymer.header, &args.header, self.polymer.header) {
            builder = builder.header(header);
        }

        let base_dir = &self.base_dir;
        let resolve = |over: Option<PathBuf>, cli: &Option<PathBuf>, file: Option<PathBuf>| {
            over.or_else(|| cli.clone())
                .or_else(|| file.map(|p| base_dir.join(p)))
        };
        if let Some(path) = resolve(overrides.input.sequence, &args.sequence, self.input.sequence) {
            info!("Reading monomer sequence from {:?}", path);
            let names =
                raw::read_sequence_from_path(&path).map_err(|e| CliError::parsing(&path, e))?;
            builder = builder.sequence(names);
        }
        if let Some(path) = resolve(overrides.input.cuts, &args.cuts, self.input.cuts) {
            info!("Reading chain cut points from {:?}", path);
            let cuts = raw::read_cuts_from_path(&path).map_err(|e| CliError::parsing(&path, e))?;
            builder = builder.cuts(cuts);
        }

        let file_templates = self
            .templates
            .into_iter()
            .map(ConnectionTemplate::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(ConfigError::from)?;
        builder = builder.templates(file_templates);
        for path in &args.templates {
            info!("Loading connection templates from {:?}", path);
            builder = builder.templates(TemplateLibrary::load(path)?.into_templates());
        }
        builder = builder.templates(Self::cli_templates(args)?);

        Ok(builder.build()?)
    }

    fn cli_templates(args: &BuildArgs) -> Result<Vec<ConnectionTemplate>> {
        let groups = [
            (InteractionKind::Bond, &args.bonds, 3),
            (InteractionKind::Angle, &args.angles, 7),
            (InteractionKind::Dihedral, &args.dihedrals, 9),
            (InteractionKind::Improper, &args.impropers, 9),
        ];
        groups
            .into_iter()
            .flat_map(|(kind, values, width)| {
                values
                    .chunks(width)
                    .map(move |chunk| ConnectionTemplate::from_args(kind, chunk))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CliError::InvalidConfig(e.into()))
    }

    fn from_set_values(set_values: &[String]) -> Result<Self> {
        let mut overrides = Self::default();
        for kv_pair in set_values {
            let (key, value) =
                parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

            match key {
                "geometry.helix" => {
                    overrides.geometry.helix = Some(value.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value))
                    })?);
                }
                "geometry.circular" => {
                    overrides.geometry.circular = Some(CircularSetting::Mode(value.to_string()));
                }
                "geometry.axis" => {
                    let axis = parser::parse_axis(value)
                        .map_err(|e| CliError::Config(format!("{}: {}", key, e)))?;
                    overrides.geometry.axis = Some([axis.x, axis.y, axis.z]);
                }
                "polymer.name" => overrides.polymer.name = Some(value.to_string()),
                "polymer.monomer-name" => overrides.polymer.monomer_name = Some(value.to_string()),
                "polymer.inherits" => overrides.polymer.inherits = Some(value.to_string()),
                "polymer.header" => overrides.polymer.header = Some(value.to_string()),
                "input.sequence" => overrides.input.sequence = Some(PathBuf::from(value)),
                "input.cuts" => overrides.input.cuts = Some(PathBuf::from(value)),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(overrides)
    }
}
