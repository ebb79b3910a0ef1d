use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four classes of connectivity a polymer template can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Bond,
    Angle,
    Dihedral,
    Improper,
}

impl InteractionKind {
    /// Emission order of the connectivity sections.
    pub const ALL: [InteractionKind; 4] = [
        InteractionKind::Bond,
        InteractionKind::Angle,
        InteractionKind::Dihedral,
        InteractionKind::Improper,
    ];

    /// Number of atoms taking part in one interaction of this kind.
    pub fn arity(self) -> usize {
        match self {
            Self::Bond => 2,
            Self::Angle => 3,
            Self::Dihedral | Self::Improper => 4,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Bond => "bond",
            Self::Angle => "angle",
            Self::Dihedral => "dihedral",
            Self::Improper => "improper",
        }
    }

    /// Single-letter tag used in generated record names (`genpoly_b`, `genpoly_a`, ...).
    pub fn name_tag(self) -> char {
        match self {
            Self::Bond => 'b',
            Self::Angle => 'a',
            Self::Dihedral => 'd',
            Self::Improper => 'i',
        }
    }

    pub fn section_name(self) -> &'static str {
        match self {
            Self::Bond => "Data Bonds",
            Self::Angle => "Data Angles",
            Self::Dihedral => "Data Dihedrals",
            Self::Improper => "Data Impropers",
        }
    }
}

impl FromStr for InteractionKind {
    type Err = TemplateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bond" => Ok(Self::Bond),
            "angle" => Ok(Self::Angle),
            "dihedral" => Ok(Self::Dihedral),
            "improper" => Ok(Self::Improper),
            _ => Err(TemplateError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("{kind} template expects {expected} atom names, found {found}")]
    AtomCount {
        kind: InteractionKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind} template expects {expected} index offsets, found {found}")]
    OffsetCount {
        kind: InteractionKind,
        expected: usize,
        found: usize,
    },
    #[error("{kind} index offsets must be >= 0 (found {offset})")]
    NegativeOffset { kind: InteractionKind, offset: i64 },
    #[error("invalid {kind} index offset '{value}': expected an integer")]
    InvalidOffset { kind: InteractionKind, value: String },
    #[error("-{kind} expects {expected} arguments, found {found}")]
    ArgumentCount {
        kind: InteractionKind,
        expected: &'static str,
        found: usize,
    },
    #[error("{kind} template has an empty type label")]
    EmptyType { kind: InteractionKind },
    #[error("unknown interaction kind '{0}' (expected bond, angle, dihedral or improper)")]
    UnknownKind(String),
}

/// One class of bond/angle/dihedral/improper, applied once per monomer.
///
/// Slot `k` names the atom `atoms[k]` belonging to the monomer `offsets[k]` positions
/// after the monomer the template is applied at. A template is validated on
/// construction, so its atom and offset lists always match its kind's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTemplate {
    kind: InteractionKind,
    type_label: String,
    atoms: Vec<String>,
    offsets: Vec<usize>,
}

impl ConnectionTemplate {
    pub fn new(
        kind: InteractionKind,
        type_label: impl Into<String>,
        atoms: Vec<String>,
        offsets: &[i64],
    ) -> Result<Self, TemplateError> {
        let type_label = type_label.into();
        if type_label.trim().is_empty() {
            return Err(TemplateError::EmptyType { kind });
        }
        if atoms.len() != kind.arity() {
            return Err(TemplateError::AtomCount {
                kind,
                expected: kind.arity(),
                found: atoms.len(),
            });
        }
        if offsets.len() != kind.arity() {
            return Err(TemplateError::OffsetCount {
                kind,
                expected: kind.arity(),
                found: offsets.len(),
            });
        }
        let offsets = offsets
            .iter()
            .map(|&offset| {
                usize::try_from(offset).map_err(|_| TemplateError::NegativeOffset { kind, offset })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kind,
            type_label,
            atoms,
            offsets,
        })
    }

    /// Builds a template from the positional arguments of a `-bond`/`-angle`/... flag:
    /// `TYPE ATOM... OFFSET...`.
    ///
    /// Bonds take no offsets on the command line; they always join monomer `i` to
    /// `i + 1`. Bonds with other offsets come from template files.
    pub fn from_args(kind: InteractionKind, args: &[String]) -> Result<Self, TemplateError> {
        let arity = kind.arity();
        let offsets = match (kind, args.len()) {
            (InteractionKind::Bond, n) if n == 1 + arity => vec![0, 1],
            (InteractionKind::Angle | InteractionKind::Dihedral | InteractionKind::Improper, n)
                if n == 1 + 2 * arity => args[1 + arity..]
                .iter()
                .map(|value| {
                    value.parse::<i64>().map_err(|_| TemplateError::InvalidOffset {
                        kind,
                        value: value.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            (_, found) => {
                let expected = match kind {
                    InteractionKind::Bond => "3",
                    InteractionKind::Angle => "7",
                    InteractionKind::Dihedral | InteractionKind::Improper => "9",
                };
                return Err(TemplateError::ArgumentCount {
                    kind,
                    expected,
                    found,
                });
            }
        };

        Self::new(kind, &args[0], args[1..=arity].to_vec(), &offsets)
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

/// Serialized form of a [`ConnectionTemplate`] as it appears in TOML files.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplateSpec {
    pub kind: InteractionKind,
    #[serde(rename = "type")]
    pub type_label: String,
    pub atoms: Vec<String>,
    pub offsets: Option<Vec<i64>>,
}

impl TryFrom<TemplateSpec> for ConnectionTemplate {
    type Error = TemplateError;

    fn try_from(spec: TemplateSpec) -> Result<Self, Self::Error> {
        let offsets = match (spec.offsets, spec.kind) {
            (Some(offsets), _) => offsets,
            (None, InteractionKind::Bond) => vec![0, 1],
            (None, _) => Vec::new(),
        };
        Self::new(spec.kind, spec.type_label, spec.atoms, &offsets)
    }
}
