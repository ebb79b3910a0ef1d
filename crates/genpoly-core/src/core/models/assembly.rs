use super::template::InteractionKind;
use crate::core::utils::geometry::rotation_from_axis_angle;
use nalgebra::{Isometry3, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Where and how one monomer is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub position: Point3<f64>,
    /// Direction of the preceding monomer, or the reference axis for the first one.
    pub previous_direction: Vector3<f64>,
    pub direction: Vector3<f64>,
    /// Accumulated rotation taking the reference axis onto `direction`.
    pub orientation: Rotation3<f64>,
    pub twist_degrees: f64,
    pub monomer: String,
}

impl Placement {
    /// Full rigid-body transform applied to the template monomer: twist about the
    /// reference `axis`, then reorientation, then translation to `position`.
    pub fn monomer_transform(&self, axis: &Vector3<f64>) -> Isometry3<f64> {
        let twist = rotation_from_axis_angle(axis, self.twist_degrees);
        let rotation = UnitQuaternion::from_rotation_matrix(&(self.orientation * twist));
        Isometry3::from_parts(Translation3::from(self.position.coords), rotation)
    }
}

/// One bond/angle/dihedral/improper, resolved to absolute monomer indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityRecord {
    pub name: String,
    pub kind: InteractionKind,
    pub type_label: String,
    pub members: Vec<(usize, String)>, // (monomer index, atom name) per slot
}

/// All records of one interaction kind for one chain. A section exists whenever at
/// least one template of its kind is configured, even if every record was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivitySection {
    pub kind: InteractionKind,
    pub records: Vec<ConnectivityRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainTopology {
    pub name: String,
    pub placements: Vec<Placement>,
    pub sections: Vec<ConnectivitySection>,
}

impl ChainTopology {
    pub fn records(&self, kind: InteractionKind) -> &[ConnectivityRecord] {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instantiation {
    pub slot: usize,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssemblyLayout {
    /// One chain, emitted as a flat object.
    Single(ChainTopology),
    /// Several chains, each defined as a nested object and then instantiated once.
    Multi {
        chains: Vec<ChainTopology>,
        instantiations: Vec<Instantiation>,
    },
}

/// The structured output handed to a topology writer.
#[derive(Debug, Clone, PartialEq)]
pub struct PolymerAssembly {
    pub header: String,
    pub polymer_name: String,
    pub inherits: Option<String>,
    pub reference_axis: Vector3<f64>,
    pub layout: AssemblyLayout,
}

impl PolymerAssembly {
    pub fn chains(&self) -> &[ChainTopology] {
        match &self.layout {
            AssemblyLayout::Single(chain) => std::slice::from_ref(chain),
            AssemblyLayout::Multi { chains, .. } => chains,
        }
    }
}
