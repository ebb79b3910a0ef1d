use crate::core::io::traits::TopologyWriter;
use crate::core::models::assembly::{
    AssemblyLayout, ChainTopology, ConnectivitySection, Placement, PolymerAssembly,
};
use nalgebra::Vector3;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LtError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

const OBJECT_PREAMBLE: &str = "


create_var {$mol}
# The line above forces all monomer subunits to share the same molecule-ID
# (Note: Setting the molecule-ID number is optional and is usually ignored.)



# ------------ List of Monomers: ------------
#
# (Note: move(), rot(), and rotvv() commands control the position
#  of each monomer.  (See the moltemplate manual for an explanation
#  of what they do.)  Commands enclosed in push() are cumulative 
#  and remain in effect until removed by pop().)



";

/// Shortest representation that round-trips, always with a decimal point
/// (`1.0`, `0.0`, `0.7071067811865475`).
fn real(x: f64) -> String {
    format!("{:?}", x)
}

fn triple(v: &[f64]) -> String {
    v.iter().map(|&x| real(x)).collect::<Vec<_>>().join(",")
}

/// Renders a [`PolymerAssembly`] as a moltemplate (`.lt`) object definition.
pub struct LtFile;

impl LtFile {
    fn object_name(name: &str, inherits: Option<&str>) -> String {
        match inherits {
            Some(parent) => format!("{} inherits {}", name, parent),
            None => name.to_string(),
        }
    }

    fn write_placement(
        writer: &mut impl Write,
        placement: &Placement,
        axis: &Vector3<f64>,
    ) -> io::Result<()> {
        writeln!(writer, "pop()")?;
        writeln!(
            writer,
            "push(rotvv({},{}))",
            triple(placement.previous_direction.as_slice()),
            triple(placement.direction.as_slice())
        )?;
        writeln!(writer, "push(move({}))", triple(placement.position.coords.as_slice()))?;
        writeln!(
            writer,
            "mon[{}] = new {}.rot({},{})",
            placement.index,
            placement.monomer,
            real(placement.twist_degrees),
            triple(axis.as_slice())
        )
    }

    fn write_section(writer: &mut impl Write, section: &ConnectivitySection) -> io::Result<()> {
        let keyword = section.kind.keyword();
        let title = section.kind.section_name();
        write!(writer, "\n\nwrite(\"{}\") {{\n", title)?;
        for record in &section.records {
            write!(
                writer,
                "  ${}:{} @{}:{}",
                keyword, record.name, keyword, record.type_label
            )?;
            for (monomer, atom) in &record.members {
                write!(writer, " $atom:mon[{}]/{}", monomer, atom)?;
            }
            writeln!(writer)?;
        }
        write!(writer, "}}  # write(\"{}\") {{...\n\n\n", title)
    }

    fn write_chain(
        writer: &mut impl Write,
        object_name: &str,
        chain: &ChainTopology,
        axis: &Vector3<f64>,
    ) -> io::Result<()> {
        writeln!(writer, "{} {{", object_name)?;
        writer.write_all(OBJECT_PREAMBLE.as_bytes())?;
        writeln!(writer, "push(move(0,0,0))")?;
        for placement in &chain.placements {
            Self::write_placement(writer, placement, axis)?;
        }
        for section in &chain.sections {
            Self::write_section(writer, section)?;
        }
        write!(writer, "}}  # {}\n\n\n\n", object_name)
    }
}

impl TopologyWriter for LtFile {
    type Error = LtError;

    fn write_to(assembly: &PolymerAssembly, writer: &mut impl Write) -> Result<(), Self::Error> {
        let inherits = assembly.inherits.as_deref();
        let axis = &assembly.reference_axis;
        write!(writer, "{}\n\n\n", assembly.header)?;

        match &assembly.layout {
            AssemblyLayout::Single(chain) => {
                let name = Self::object_name(&chain.name, inherits);
                Self::write_chain(writer, &name, chain, axis)?;
            }
            AssemblyLayout::Multi {
                chains,
                instantiations,
            } => {
                write!(writer, "{} {{\n\n", assembly.polymer_name)?;
                write!(writer, "# Definitions of individual polymers to follow\n\n")?;
                for chain in chains {
                    let name = Self::object_name(&chain.name, inherits);
                    Self::write_chain(writer, &name, chain, axis)?;
                }
                write!(writer, "\n\n# Now instantiate all the polymers (once each)\n\n")?;
                for inst in instantiations {
                    writeln!(writer, "polymers[{}] = new {}", inst.slot, inst.definition)?;
                }
                write!(writer, "\n\n}}  # {}\n\n", assembly.polymer_name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::assembly::{ConnectivityRecord, Instantiation};
    use crate::core::models::template::InteractionKind;
    use nalgebra::{Point3, Rotation3};

    fn placement(index: usize, x: f64) -> Placement {
        Placement {
            index,
            position: Point3::new(x, 0.0, 0.0),
            previous_direction: Vector3::x(),
            direction: Vector3::x(),
            orientation: Rotation3::identity(),
            twist_degrees: 0.0,
            monomer: "Mon".to_string(),
        }
    }

    fn bond(name: &str, i: usize, j: usize) -> ConnectivityRecord {
        ConnectivityRecord {
            name: name.to_string(),
            kind: InteractionKind::Bond,
            type_label: "Backbone".to_string(),
            members: vec![(i, "ca".to_string()), (j, "ca".to_string())],
        }
    }

    fn chain(name: &str, sections: Vec<ConnectivitySection>) -> ChainTopology {
        ChainTopology {
            name: name.to_string(),
            placements: vec![placement(0, 0.0), placement(1, 1.0)],
            sections,
        }
    }

    fn render(assembly: &PolymerAssembly) -> String {
        let mut out = Vec::new();
        LtFile::write_to(assembly, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_chain_renders_placements_and_bonds() {
        let assembly = PolymerAssembly {
            header: "import \"mon.lt\"".to_string(),
            polymer_name: "Polymer".to_string(),
            inherits: None,
            reference_axis: Vector3::x(),
            layout: AssemblyLayout::Single(chain(
                "Polymer",
                vec![ConnectivitySection {
                    kind: InteractionKind::Bond,
                    records: vec![bond("genpoly_b1", 0, 1)],
                }],
            )),
        };

        let text = render(&assembly);

        assert!(text.starts_with("import \"mon.lt\"\n\n\nPolymer {\n\n\n\ncreate_var {$mol}\n"));
        assert!(text.contains(
            "push(move(0,0,0))\npop()\npush(rotvv(1.0,0.0,0.0,1.0,0.0,0.0))\npush(move(0.0,0.0,0.0))\nmon[0] = new Mon.rot(0.0,1.0,0.0,0.0)\n"
        ));
        assert!(text.contains("mon[1] = new Mon.rot(0.0,1.0,0.0,0.0)\n"));
        assert!(text.contains(
            "\n\nwrite(\"Data Bonds\") {\n  $bond:genpoly_b1 @bond:Backbone $atom:mon[0]/ca $atom:mon[1]/ca\n}  # write(\"Data Bonds\") {...\n\n\n"
        ));
        assert!(text.ends_with("}  # Polymer\n\n\n\n"));
    }

    #[test]
    fn section_is_written_even_when_every_record_was_skipped() {
        let assembly = PolymerAssembly {
            header: String::new(),
            polymer_name: "P".to_string(),
            inherits: None,
            reference_axis: Vector3::x(),
            layout: AssemblyLayout::Single(chain(
                "P",
                vec![ConnectivitySection {
                    kind: InteractionKind::Dihedral,
                    records: Vec::new(),
                }],
            )),
        };

        let text = render(&assembly);

        assert!(text.contains(
            "write(\"Data Dihedrals\") {\n}  # write(\"Data Dihedrals\") {...\n"
        ));
        assert!(!text.contains("Data Bonds"));
    }

    #[test]
    fn multi_chain_nests_definitions_and_instantiates_each_once() {
        let assembly = PolymerAssembly {
            header: "import \"mon.lt\"".to_string(),
            polymer_name: "Polymer".to_string(),
            inherits: Some("ForceField".to_string()),
            reference_axis: Vector3::x(),
            layout: AssemblyLayout::Multi {
                chains: vec![chain("Polymer1", vec![]), chain("Polymer2", vec![])],
                instantiations: vec![
                    Instantiation {
                        slot: 0,
                        definition: "Polymer1".to_string(),
                    },
                    Instantiation {
                        slot: 1,
                        definition: "Polymer2".to_string(),
                    },
                ],
            },
        };

        let text = render(&assembly);

        assert!(text.contains(
            "Polymer {\n\n# Definitions of individual polymers to follow\n\nPolymer1 inherits ForceField {\n"
        ));
        assert!(text.contains("}  # Polymer1 inherits ForceField\n\n\n\n"));
        assert!(text.contains("Polymer2 inherits ForceField {\n"));
        assert!(text.contains(
            "# Now instantiate all the polymers (once each)\n\npolymers[0] = new Polymer1\npolymers[1] = new Polymer2\n"
        ));
        assert!(text.ends_with("\n\n}  # Polymer\n\n"));
        let first = text.find("Polymer1 inherits").unwrap();
        let second = text.find("Polymer2 inherits").unwrap();
        assert!(first < second);
    }

    #[test]
    fn write_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("polymer.lt");
        let assembly = PolymerAssembly {
            header: "# test".to_string(),
            polymer_name: "P".to_string(),
            inherits: None,
            reference_axis: Vector3::x(),
            layout: AssemblyLayout::Single(chain("P", vec![])),
        };

        LtFile::write_to_path(&assembly, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render(&assembly));
    }
}
