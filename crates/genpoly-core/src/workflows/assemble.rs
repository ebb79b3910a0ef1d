use crate::core::models::assembly::{
    AssemblyLayout, ChainTopology, Instantiation, Placement, PolymerAssembly,
};
use crate::core::models::chain::Chain;
use crate::core::models::template::{ConnectionTemplate, InteractionKind};
use crate::core::utils::geometry::rotation_to_align;
use crate::engine::config::PolymerConfig;
use crate::engine::connectivity;
use crate::engine::directions::DirectionField;
use crate::engine::error::{DirectionFieldError, EngineError};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::segmenter;
use nalgebra::{Point3, Rotation3};
use tracing::{debug, info, instrument, warn};

/// Builds the complete polymer assembly for `coordinates` under `config`.
///
/// The coordinates are split into chains at the configured cut points; every chain
/// gets its own monomer placements and connectivity sections. A single chain is
/// returned as a flat object, several chains as nested definitions plus one
/// instantiation each.
///
/// # Errors
///
/// Returns [`EngineError::Config`] for invalid settings, [`EngineError::Input`] for
/// too few coordinates or bad cut points, and [`EngineError::DegenerateGeometry`]
/// when a monomer's neighbors coincide.
#[instrument(skip_all, name = "assembly_workflow")]
pub fn run(
    coordinates: &[Point3<f64>],
    config: &PolymerConfig,
    reporter: &ProgressReporter,
) -> Result<PolymerAssembly, EngineError> {
    config.validate()?;

    // === Phase 1: Split the coordinates into chains ===
    reporter.report(Progress::PhaseStart {
        name: "Segmenting chains",
    });
    info!(
        "Building '{}' from {} coordinate(s) ({} topology, {} template(s)).",
        config.polymer_name,
        coordinates.len(),
        config.topology,
        config.templates.len()
    );
    let names = resolve_monomer_names(config, coordinates.len(), reporter);
    let chains = segmenter::segment(coordinates, &names, &config.cuts)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Place monomers and emit connectivity per chain ===
    reporter.report(Progress::PhaseStart {
        name: "Assembling chains",
    });
    reporter.report(Progress::TaskStart {
        total_steps: chains.len() as u64,
    });
    let multi = chains.len() > 1;
    let mut topologies = Vec::with_capacity(chains.len());
    for chain in &chains {
        let name = if multi {
            format!("{}{}", config.polymer_name, chain.ordinal + 1)
        } else {
            config.polymer_name.clone()
        };
        let topology = assemble_chain(chain, name, config)?;
        reporter.report(Progress::ChainAssembled {
            chain: chain.ordinal,
            monomers: chain.len(),
            records: topology.sections.iter().map(|s| s.records.len()).sum(),
        });
        reporter.report(Progress::TaskIncrement);
        topologies.push(topology);
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let layout = match <[ChainTopology; 1]>::try_from(topologies) {
        Ok([single]) => AssemblyLayout::Single(single),
        Err(topologies) => {
            let instantiations = topologies
                .iter()
                .enumerate()
                .map(|(slot, t)| Instantiation {
                    slot,
                    definition: t.name.clone(),
                })
                .collect();
            AssemblyLayout::Multi {
                chains: topologies,
                instantiations,
            }
        }
    };

    info!("Assembly complete: {} chain(s).", chains.len());
    Ok(PolymerAssembly {
        header: config.header.clone(),
        polymer_name: config.polymer_name.clone(),
        inherits: config.inherits.clone(),
        reference_axis: config.reference_axis,
        layout,
    })
}

/// Places the monomers of one chain and emits its connectivity sections.
pub fn assemble_chain(
    chain: &Chain,
    name: String,
    config: &PolymerConfig,
) -> Result<ChainTopology, EngineError> {
    debug!(
        "Assembling chain {} ({} monomers starting at {}).",
        chain.ordinal,
        chain.len(),
        chain.start
    );
    let field = DirectionField::build(
        chain.coordinates(),
        config.topology.is_closed(),
        config.reference_axis,
    )
    .map_err(|e| match e {
        DirectionFieldError::Input(e) => EngineError::Input(e),
        DirectionFieldError::Degenerate(source) => EngineError::DegenerateGeometry {
            chain: chain.ordinal,
            source,
        },
    })?;

    let placements = place_monomers(chain, &field, config.helix_twist_degrees);

    let connect_ends = config.topology.connects_ends();
    let sections = InteractionKind::ALL
        .iter()
        .filter_map(|&kind| {
            let templates: Vec<&ConnectionTemplate> = config.templates_of(kind).collect();
            (!templates.is_empty())
                .then(|| connectivity::emit(kind, &templates, chain.len(), connect_ends))
        })
        .collect();

    Ok(ChainTopology {
        name,
        placements,
        sections,
    })
}

fn place_monomers(chain: &Chain, field: &DirectionField, twist_per_monomer: f64) -> Vec<Placement> {
    let mut orientation = Rotation3::identity();
    chain
        .coordinates()
        .iter()
        .zip(chain.monomer_names())
        .enumerate()
        .map(|(i, (position, monomer))| {
            let previous_direction = field.previous(i);
            let direction = field.direction(i).into_inner();
            orientation = rotation_to_align(&previous_direction, &direction) * orientation;
            Placement {
                index: i,
                position: *position,
                previous_direction,
                direction,
                orientation,
                twist_degrees: twist_per_monomer * i as f64,
                monomer: monomer.clone(),
            }
        })
        .collect()
}

/// One monomer name per coordinate of the whole input, not per chain, so each chain
/// of a cut assembly takes the slice of the sequence covering its own monomers.
fn resolve_monomer_names(
    config: &PolymerConfig,
    total: usize,
    reporter: &ProgressReporter,
) -> Vec<String> {
    match &config.sequence {
        Some(sequence) if sequence.len() == total => sequence.clone(),
        Some(sequence) => {
            let message = format!(
                "Sequence has {} name(s) but there are {} coordinates; using '{}' for every monomer.",
                sequence.len(),
                total,
                config.monomer_name
            );
            warn!("{}", message);
            reporter.report(Progress::Message(message));
            vec![config.monomer_name.clone(); total]
        }
        None => vec![config.monomer_name.clone(); total],
    }
}
