use crate::core::models::assembly::{ConnectivityRecord, ConnectivitySection};
use crate::core::models::template::{ConnectionTemplate, InteractionKind};
use crate::core::utils::periodic::wrap_forward;
use tracing::{debug, trace};

/// Generated name of the record produced by template `template` (zero-based among
/// the `template_count` templates of its kind) at monomer `monomer`.
///
/// With a single template of a kind the name is `genpoly_<tag><monomer+1>`; with
/// several, `genpoly_<tag><t>_<monomer+1>_<t>` where `t` is the 1-based template
/// number.
pub fn record_name(
    kind: InteractionKind,
    template: usize,
    template_count: usize,
    monomer: usize,
) -> String {
    let tag = kind.name_tag();
    if template_count > 1 {
        format!(
            "genpoly_{}{}_{}_{}",
            tag,
            template + 1,
            monomer + 1,
            template + 1
        )
    } else {
        format!("genpoly_{}{}", tag, monomer + 1)
    }
}

/// Applies every template of one `kind` at every monomer of an `n`-monomer chain.
///
/// Records come out ordered by monomer index, then by template order. A record
/// that reaches past either end of the chain is kept (wrapped around) only when
/// `connect_ends` is set; otherwise it is dropped as a whole.
pub fn emit(
    kind: InteractionKind,
    templates: &[&ConnectionTemplate],
    n: usize,
    connect_ends: bool,
) -> ConnectivitySection {
    let mut records = Vec::with_capacity(n * templates.len());
    let mut skipped = 0usize;

    for i in 0..n {
        for (b, template) in templates.iter().enumerate() {
            debug_assert_eq!(template.kind(), kind);

            let mut crosses_end = false;
            let members: Vec<(usize, String)> = template
                .offsets()
                .iter()
                .zip(template.atoms())
                .map(|(&offset, atom)| {
                    let resolved = wrap_forward(i, offset, n);
                    crosses_end |= resolved.wrapped;
                    (resolved.index, atom.clone())
                })
                .collect();

            if crosses_end && !connect_ends {
                trace!(monomer = i, template = b, "Skipping {} across chain end.", kind);
                skipped += 1;
                continue;
            }

            records.push(ConnectivityRecord {
                name: record_name(kind, b, templates.len(), i),
                kind,
                type_label: template.type_label().to_string(),
                members,
            });
        }
    }

    debug!(
        "Emitted {} {} record(s), skipped {} crossing a chain end.",
        records.len(),
        kind,
        skipped
    );
    ConnectivitySection { kind, records }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(kind: InteractionKind, label: &str, offsets: &[i64]) -> ConnectionTemplate {
        let atoms = (0..kind.arity()).map(|k| format!("a{}", k)).collect();
        ConnectionTemplate::new(kind, label, atoms, offsets).unwrap()
    }

    fn indices(record: &ConnectivityRecord) -> Vec<usize> {
        record.members.iter().map(|(i, _)| *i).collect()
    }

    #[test]
    fn open_chain_drops_bond_past_the_last_monomer() {
        let bond = template(InteractionKind::Bond, "B", &[0, 1]);
        let section = emit(InteractionKind::Bond, &[&bond], 3, false);

        assert_eq!(section.records.len(), 2);
        assert_eq!(indices(&section.records[0]), vec![0, 1]);
        assert_eq!(indices(&section.records[1]), vec![1, 2]);
        assert_eq!(section.records[0].name, "genpoly_b1");
        assert_eq!(section.records[1].name, "genpoly_b2");
    }

    #[test]
    fn connected_chain_wraps_last_bond_to_first_monomer() {
        let bond = template(InteractionKind::Bond, "B", &[0, 1]);
        let section = emit(InteractionKind::Bond, &[&bond], 3, true);

        assert_eq!(section.records.len(), 3);
        assert_eq!(indices(&section.records[2]), vec![2, 0]);
        assert_eq!(section.records[2].name, "genpoly_b3");
    }

    #[test]
    fn any_wrapped_member_discards_the_whole_record() {
        let angle = template(InteractionKind::Angle, "A", &[0, 1, 2]);
        let section = emit(InteractionKind::Angle, &[&angle], 4, false);

        let all: Vec<_> = section.records.iter().map(indices).collect();
        assert_eq!(all, vec![vec![0, 1, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn records_are_ordered_by_monomer_then_template() {
        let b1 = template(InteractionKind::Bond, "First", &[0, 1]);
        let b2 = template(InteractionKind::Bond, "Second", &[0, 0]);
        let section = emit(InteractionKind::Bond, &[&b1, &b2], 3, false);

        let summary: Vec<_> = section
            .records
            .iter()
            .map(|r| (r.name.as_str(), r.type_label.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("genpoly_b1_1_1", "First"),
                ("genpoly_b2_1_2", "Second"),
                ("genpoly_b1_2_1", "First"),
                ("genpoly_b2_2_2", "Second"),
                ("genpoly_b2_3_2", "Second"),
            ]
        );
    }

    #[test]
    fn members_pair_indices_with_template_atom_names() {
        let dihedral = ConnectionTemplate::new(
            InteractionKind::Dihedral,
            "D",
            vec!["ca".into(), "r".into(), "r".into(), "ca".into()],
            &[0, 0, 1, 1],
        )
        .unwrap();
        let section = emit(InteractionKind::Dihedral, &[&dihedral], 2, true);

        assert_eq!(section.records.len(), 2);
        assert_eq!(
            section.records[1].members,
            vec![
                (1, "ca".to_string()),
                (1, "r".to_string()),
                (0, "r".to_string()),
                (0, "ca".to_string()),
            ]
        );
        assert_eq!(section.records[1].kind, InteractionKind::Dihedral);
    }

    #[test]
    fn no_templates_yield_an_empty_section() {
        let section = emit(InteractionKind::Improper, &[], 10, true);
        assert_eq!(section.kind, InteractionKind::Improper);
        assert!(section.records.is_empty());
    }

    #[test]
    fn record_name_formats() {
        assert_eq!(record_name(InteractionKind::Angle, 0, 1, 4), "genpoly_a5");
        assert_eq!(record_name(InteractionKind::Improper, 2, 3, 0), "genpoly_i3_1_3");
    }

    #[test]
    fn huge_offsets_wrap_to_the_correct_partner() {
        let bond = template(InteractionKind::Bond, "Far", &[0, i64::MAX]);

        let connected = emit(InteractionKind::Bond, &[&bond], 3, true);
        let partners: Vec<usize> = connected.records.iter().map(|r| indices(r)[1]).collect();
        assert_eq!(partners, vec![1, 2, 0]);

        let open = emit(InteractionKind::Bond, &[&bond], 3, false);
        assert!(open.records.is_empty());
    }
}
