use super::*;
use crate::helpers::*;

const TOLERANCE: f64 = 1e-6;

#[test]
fn can_parse_formulation_kind() {
    assert_eq!("MTZ".parse::<FormulationKind>(), Ok(FormulationKind::Mtz));
    assert_eq!(" gg ".parse::<FormulationKind>(), Ok(FormulationKind::Gg));
    assert_eq!(
        "dfj".parse::<FormulationKind>(),
        Err("unknown formulation: 'dfj', expected one of 'mtz' or 'gg'".into())
    );
}

#[test]
fn can_display_formulation_kind() {
    let names = FormulationKind::all().iter().map(|kind| kind.to_string()).collect::<Vec<_>>();

    assert_eq!(names, vec!["MTZ", "GG"]);
}

parameterized_test! {can_build_formulation_with_expected_size, (kind, size, expected_variables, expected_constraints), {
    can_build_formulation_with_expected_size_impl(kind, size, expected_variables, expected_constraints);
}}

can_build_formulation_with_expected_size! {
    case01_mtz_2: (FormulationKind::Mtz, 2, 6, 7),
    case02_mtz_4: (FormulationKind::Mtz, 4, 20, 19),
    case03_mtz_5: (FormulationKind::Mtz, 5, 30, 28),
    case04_gg_2: (FormulationKind::Gg, 2, 8, 11),
    case05_gg_4: (FormulationKind::Gg, 4, 32, 31),
    case06_gg_5: (FormulationKind::Gg, 5, 50, 44),
}

fn can_build_formulation_with_expected_size_impl(
    kind: FormulationKind,
    size: usize,
    expected_variables: usize,
    expected_constraints: usize,
) {
    let formulation = kind.build(&create_pseudo_random_matrix(size));

    assert_eq!(formulation.size(), size);
    assert_eq!(formulation.variables().len(), expected_variables);
    assert_eq!(formulation.constraints().len(), expected_constraints);
}

parameterized_test! {can_share_assignment_part, kind, {
    can_share_assignment_part_impl(kind);
}}

can_share_assignment_part! {
    case01_mtz: FormulationKind::Mtz,
    case02_gg: FormulationKind::Gg,
}

fn can_share_assignment_part_impl(kind: FormulationKind) {
    let matrix = create_four_asymmetric_matrix();
    let size = matrix.size();
    let formulation = build_formulation(kind, &matrix);
    let arcs = formulation.arcs();

    let objective = formulation.objective().terms();
    assert_eq!(objective.len(), size * size - size);
    assert!(objective.iter().all(|(var, _)| arcs.contains(*var)));
    (0..size).for_each(|from| {
        (0..size).filter(|&to| to != from).for_each(|to| {
            let coeff = objective.iter().find(|(var, _)| *var == arcs.get(from, to)).map(|(_, coeff)| *coeff);
            assert_eq!(coeff, Some(matrix.cost(from, to)));
        })
    });

    assert_eq!(formulation.count_constraints(ConstraintKind::NoSelfLoop), size);
    assert_eq!(formulation.constraints().iter().filter(|constraint| constraint.kind.is_degree()).count(), 2 * size);

    let out_1 = formulation.constraints().iter().find(|constraint| constraint.name == "out_1").expect("no out_1");
    assert_eq!(out_1.kind, ConstraintKind::OutDegree);
    assert_eq!(out_1.relation, Relation::Equal);
    assert_eq!(out_1.rhs, 1.);
    assert_eq!(out_1.expr.terms(), &[(arcs.get(1, 0), 1.), (arcs.get(1, 2), 1.), (arcs.get(1, 3), 1.)]);

    let in_1 = formulation.constraints().iter().find(|constraint| constraint.name == "in_1").expect("no in_1");
    assert_eq!(in_1.expr.terms(), &[(arcs.get(0, 1), 1.), (arcs.get(2, 1), 1.), (arcs.get(3, 1), 1.)]);
}

parameterized_test! {can_accept_every_tour, (kind, successors, expected_cost), {
    can_accept_every_tour_impl(kind, successors, expected_cost);
}}

can_accept_every_tour! {
    case01_mtz_optimal: (FormulationKind::Mtz, vec![2, 0, 3, 1], 21.),
    case02_mtz_identity_order: (FormulationKind::Mtz, vec![1, 2, 3, 0], 2. + 6. + 8. + 6.),
    case03_mtz_reversed: (FormulationKind::Mtz, vec![3, 0, 1, 2], 10. + 1. + 7. + 12.),
    case04_gg_optimal: (FormulationKind::Gg, vec![2, 0, 3, 1], 21.),
    case05_gg_identity_order: (FormulationKind::Gg, vec![1, 2, 3, 0], 2. + 6. + 8. + 6.),
    case06_gg_reversed: (FormulationKind::Gg, vec![3, 0, 1, 2], 10. + 1. + 7. + 12.),
}

fn can_accept_every_tour_impl(kind: FormulationKind, successors: Vec<usize>, expected_cost: f64) {
    let matrix = create_four_asymmetric_matrix();
    let formulation = kind.build(&matrix);
    let tour = Tour::from_successors(successors.as_slice()).expect("cannot create tour");

    let values = create_assignment(&formulation, successors.as_slice());

    assert!(formulation.is_feasible(values.as_slice(), TOLERANCE));
    assert_float_eq!(formulation.objective_value(values.as_slice()), expected_cost);
    assert_float_eq!(tour.cost(&matrix), expected_cost);
}

parameterized_test! {can_reject_subtours, (kind, successors), {
    can_reject_subtours_impl(kind, successors);
}}

can_reject_subtours! {
    case01_mtz_two_pairs: (FormulationKind::Mtz, vec![1, 0, 3, 2]),
    case02_mtz_pair_and_triangle: (FormulationKind::Mtz, vec![1, 0, 3, 4, 2]),
    case03_gg_two_pairs: (FormulationKind::Gg, vec![1, 0, 3, 2]),
    case04_gg_pair_and_triangle: (FormulationKind::Gg, vec![1, 0, 3, 4, 2]),
}

fn can_reject_subtours_impl(kind: FormulationKind, successors: Vec<usize>) {
    let formulation = kind.build(&create_pseudo_random_matrix(successors.len()));
    let values = create_assignment(&formulation, successors.as_slice());

    let violated = formulation.violated_constraints(values.as_slice(), TOLERANCE).collect::<Vec<_>>();

    assert!(!violated.is_empty());
    assert!(
        violated.iter().all(|constraint| !constraint.kind.is_degree() && constraint.kind != ConstraintKind::NoSelfLoop)
    );
}

parameterized_test! {can_expose_auxiliary_block_prefixes, (kind, expected_order, expected_flow), {
    let formulation = kind.build(&create_four_asymmetric_matrix());

    assert_eq!(formulation.block(ORDER_VARIABLES).map(|block| block.len()), expected_order);
    assert_eq!(formulation.block(FLOW_VARIABLES).map(|block| block.len()), expected_flow);
}}

can_expose_auxiliary_block_prefixes! {
    case01_mtz: (FormulationKind::Mtz, Some(4), None),
    case02_gg: (FormulationKind::Gg, None, Some(16)),
}
