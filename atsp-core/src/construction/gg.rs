#[cfg(test)]
#[path = "../../tests/unit/construction/gg_test.rs"]
mod gg_test;

use super::*;

/// A name prefix of flow variables block.
pub const FLOW_VARIABLES: &str = "f";

/// Builds Gavish-Graves single commodity flow formulation.
///
/// Along with arc variables, it uses continuous flow variables `f[i][j]` in `[0, n-1]`: the depot
/// (node 0) emits `n-1` units, each other node consumes exactly one unit, and flow can only use
/// selected arcs. A subtour which does not contain the depot cannot receive any flow.
pub fn build_gg_formulation(matrix: &CostMatrix) -> Formulation {
    let size = matrix.size();
    let capacity = (size - 1) as f64;

    let mut formulation = Formulation::new("ATSP_GG", size);
    let arcs = formulation.arcs();
    let flow = formulation.add_block(FLOW_VARIABLES, size, size, VariableDomain::Continuous, (0., capacity));

    add_travel_cost_objective(&mut formulation, matrix);
    add_assignment_constraints(&mut formulation);

    (1..size).for_each(|node| {
        formulation.add_constraint(
            format!("flow_to_0_{node}"),
            ConstraintKind::FlowReturn,
            LinearExpr::empty().with(flow.get(node, 0), 1.),
            Relation::Equal,
            0.,
        );
    });

    (1..size).for_each(|node| {
        let others = (0..size).filter(|&other| other != node);
        let expr = others
            .clone()
            .map(|other| (flow.get(other, node), 1.))
            .chain(others.map(|other| (flow.get(node, other), -1.)))
            .collect();

        formulation.add_constraint(format!("flow_{node}"), ConstraintKind::FlowConservation, expr, Relation::Equal, 1.);
    });

    formulation.add_constraint(
        "flow_0".to_string(),
        ConstraintKind::FlowSource,
        (1..size).map(|node| (flow.get(0, node), 1.)).collect(),
        Relation::Equal,
        capacity,
    );

    (0..size).for_each(|from| {
        (0..size).filter(|&to| to != from).for_each(|to| {
            formulation.add_constraint(
                format!("flow_link_{from}_{to}"),
                ConstraintKind::FlowLink,
                LinearExpr::empty().with(flow.get(from, to), 1.).with(arcs.get(from, to), -capacity),
                Relation::LessOrEqual,
                0.,
            );
        })
    });

    formulation
}
