#[cfg(test)]
#[path = "../../tests/unit/construction/mtz_test.rs"]
mod mtz_test;

use super::*;

/// A name prefix of order variables block.
pub const ORDER_VARIABLES: &str = "u";

/// Builds Miller-Tucker-Zemlin formulation.
///
/// Along with arc variables, it uses continuous order variables `u[i]` in `[0, n-1]` which
/// encode the position of node `i` in the tour. Subtours are eliminated by
/// `u[i] - u[j] + (n-1) * x[i][j] <= n-2` for all `i != j` in `[1, n)`, with `u[0] = 0`.
pub fn build_mtz_formulation(matrix: &CostMatrix) -> Formulation {
    let size = matrix.size();
    let big_m = (size - 1) as f64;

    let mut formulation = Formulation::new("ATSP_MTZ", size);
    let arcs = formulation.arcs();
    let order = formulation.add_block(ORDER_VARIABLES, size, 1, VariableDomain::Continuous, (0., big_m));

    add_travel_cost_objective(&mut formulation, matrix);
    add_assignment_constraints(&mut formulation);

    formulation.add_constraint(
        "u_0_fixed".to_string(),
        ConstraintKind::RankAnchor,
        LinearExpr::empty().with(order.at(0), 1.),
        Relation::Equal,
        0.,
    );

    (1..size).for_each(|from| {
        (1..size).filter(|&to| to != from).for_each(|to| {
            let expr =
                LinearExpr::empty().with(order.at(from), 1.).with(order.at(to), -1.).with(arcs.get(from, to), big_m);

            formulation.add_constraint(
                format!("mtz_{from}_{to}"),
                ConstraintKind::RankOrder,
                expr,
                Relation::LessOrEqual,
                big_m - 1.,
            );
        })
    });

    formulation
}
