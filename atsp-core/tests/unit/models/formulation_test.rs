use super::*;

fn create_test_formulation() -> (Formulation, VariableBlock) {
    let mut formulation = Formulation::new("test", 3);
    let order = formulation.add_block("u", 3, 1, VariableDomain::Continuous, (0., 2.));

    (formulation, order)
}

#[test]
fn can_add_arc_variables_on_creation() {
    let formulation = Formulation::new("test", 3);
    let arcs = formulation.arcs();

    assert_eq!(formulation.name(), "test");
    assert_eq!(formulation.size(), 3);
    assert_eq!(formulation.variables().len(), 9);
    assert_eq!(arcs.len(), 9);
    assert_eq!(formulation.block(ARC_VARIABLES), Some(arcs));

    let x_1_2 = formulation.variable(arcs.get(1, 2));
    assert_eq!(x_1_2.name, "x_1_2");
    assert_eq!(x_1_2.domain, VariableDomain::Binary);
    assert_eq!((x_1_2.lower, x_1_2.upper), (0., 1.));
}

#[test]
fn can_add_vector_block() {
    let (formulation, order) = create_test_formulation();

    assert_eq!(formulation.variables().len(), 12);
    assert_eq!(order.len(), 3);
    assert!(!order.is_empty());
    assert_eq!(order.at(0).index(), 9);
    assert_eq!(formulation.variable(order.at(2)).name, "u_2");
    assert!(order.contains(order.at(1)));
    assert!(!order.contains(formulation.arcs().get(2, 2)));
    assert_eq!(order.ids().map(|id| id.index()).collect::<Vec<_>>(), vec![9, 10, 11]);
    assert!(formulation.block("f").is_none());
}

#[test]
fn can_evaluate_expression_and_constraint() {
    let (mut formulation, order) = create_test_formulation();
    let expr: LinearExpr = vec![(order.at(0), 1.), (order.at(1), -2.)].into_iter().collect();
    formulation.add_constraint("c".to_string(), ConstraintKind::RankOrder, expr, Relation::LessOrEqual, 1.);

    let mut values = vec![0.; 12];
    values[order.at(0).index()] = 2.;
    values[order.at(1).index()] = 0.5;

    let constraint = &formulation.constraints()[0];
    assert_eq!(constraint.expr.evaluate(values.as_slice()), 1.);
    assert!(constraint.is_satisfied(values.as_slice(), 1e-6));

    values[order.at(1).index()] = 0.4;
    assert!(!constraint.is_satisfied(values.as_slice(), 1e-6));
    assert_eq!(formulation.violated_constraints(values.as_slice(), 1e-6).count(), 1);
    assert_eq!(formulation.count_constraints(ConstraintKind::RankOrder), 1);
    assert_eq!(formulation.count_constraints(ConstraintKind::FlowLink), 0);
}

parameterized_test! {can_check_relation, (relation, lhs, expected), {
    can_check_relation_impl(relation, lhs, expected);
}}

can_check_relation! {
    case01_eq_holds: (Relation::Equal, 1., true),
    case02_eq_fails: (Relation::Equal, 1.1, false),
    case03_le_holds: (Relation::LessOrEqual, 0.5, true),
    case04_le_fails: (Relation::LessOrEqual, 1.5, false),
    case05_ge_holds: (Relation::GreaterOrEqual, 1.5, true),
    case06_ge_fails: (Relation::GreaterOrEqual, 0.5, false),
}

fn can_check_relation_impl(relation: Relation, lhs: f64, expected: bool) {
    let formulation = Formulation::new("test", 2);
    let var = formulation.arcs().get(0, 1);
    let constraint = Constraint {
        name: "c".to_string(),
        kind: ConstraintKind::OutDegree,
        expr: LinearExpr::empty().with(var, 1.),
        relation,
        rhs: 1.,
    };

    let mut values = vec![0.; 4];
    values[var.index()] = lhs;

    assert_eq!(constraint.is_satisfied(values.as_slice(), 1e-6), expected);
}

#[test]
fn can_check_feasibility_of_variable_domains() {
    let (formulation, order) = create_test_formulation();
    let mut values = vec![0.; 12];

    assert!(formulation.is_feasible(values.as_slice(), 1e-6));

    values[order.at(1).index()] = 1.5;
    assert!(formulation.is_feasible(values.as_slice(), 1e-6));

    values[order.at(1).index()] = 2.5;
    assert!(!formulation.is_feasible(values.as_slice(), 1e-6));

    values[order.at(1).index()] = 1.;
    values[formulation.arcs().get(0, 1).index()] = 0.5;
    assert!(!formulation.is_feasible(values.as_slice(), 1e-6));

    assert!(!formulation.is_feasible(&values[..11], 1e-6));
}

#[test]
fn can_evaluate_objective() {
    let mut formulation = Formulation::new("test", 2);
    let arcs = formulation.arcs();
    formulation.set_objective(LinearExpr::empty().with(arcs.get(0, 1), 3.).with(arcs.get(1, 0), 4.));

    assert_eq!(formulation.objective().terms().len(), 2);
    assert_eq!(formulation.objective_value(&[0., 1., 1., 0.]), 7.);
}

#[test]
fn can_display_relation() {
    let relations = [Relation::Equal, Relation::LessOrEqual, Relation::GreaterOrEqual];

    assert_eq!(relations.iter().map(|relation| relation.to_string()).collect::<Vec<_>>(), vec!["=", "<=", ">="]);
}
