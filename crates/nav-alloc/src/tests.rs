//! Unit tests for nav-alloc.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use nav_core::{GeoPoint, Location, LocationCategory, LocationId};

    pub fn place(id: u32, lat: f64, lon: f64) -> Arc<Location> {
        Arc::new(Location {
            id:          LocationId(id),
            key:         format!("p{id}"),
            name:        format!("Place {id}"),
            position:    GeoPoint::new(lat, lon),
            category:    LocationCategory::Other,
            description: String::new(),
        })
    }

    /// `count` distinct placeholder locations starting at id `first`.
    pub fn places(first: u32, count: usize) -> Vec<Arc<Location>> {
        (0..count as u32).map(|i| place(first + i, 0.0, f64::from(i) * 0.001)).collect()
    }
}

// ── Problem validation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod problem {
    use crate::{AllocError, TransportationProblem};

    use super::helpers::{place, places};

    fn try_new(costs: Vec<Vec<f64>>, supply: Vec<f64>, demand: Vec<f64>) -> Result<TransportationProblem, AllocError> {
        TransportationProblem::new(places(0, supply.len()), places(100, demand.len()), costs, supply, demand)
    }

    #[test]
    fn accepts_well_formed() {
        let p = try_new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![5.0, 5.0], vec![4.0, 6.0]).unwrap();
        assert_eq!((p.rows(), p.cols()), (2, 2));
        assert_eq!(p.cost(1, 0), 3.0);
        assert!(p.is_balanced());
    }

    #[test]
    fn supply_length_mismatch() {
        let err = TransportationProblem::new(
            places(0, 2), places(100, 2), vec![vec![1.0, 1.0]; 2], vec![1.0], vec![1.0, 1.0],
        ).unwrap_err();
        assert!(matches!(err, AllocError::InvalidInput(_)));
    }

    #[test]
    fn demand_length_mismatch() {
        let err = TransportationProblem::new(
            places(0, 2), places(100, 2), vec![vec![1.0, 1.0]; 2], vec![1.0, 1.0], vec![1.0, 1.0, 1.0],
        ).unwrap_err();
        assert!(matches!(err, AllocError::InvalidInput(_)));
    }

    #[test]
    fn ragged_matrix() {
        assert!(try_new(vec![vec![1.0, 1.0], vec![1.0]], vec![1.0, 1.0], vec![1.0, 1.0]).is_err());
        assert!(try_new(vec![vec![1.0, 1.0]], vec![1.0, 1.0], vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn negative_or_nan_quantities() {
        assert!(try_new(vec![vec![1.0]], vec![-1.0], vec![1.0]).is_err());
        assert!(try_new(vec![vec![1.0]], vec![1.0], vec![f64::NAN]).is_err());
    }

    #[test]
    fn non_finite_cost() {
        let err = try_new(vec![vec![1.0, f64::INFINITY]], vec![1.0], vec![0.5, 0.5]).unwrap_err();
        assert!(err.to_string().contains("cost[0][1]"), "{err}");
    }

    #[test]
    fn costs_from_haversine() {
        let a = place(1, 0.0, 0.0);
        let b = place(2, 0.0, 1.0);
        let p = TransportationProblem::from_locations(vec![a.clone()], vec![a.clone(), b.clone()], vec![1.0], vec![0.5, 0.5])
            .unwrap();
        assert_eq!(p.cost(0, 0), 0.0);
        assert!((p.cost(0, 1) - a.distance_to(&b)).abs() < 1e-9);
    }

    #[test]
    fn unbalanced_detected() {
        let p = try_new(vec![vec![1.0]], vec![2.0], vec![1.0]).unwrap();
        assert!(!p.is_balanced());
    }
}

// ── Vogel's Approximation Method ───────────────────────────────────────────────

#[cfg(test)]
mod vam {
    use nav_core::SearchBudget;
    use proptest::prelude::*;

    use crate::{solve, AllocError, TransportationProblem, VamSolver};

    use super::helpers::{place, places};

    fn problem(costs: Vec<Vec<f64>>, supply: Vec<f64>, demand: Vec<f64>) -> TransportationProblem {
        TransportationProblem::new(places(0, supply.len()), places(100, demand.len()), costs, supply, demand)
            .unwrap()
    }

    fn cells(plan: &crate::AllocationPlan) -> Vec<(usize, usize, f64)> {
        plan.allocations().iter().map(|a| (a.row, a.col, a.quantity)).collect()
    }

    #[test]
    fn two_by_two_balanced_is_exhausted() {
        let sources = vec![place(1, 0.0, 0.0), place(2, 0.0, 0.01)];
        let destinations = vec![place(3, 0.005, 0.0), place(4, 0.005, 0.01)];
        let p = TransportationProblem::from_locations(sources, destinations, vec![100.0, 80.0], vec![70.0, 110.0])
            .unwrap();
        let plan = solve(&p).unwrap();

        assert!(plan.len() >= 2);
        assert_eq!(plan.total_quantity(), 180.0);
        assert!(plan.remaining_supply().iter().all(|&s| s == 0.0));
        assert!(plan.remaining_demand().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn textbook_three_by_four() {
        let p = problem(
            vec![
                vec![19.0, 30.0, 50.0, 10.0],
                vec![70.0, 30.0, 40.0, 60.0],
                vec![40.0, 8.0, 70.0, 20.0],
            ],
            vec![7.0, 9.0, 18.0],
            vec![5.0, 8.0, 7.0, 14.0],
        );
        let plan = solve(&p).unwrap();
        assert_eq!(
            cells(&plan),
            vec![
                (2, 1, 8.0),
                (0, 0, 5.0),
                (2, 3, 10.0),
                (0, 3, 2.0),
                (1, 3, 2.0),
                (1, 2, 7.0),
            ]
        );
        assert_eq!(plan.total_cost(), 779.0);
    }

    #[test]
    fn small_cost_matrix_scenario() {
        // supply [100, 80], demand [70, 110].
        let p = problem(vec![vec![2.0, 3.0], vec![5.0, 1.0]], vec![100.0, 80.0], vec![70.0, 110.0]);
        let plan = solve(&p).unwrap();
        assert_eq!(cells(&plan), vec![(1, 1, 80.0), (0, 1, 30.0), (0, 0, 70.0)]);
        assert_eq!(plan.total_cost(), 310.0);
    }

    #[test]
    fn penalty_ties_prefer_rows() {
        // Row 1 and column 1 both have penalty 1; the row wins and its
        // cheapest cell is column 0.
        let p = problem(vec![vec![1.0, 1.0], vec![1.0, 2.0]], vec![5.0, 5.0], vec![5.0, 5.0]);
        let plan = solve(&p).unwrap();
        assert_eq!(cells(&plan), vec![(1, 0, 5.0), (0, 1, 5.0)]);
    }

    #[test]
    fn equal_penalties_prefer_lowest_index() {
        let p = problem(vec![vec![4.0, 4.0], vec![4.0, 4.0]], vec![5.0, 5.0], vec![5.0, 5.0]);
        let plan = solve(&p).unwrap();
        assert_eq!(cells(&plan), vec![(0, 0, 5.0), (1, 1, 5.0)]);
    }

    #[test]
    fn deterministic_across_runs() {
        let p = problem(vec![vec![3.0, 1.0, 3.0], vec![1.0, 3.0, 1.0]], vec![4.0, 4.0], vec![3.0, 2.0, 3.0]);
        let first = cells(&solve(&p).unwrap());
        for _ in 0..10 {
            assert_eq!(cells(&solve(&p).unwrap()), first);
        }
    }

    #[test]
    fn zero_supply_row_starts_retired() {
        let p = problem(vec![vec![1.0, 1.0], vec![1.0, 2.0]], vec![0.0, 5.0], vec![5.0, 5.0]);
        let plan = solve(&p).unwrap();
        assert_eq!(cells(&plan), vec![(1, 1, 5.0)]);
        assert_eq!(plan.remaining_demand(), &[5.0, 0.0]);
        assert!(plan.allocations().iter().all(|a| a.quantity > 0.0));
    }

    #[test]
    fn excess_supply_is_left_over() {
        let p = problem(vec![vec![1.0], vec![2.0]], vec![10.0, 10.0], vec![15.0]);
        let plan = solve(&p).unwrap();
        assert_eq!(plan.total_quantity(), 15.0);
        assert_eq!(plan.remaining_demand(), &[0.0]);
        assert_eq!(plan.remaining_supply().iter().sum::<f64>(), 5.0);
    }

    #[test]
    fn empty_problem() {
        let p = problem(Vec::new(), Vec::new(), Vec::new());
        assert!(solve(&p).unwrap().is_empty());
    }

    #[test]
    fn allocation_total_cost() {
        let p = problem(vec![vec![2.5]], vec![4.0], vec![4.0]);
        let plan = solve(&p).unwrap();
        assert_eq!(plan.allocations()[0].total_cost(), 10.0);
        assert_eq!(plan.allocations()[0].to_string(), "Place 0 -> Place 100: 4.0 units @ 2.5 = 10.0");
    }

    #[test]
    fn budget_exhaustion() {
        let p = problem(vec![vec![1.0, 2.0], vec![3.0, 1.0]], vec![5.0, 5.0], vec![5.0, 5.0]);
        let err = VamSolver::with_budget(SearchBudget::default().with_max_expansions(1)).solve(&p).unwrap_err();
        assert!(matches!(err, AllocError::DeadlineExceeded(_)));
    }

    // ── Properties ───────────────────────────────────────────────────────

    type Instance = (Vec<Vec<f64>>, Vec<f64>, Vec<f64>);

    /// Integer-valued instance, balanced by a final dummy row or column.
    fn balanced_instance() -> impl Strategy<Value = Instance> {
        (1usize..5, 1usize..5).prop_flat_map(|(m, n)| {
            (
                prop::collection::vec(prop::collection::vec(0u32..50, n + 1), m + 1),
                prop::collection::vec(0u32..40, m),
                prop::collection::vec(0u32..40, n),
            )
                .prop_map(|(costs, mut supply, mut demand)| {
                    let (s, d): (u32, u32) = (supply.iter().sum(), demand.iter().sum());
                    // One extra row and column; the smaller side absorbs the gap.
                    supply.push(d.saturating_sub(s));
                    demand.push(s.saturating_sub(d));
                    let f = |v: Vec<u32>| v.into_iter().map(f64::from).collect::<Vec<f64>>();
                    let costs: Vec<Vec<f64>> = costs.into_iter().map(f).collect();
                    (costs, f(supply), f(demand))
                })
        })
    }

    proptest! {
        #[test]
        fn balanced_problems_are_conserved((costs, supply, demand) in balanced_instance()) {
            let p = problem(costs, supply.clone(), demand.clone());
            let plan = solve(&p).unwrap();

            for (row, &s) in supply.iter().enumerate() {
                prop_assert_eq!(plan.shipped_from(row), s);
            }
            for (col, &d) in demand.iter().enumerate() {
                prop_assert_eq!(plan.received_by(col), d);
            }
            prop_assert_eq!(plan.total_quantity(), supply.iter().sum::<f64>());
            prop_assert!(plan.len() < supply.len() + demand.len());
        }

        #[test]
        fn never_over_allocates(
            supply in prop::collection::vec(0u32..30, 1..5),
            demand in prop::collection::vec(0u32..30, 1..5),
            seed in 0u32..1000,
        ) {
            let (m, n) = (supply.len(), demand.len());
            let costs: Vec<Vec<f64>> = (0..m)
                .map(|i| (0..n).map(|j| f64::from((seed + 7 * i as u32 + 13 * j as u32) % 17)).collect())
                .collect();
            let supply: Vec<f64> = supply.into_iter().map(f64::from).collect();
            let demand: Vec<f64> = demand.into_iter().map(f64::from).collect();
            let plan = solve(&problem(costs, supply.clone(), demand.clone())).unwrap();

            for (row, &s) in supply.iter().enumerate() {
                prop_assert!(plan.shipped_from(row) <= s);
            }
            for (col, &d) in demand.iter().enumerate() {
                prop_assert!(plan.received_by(col) <= d);
            }
            let expected = supply.iter().sum::<f64>().min(demand.iter().sum::<f64>());
            prop_assert_eq!(plan.total_quantity(), expected);
        }
    }
}

// ── Serde ───────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serialization {
    use crate::{solve, AllocationPlan, TransportationProblem};

    #[test]
    fn plan_serializes_allocations_and_leftovers() {
        let p = TransportationProblem::new(
            super::helpers::places(0, 1),
            super::helpers::places(100, 2),
            vec![vec![2.0, 4.0]],
            vec![10.0],
            vec![6.0, 6.0],
        )
        .unwrap();
        let plan = solve(&p).unwrap();

        let json = serde_json::to_value(&plan).unwrap();
        // Column 1 has the larger penalty (its lone cost, 4) and is filled first.
        assert_eq!(json["allocations"][0]["source"]["key"], "p0");
        assert_eq!(json["allocations"][0]["destination"]["key"], "p101");
        assert_eq!(json["allocations"][0]["quantity"], 6.0);
        assert_eq!(json["remaining_demand"][0], 2.0);

        let back: AllocationPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back.total_cost(), plan.total_cost());
        assert_eq!(back.allocations()[1].destination.name, "Place 100");
        assert_eq!(back.remaining_supply(), &[0.0]);
    }
}
