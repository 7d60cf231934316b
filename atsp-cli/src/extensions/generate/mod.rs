//! Generate command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use atsp_core::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Specifies how to generate a random instance.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Amount of nodes.
    pub size: usize,
    /// Inclusive range of integer travel costs.
    pub cost_range: (u32, u32),
    /// Generates `cost(i, j) == cost(j, i)` when set.
    pub is_symmetric: bool,
    /// A seed to reproduce the same instance.
    pub seed: Option<u64>,
}

/// Generates a random instance with zero diagonal and integer costs.
pub fn generate_instance(options: &GenerateOptions) -> GenericResult<Instance> {
    let GenerateOptions { size, cost_range: (min, max), is_symmetric, seed } = *options;

    if size < 2 {
        return Err(format!("instance size should be at least 2, got: '{size}'").into());
    }

    if min > max {
        return Err(format!("min cost should not be greater than max cost, got: '{min}' > '{max}'").into());
    }

    let mut random = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let mut values = vec![0.; size * size];

    (0..size).for_each(|from| {
        (0..size).filter(|&to| to != from).for_each(|to| {
            values[from * size + to] = if is_symmetric && to < from {
                values[to * size + from]
            } else {
                random.gen_range(min..=max) as f64
            };
        })
    });

    let kind = if is_symmetric { "sym" } else { "asym" };
    let matrix = CostMatrix::new(size, values)?;

    Ok(Instance::new(format!("random_{kind}_{size}.atsp").as_str(), matrix))
}
