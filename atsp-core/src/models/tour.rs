#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::CostMatrix;
use crate::utils::GenericResult;

/// A threshold to consider binary arc variable as selected.
const SELECTED_ARC_THRESHOLD: f64 = 0.5;

/// A Hamiltonian cycle represented as a sequence of nodes which starts from node 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a successor list: `successors[i]` is the node visited after `i`.
    pub fn from_successors(successors: &[usize]) -> GenericResult<Self> {
        let size = successors.len();
        if size < 2 {
            return Err(format!("tour should have at least 2 nodes, got: '{size}'").into());
        }

        let mut visited = vec![false; size];
        let mut nodes = Vec::with_capacity(size);
        let mut current = 0;

        while !visited[current] {
            visited[current] = true;
            nodes.push(current);

            current = successors[current];
            if current >= size {
                return Err(format!("successor '{current}' is out of range").into());
            }
        }

        if current != 0 || nodes.len() != size {
            return Err(format!("successors form a subtour of {} nodes out of {size}", nodes.len()).into());
        }

        Ok(Self { nodes })
    }

    /// Decodes a tour from arc variable values laid out in row-major order.
    pub fn from_arc_values(size: usize, values: &[f64]) -> GenericResult<Self> {
        if values.len() != size * size {
            return Err(format!("expected {} arc values, got: '{}'", size * size, values.len()).into());
        }

        let successors = values
            .chunks(size)
            .enumerate()
            .map(|(from, row)| {
                let selected = row
                    .iter()
                    .enumerate()
                    .filter(|(to, value)| *to != from && **value > SELECTED_ARC_THRESHOLD)
                    .map(|(to, _)| to)
                    .collect::<Vec<_>>();

                match selected.as_slice() {
                    [to] => Ok(*to),
                    _ => Err(format!("node '{from}' has {} selected outgoing arcs", selected.len())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_successors(successors.as_slice())
    }

    /// Returns nodes in visiting order.
    pub fn nodes(&self) -> &[usize] {
        self.nodes.as_slice()
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over arcs of the cycle including the closing one.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().zip(self.nodes.iter().cycle().skip(1)).map(|(&from, &to)| (from, to))
    }

    /// Returns total cost of the tour.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        self.arcs().map(|(from, to)| matrix.cost(from, to)).sum()
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nodes = self.nodes.iter().chain(self.nodes.first()).map(|node| node.to_string()).collect::<Vec<_>>();
        write!(f, "{}", nodes.join(" -> "))
    }
}
