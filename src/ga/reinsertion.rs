//! Elitist reinsertion.
//!
//! Offspring replace the worst parents. At most `population_size - 1`
//! parents are replaced, so the best parent always survives and the
//! best-so-far length can never get worse.

use super::types::Tour;

/// Merges `offspring` into `parents`, returning the next population and
/// its objective values.
///
/// With `k = min(offspring.len(), parents.len() - 1)`, the `k` shortest
/// offspring replace the `k` longest parents. The result lists the
/// surviving parents best first, followed by the inserted offspring best
/// first. A one-individual population keeps its parent unless the best
/// offspring is no longer.
///
/// # Panics
/// Panics if an objective slice does not match its population's length.
pub fn reinsert(
    parents: Vec<Tour>,
    parent_objectives: &[f64],
    offspring: Vec<Tour>,
    offspring_objectives: &[f64],
) -> (Vec<Tour>, Vec<f64>) {
    assert_eq!(parents.len(), parent_objectives.len(), "parent objectives misaligned");
    assert_eq!(
        offspring.len(),
        offspring_objectives.len(),
        "offspring objectives misaligned"
    );

    let size = parents.len();
    if offspring.is_empty() || size == 0 {
        return (parents, parent_objectives.to_vec());
    }

    let parent_rank = ascending(parent_objectives);
    let offspring_rank = ascending(offspring_objectives);

    if size == 1 {
        let best = offspring_rank[0];
        if offspring_objectives[best] <= parent_objectives[0] {
            let mut offspring = offspring;
            return (vec![offspring.swap_remove(best)], vec![offspring_objectives[best]]);
        }
        return (parents, parent_objectives.to_vec());
    }

    let replaced = offspring.len().min(size - 1);
    let survivors = size - replaced;

    let mut parents: Vec<Option<Tour>> = parents.into_iter().map(Some).collect();
    let mut offspring: Vec<Option<Tour>> = offspring.into_iter().map(Some).collect();

    let mut next = Vec::with_capacity(size);
    let mut objectives = Vec::with_capacity(size);

    for &i in &parent_rank[..survivors] {
        if let Some(tour) = parents[i].take() {
            next.push(tour);
            objectives.push(parent_objectives[i]);
        }
    }
    for &i in &offspring_rank[..replaced] {
        if let Some(tour) = offspring[i].take() {
            next.push(tour);
            objectives.push(offspring_objectives[i]);
        }
    }

    (next, objectives)
}

/// Indices sorted by objective, shortest first. Stable on ties.
fn ascending(objectives: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..objectives.len()).collect();
    order.sort_by(|&a, &b| objectives[a].total_cmp(&objectives[b]));
    order
}
