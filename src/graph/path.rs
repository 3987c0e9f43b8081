//! Shortest chain of transmission between two persons.

use std::collections::{HashMap, VecDeque};

use crate::graph::Edge;
use crate::models::PersonId;

/// Find a shortest chain of transmission connecting `start` and `goal`.
///
/// Transmissions are followed in both directions: a student reaches their
/// teacher as readily as the teacher reaches the student. Returns the chain
/// `start, ..., goal`, or `None` when the two persons are not connected.
///
/// Neighbors are expanded in edge input order, so among several shortest
/// chains the one returned is stable for a given edge ordering.
pub fn find_shortest_chain(start: &str, goal: &str, edges: &[Edge]) -> Option<Vec<PersonId>> {
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.teacher.as_str())
            .or_default()
            .push(edge.student.as_str());
        adjacency
            .entry(edge.student.as_str())
            .or_default()
            .push(edge.teacher.as_str());
    }

    // node → predecessor. Recorded on enqueue; start is its own predecessor.
    let mut prev: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    prev.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };

        for &next in neighbors {
            if prev.contains_key(next) {
                continue;
            }
            prev.insert(next, current);

            if next == goal {
                return Some(reconstruct_chain(&prev, start, goal));
            }

            queue.push_back(next);
        }
    }

    None
}

/// Walk predecessor links from `goal` back to `start`.
fn reconstruct_chain(prev: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<PersonId> {
    let mut chain = vec![goal.to_string()];
    let mut current = goal;

    while current != start {
        current = prev[current];
        chain.push(current.to_string());
    }

    chain.reverse();
    chain
}
