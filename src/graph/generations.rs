//! Generation layering: persons grouped by distance from un-taught roots.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Edge;
use crate::models::{Person, PersonId};

/// Partition persons into generations by directed transmission distance.
///
/// Roots are persons who received no transmission, in input order. If every
/// person has a teacher (the recorded graph is cyclic), the first person is
/// used as the sole root; clusters not reachable from that person are then
/// left out. Persons unreachable from any root are omitted.
///
/// Index 0 of the result holds the roots; each generation lists identifiers
/// in discovery order. A person reachable from several roots lands in the
/// generation of its nearest root.
pub fn partition_generations(persons: &[Person], edges: &[Edge]) -> Vec<Vec<PersonId>> {
    let mut students: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut has_incoming: HashSet<&str> = HashSet::new();

    for edge in edges {
        students
            .entry(edge.teacher.as_str())
            .or_default()
            .push(edge.student.as_str());
        has_incoming.insert(edge.student.as_str());
    }

    let mut roots: Vec<&str> = persons
        .iter()
        .map(|p| p.id.as_str())
        .filter(|id| !has_incoming.contains(id))
        .collect();

    if roots.is_empty() {
        if let Some(first) = persons.first() {
            roots.push(first.id.as_str());
        }
    }

    // Marked on enqueue. The frontier is level-monotone, so the first
    // enqueue of a node already carries its minimal level.
    let mut discovered: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

    for root in roots {
        if discovered.insert(root) {
            queue.push_back((root, 0));
        }
    }

    let mut generations: Vec<Vec<PersonId>> = Vec::new();

    while let Some((id, level)) = queue.pop_front() {
        if generations.len() <= level {
            generations.push(Vec::new());
        }
        generations[level].push(id.to_string());

        if let Some(children) = students.get(id) {
            for &child in children {
                if discovered.insert(child) {
                    queue.push_back((child, level + 1));
                }
            }
        }
    }

    generations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persons(ids: &[&str]) -> Vec<Person> {
        ids.iter()
            .map(|id| Person {
                id: id.to_string(),
                name: format!("Shaykh {}", id),
                birth_date: None,
                death_date: None,
            })
            .collect()
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|(t, s)| Edge::new(*t, *s)).collect()
    }

    fn tiers(levels: &[&[&str]]) -> Vec<Vec<PersonId>> {
        levels
            .iter()
            .map(|level| level.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_teacher_with_two_students() {
        let result = partition_generations(&persons(&["A", "B", "C"]), &edges(&[("A", "B"), ("A", "C")]));
        assert_eq!(result, tiers(&[&["A"], &["B", "C"]]));
    }

    #[test]
    fn test_isolated_root() {
        let result = partition_generations(&persons(&["A"]), &[]);
        assert_eq!(result, tiers(&[&["A"]]));
    }

    #[test]
    fn test_simple_chain() {
        let result = partition_generations(&persons(&["A", "B", "C"]), &edges(&[("A", "B"), ("B", "C")]));
        assert_eq!(result, tiers(&[&["A"], &["B"], &["C"]]));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(partition_generations(&[], &[]).is_empty());
        assert!(partition_generations(&[], &edges(&[("A", "B")])).is_empty());
    }

    #[test]
    fn test_roots_follow_person_order() {
        let result = partition_generations(
            &persons(&["C", "B", "A", "D"]),
            &edges(&[("A", "D"), ("C", "D")]),
        );
        assert_eq!(result, tiers(&[&["C", "B", "A"], &["D"]]));
    }

    #[test]
    fn test_cyclic_graph_falls_back_to_first_person() {
        let result = partition_generations(
            &persons(&["B", "A", "C"]),
            &edges(&[("A", "B"), ("B", "C"), ("C", "A")]),
        );
        assert_eq!(result, tiers(&[&["B"], &["C"], &["A"]]));
    }

    #[test]
    fn test_fallback_misses_other_unrooted_clusters() {
        // Two separate cycles: only the first person's cycle is covered.
        let result = partition_generations(
            &persons(&["A", "B", "X", "Y"]),
            &edges(&[("A", "B"), ("B", "A"), ("X", "Y"), ("Y", "X")]),
        );
        assert_eq!(result, tiers(&[&["A"], &["B"]]));
    }

    #[test]
    fn test_unreachable_persons_are_omitted() {
        // R is the only root; the X↔Y cycle hangs off nothing.
        let result = partition_generations(
            &persons(&["R", "S", "X", "Y"]),
            &edges(&[("R", "S"), ("X", "Y"), ("Y", "X")]),
        );
        assert_eq!(result, tiers(&[&["R"], &["S"]]));
    }

    #[test]
    fn test_nearest_root_wins() {
        // X is three hops from R1 but one hop from R2. R1's branch is
        // enqueued first, yet X must still settle in generation 1.
        let result = partition_generations(
            &persons(&["R1", "R2", "A", "B", "X"]),
            &edges(&[("R1", "A"), ("A", "B"), ("B", "X"), ("R2", "X")]),
        );
        assert_eq!(result, tiers(&[&["R1", "R2"], &["A", "X"], &["B"]]));
    }

    #[test]
    fn test_student_with_two_teachers_listed_once() {
        let result = partition_generations(
            &persons(&["A", "B", "C"]),
            &edges(&[("A", "C"), ("B", "C"), ("A", "C")]),
        );
        assert_eq!(result, tiers(&[&["A", "B"], &["C"]]));
    }

    #[test]
    fn test_self_loop_person_is_not_a_root() {
        let result = partition_generations(
            &persons(&["A", "B"]),
            &edges(&[("B", "B"), ("A", "B")]),
        );
        assert_eq!(result, tiers(&[&["A"], &["B"]]));

        // Alone with a self-loop, the fallback root still covers it.
        let result = partition_generations(&persons(&["A"]), &edges(&[("A", "A")]));
        assert_eq!(result, tiers(&[&["A"]]));
    }

    #[test]
    fn test_unknown_students_still_placed() {
        let result = partition_generations(&persons(&["A"]), &edges(&[("A", "ghost")]));
        assert_eq!(result, tiers(&[&["A"], &["ghost"]]));
    }
}
