//! Presentation view of the transmission tree.
//!
//! Resolves identifiers from the graph layer back to persons for display:
//! chains become named links, generations become tiers of scholars.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::{partition_generations, Edge};
use crate::models::{Person, PersonId, Transmission};

/// One narrator in a displayed chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainLink {
    pub id: PersonId,
    /// Person's name, or the raw id when the person is unknown.
    pub name: String,
}

/// Scholars sharing a generation. `generation` is 1-based for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationTier {
    pub generation: usize,
    pub scholars: Vec<Person>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub persons: usize,
    pub transmissions: usize,
    pub generations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub generations: Vec<GenerationTier>,
    pub stats: TreeStats,
}

/// Attach names to a chain of identifiers.
pub fn label_chain(chain: &[PersonId], persons: &[Person]) -> Vec<ChainLink> {
    let names: HashMap<&str, &str> = persons
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    chain
        .iter()
        .map(|id| ChainLink {
            id: id.clone(),
            name: names.get(id.as_str()).copied().unwrap_or(id.as_str()).to_string(),
        })
        .collect()
}

/// Build generation tiers and summary counts.
///
/// Identifiers placed by the partition but missing from `persons` (a
/// transmission naming a deleted person, say) are left out of their tier.
pub fn build_tree(persons: &[Person], transmissions: &[Transmission]) -> TreeView {
    let edges: Vec<Edge> = transmissions.iter().map(Edge::from).collect();
    let partition = partition_generations(persons, &edges);

    let by_id: HashMap<&str, &Person> = persons.iter().map(|p| (p.id.as_str(), p)).collect();

    let generations: Vec<GenerationTier> = partition
        .iter()
        .enumerate()
        .map(|(level, ids)| GenerationTier {
            generation: level + 1,
            scholars: ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|p| (*p).clone()))
                .collect(),
        })
        .collect();

    TreeView {
        stats: TreeStats {
            persons: persons.len(),
            transmissions: transmissions.len(),
            generations: generations.len(),
        },
        generations,
    }
}

/// Render a labelled chain as `A → B → C`.
pub fn format_chain(links: &[ChainLink]) -> String {
    links
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

impl fmt::Display for TreeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tier in &self.generations {
            writeln!(f, "Generation {}", tier.generation)?;
            for p in &tier.scholars {
                write!(f, "  {}", p.name)?;
                match (&p.birth_date, &p.death_date) {
                    (Some(b), Some(d)) => write!(f, " (b. {}, d. {})", b, d)?,
                    (Some(b), None) => write!(f, " (b. {})", b)?,
                    (None, Some(d)) => write!(f, " (d. {})", d)?,
                    (None, None) => {}
                }
                writeln!(f)?;
            }
        }
        write!(
            f,
            "{} persons, {} transmissions, {} generations",
            self.stats.persons, self.stats.transmissions, self.stats.generations
        )
    }
}
