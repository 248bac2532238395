//! A map of which bodies orbit which, and routes between them

use std::collections::HashMap;

use index_vec::IndexVec;
use log::{debug, info, warn};

use crate::{Config, Error, Result};

index_vec::define_index_type! {
    /// Unique identifier for a body in an [`OrbitMap`]
    pub struct BodyIdx = usize;
}

/// Every body in the map, each with the body it directly orbits (if any)
#[derive(Debug, Clone)]
pub struct OrbitMap {
    names: IndexVec<BodyIdx, String>,
    ids: HashMap<String, BodyIdx>,
    parents: IndexVec<BodyIdx, Option<BodyIdx>>,
}

impl OrbitMap {
    /// Parse lines of the form `A)B`, meaning that `B` orbits `A`.  If a body is listed as
    /// orbiting more than once, the first listing wins.
    pub fn parse(text: &str) -> Result<Self> {
        let mut map = Self {
            names: IndexVec::new(),
            ids: HashMap::new(),
            parents: IndexVec::new(),
        };
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (parent, child) = line
                .split_once(')')
                .filter(|(p, c)| !p.is_empty() && !c.is_empty())
                .ok_or_else(|| Error::Parse {
                    line: i + 1,
                    message: format!("expected `A)B`, found {:?}", line),
                })?;

            let parent = map.intern(parent);
            let child = map.intern(child);
            if map.parents[child].is_none() {
                map.parents[child] = Some(parent);
            } else {
                warn!("Ignoring repeated orbit for {:?}", map.names[child]);
            }
        }
        map.check_for_cycles()?;
        debug!("Parsed orbit map with {} bodies", map.len());
        Ok(map)
    }

    fn intern(&mut self, name: &str) -> BodyIdx {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.push(name.to_owned());
        let parent_id = self.parents.push(None);
        assert_eq!(id, parent_id);
        self.ids.insert(name.to_owned(), id);
        id
    }

    fn check_for_cycles(&self) -> Result<()> {
        for id in self.names.indices() {
            // An acyclic chain can't be longer than the number of bodies
            if self.ancestors(id).nth(self.len()).is_some() {
                return Err(Error::OrbitCycle(self.names[id].clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Result<BodyIdx> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownBody(name.to_owned()))
    }

    pub fn name(&self, id: BodyIdx) -> &str {
        &self.names[id]
    }

    /// The bodies which `id` orbits, directly or indirectly, nearest first
    pub fn ancestors(&self, id: BodyIdx) -> impl Iterator<Item = BodyIdx> + '_ {
        std::iter::successors(self.parents[id], move |&p| self.parents[p])
    }

    /// Total number of direct and indirect orbits
    pub fn total_orbits(&self) -> usize {
        self.names
            .indices()
            .map(|id| self.ancestors(id).count())
            .sum()
    }

    /// The number of orbital transfers needed to get from the body which `from` orbits to the body
    /// which `to` orbits
    pub fn transfers(&self, from: &str, to: &str) -> Result<usize> {
        let from_ancestors = self.ancestors(self.id(from)?).collect::<Vec<_>>();
        let to_ancestors = self.ancestors(self.id(to)?).collect::<Vec<_>>();
        from_ancestors
            .iter()
            .enumerate()
            .find_map(|(from_dist, body)| {
                let to_dist = to_ancestors.iter().position(|b| b == body)?;
                Some(from_dist + to_dist)
            })
            .ok_or_else(|| {
                Error::NoSolution(format!("{:?} and {:?} share no common orbit", from, to))
            })
    }
}

/// Returns the total number of orbits, and the transfers between `YOU` and `SAN` (if they're both
/// in the map)
pub fn solve(text: &str) -> Result<(usize, Option<usize>)> {
    let map = OrbitMap::parse(text)?;
    let total = map.total_orbits();
    let transfers = match (map.id("YOU"), map.id("SAN")) {
        (Ok(_), Ok(_)) => Some(map.transfers("YOU", "SAN")?),
        _ => None,
    };
    Ok((total, transfers))
}

pub fn run(config: &Config) -> Result<()> {
    let (total, transfers) = solve(&config.read_input()?)?;
    info!("Mapped orbits from {:?}", config.input);
    println!("TOTAL ORBIT LENGTH : {}", total);
    match transfers {
        Some(steps) => println!("TOTAL STEPS FROM ME TO SANTA : {}", steps),
        None => warn!("Map doesn't contain both YOU and SAN; skipping transfers"),
    }
    Ok(())
}
