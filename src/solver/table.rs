use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::solver::calculation::Calculation;
use crate::solver::errors::SolverError;
use crate::utils::{HalfBinomials, complement};

/// Position of a group in the table's creation order
pub type GroupId = usize;

/// Unordered pair of smaller groups whose numbers together make up a parent group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub first: GroupId,
    pub second: GroupId,
}

/// A value-distinct sub-multiset of the source numbers
#[derive(Debug, Clone)]
pub struct Group {
    numbers: Vec<u64>,
    partitions: Vec<Partition>,
    calculations: Vec<Calculation>,
}

impl Group {
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    pub fn size(&self) -> usize {
        self.numbers.len()
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }
}

/// Every group of the source numbers, keyed by its descending value sequence.
///
/// Groups are stored in creation order, which is ascending by size. A group
/// only refers to strictly smaller groups, so the table is built bottom-up and
/// never changes afterwards.
#[derive(Debug, Default)]
pub struct DependencyTable {
    source: Vec<u64>,
    groups: Vec<Group>,
    index: HashMap<Vec<u64>, GroupId>,
}

impl DependencyTable {
    /// Builds the table for `source`, which must already be sorted descending.
    ///
    /// With `parallel` set, all groups of one size are built concurrently once
    /// every smaller size is complete. The resulting table is identical.
    ///
    /// # Errors
    ///
    /// Returns an error if a partition refers to a group that was never built,
    /// which would mean the enumeration missed a sub-multiset.
    pub fn build(source: Vec<u64>, parallel: bool) -> Result<Self, SolverError> {
        let half_binomials = HalfBinomials::new(source.len());
        let mut table = Self {
            source,
            ..Self::default()
        };

        for size in 1..=table.source.len() {
            let selections = table.distinct_selections(size);

            let groups: Vec<Group> = if parallel {
                selections
                    .into_par_iter()
                    .map(|numbers| table.build_group(numbers, &half_binomials))
                    .collect::<Result<_, _>>()?
            } else {
                selections
                    .into_iter()
                    .map(|numbers| table.build_group(numbers, &half_binomials))
                    .collect::<Result<_, _>>()?
            };

            let calculations: usize = groups.iter().map(|g| g.calculations.len()).sum();
            debug!(
                "Built {} groups of size {} with {} calculations",
                groups.len(),
                size,
                calculations
            );

            for group in groups {
                table.insert(group);
            }
        }

        info!(
            "Dependency table holds {} groups and {} calculations",
            table.len(),
            table.calculation_count()
        );
        Ok(table)
    }

    /// Value sequences of all positional selections of `size` source numbers
    /// not yet in the table, each listed once, in first-seen order.
    fn distinct_selections(&self, size: usize) -> Vec<Vec<u64>> {
        let mut seen = HashSet::new();
        self.source
            .iter()
            .copied()
            .combinations(size)
            .filter(|numbers| !self.index.contains_key(numbers) && seen.insert(numbers.clone()))
            .collect()
    }

    fn build_group(
        &self,
        numbers: Vec<u64>,
        half_binomials: &HalfBinomials,
    ) -> Result<Group, SolverError> {
        let partitions = self.partition(&numbers, half_binomials)?;
        let calculations = self.calculate(&numbers, &partitions)?;
        Ok(Group {
            numbers,
            partitions,
            calculations,
        })
    }

    /// Splits `numbers` into every distinct unordered pair of smaller groups.
    ///
    /// The larger side takes sizes from `ceil(m/2)` up to `m - 1`. When both
    /// sides have equal size only the first half of the selections is taken,
    /// since the remaining ones are the same pairs swapped.
    fn partition(
        &self,
        numbers: &[u64],
        half_binomials: &HalfBinomials,
    ) -> Result<Vec<Partition>, SolverError> {
        let size = numbers.len();
        let mut partitions = Vec::new();
        if size < 2 {
            return Ok(partitions);
        }

        let smallest = size.div_ceil(2);
        let mut used = HashSet::new();

        for first_size in smallest..size {
            let limit = if first_size == smallest {
                half_binomials.get(size)
            } else {
                None
            };

            let selections = numbers
                .iter()
                .copied()
                .combinations(first_size)
                .take(limit.unwrap_or(usize::MAX));

            for first in selections {
                if used.contains(&first) {
                    continue;
                }

                let second = complement(numbers, &first)?;
                partitions.push(Partition {
                    first: self.lookup(&first)?,
                    second: self.lookup(&second)?,
                });
                used.insert(first);
            }
        }

        Ok(partitions)
    }

    fn calculate(
        &self,
        numbers: &[u64],
        partitions: &[Partition],
    ) -> Result<Vec<Calculation>, SolverError> {
        if let [value] = numbers {
            return Ok(vec![Calculation::singleton(*value)]);
        }

        let mut calculations = Vec::new();
        for partition in partitions {
            let first = self.group_or_err(partition.first)?;
            let second = self.group_or_err(partition.second)?;
            for a in &first.calculations {
                for b in &second.calculations {
                    Calculation::generate(a, b, &mut calculations);
                }
            }
        }
        Ok(calculations)
    }

    fn insert(&mut self, group: Group) {
        let id = self.groups.len();
        self.index.insert(group.numbers.clone(), id);
        self.groups.push(group);
    }

    fn lookup(&self, numbers: &[u64]) -> Result<GroupId, SolverError> {
        self.index
            .get(numbers)
            .copied()
            .ok_or_else(|| SolverError::MissingGroup(numbers.to_vec()))
    }

    fn group_or_err(&self, id: GroupId) -> Result<&Group, SolverError> {
        self.groups.get(id).ok_or(SolverError::UnknownGroup(id))
    }

    /// Source numbers, sorted descending
    pub fn source(&self) -> &[u64] {
        &self.source
    }

    /// Group for a descending value sequence
    pub fn get(&self, numbers: &[u64]) -> Option<&Group> {
        self.index.get(numbers).and_then(|&id| self.groups.get(id))
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// All groups in creation order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn calculation_count(&self) -> usize {
        self.groups.iter().map(|g| g.calculations.len()).sum()
    }

    /// Every calculation, group by group in creation order
    pub fn walk(&self) -> impl Iterator<Item = &Calculation> {
        self.groups.iter().flat_map(|g| g.calculations.iter())
    }
}
