//! Trait definitions for optimal codon selection
//!
//! A selector turns a set of organisms and a CUB index into one preferred
//! codon per amino acid. Implementations must be deterministic: the same
//! inputs always yield the same map.

use crate::bio::genetic_code::{AminoAcid, Codon};
use crate::core::models::{CubIndex, Organism, OptimizationMethod};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What to do when the number of organisms flagged for optimization is not 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Fail with `InvalidOrganismSelection`
    #[default]
    Strict,
    /// Warn and continue with the first flagged organism
    Lenient,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Strict => write!(f, "strict"),
            SelectionPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(SelectionPolicy::Strict),
            "lenient" => Ok(SelectionPolicy::Lenient),
            _ => Err(format!("Unknown selection policy: {}", s)),
        }
    }
}

/// One amino acid's optimal codon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodonMap(BTreeMap<AminoAcid, Codon>);

impl CodonMap {
    pub fn get(&self, aa: AminoAcid) -> Option<&str> {
        self.0.get(&aa).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, &str)> {
        self.0.iter().map(|(&aa, codon)| (aa, codon.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AminoAcid, Codon)> for CodonMap {
    fn from_iter<I: IntoIterator<Item = (AminoAcid, Codon)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCodon {
    pub codon: Codon,
    pub weight: f64,
}

/// Profiled synonymous codons per amino acid, best first.
///
/// Equal weights keep lexicographic codon order, so the head of every list is
/// the first maximum in the profile's key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodonRanking(BTreeMap<AminoAcid, Vec<RankedCodon>>);

impl CodonRanking {
    pub fn get(&self, aa: AminoAcid) -> Option<&[RankedCodon]> {
        self.0.get(&aa).map(Vec::as_slice)
    }

    pub fn optimal(&self) -> CodonMap {
        self.0
            .iter()
            .filter_map(|(&aa, ranked)| ranked.first().map(|best| (aa, best.codon.clone())))
            .collect()
    }

    /// Codons whose weight is at least `threshold` times the best weight
    pub fn near_optimal(&self, aa: AminoAcid, threshold: f64) -> Vec<&str> {
        let Some(ranked) = self.0.get(&aa) else {
            return Vec::new();
        };
        let Some(best) = ranked.first() else {
            return Vec::new();
        };
        let cutoff = best.weight * threshold;
        ranked
            .iter()
            .take_while(|r| r.weight >= cutoff)
            .map(|r| r.codon.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AminoAcid, Vec<RankedCodon>)> for CodonRanking {
    fn from_iter<I: IntoIterator<Item = (AminoAcid, Vec<RankedCodon>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Common interface for codon selection strategies
pub trait CodonSelector: Send + Sync {
    /// Rank every amino acid's synonymous codons for the wanted organism
    fn rank_codons(
        &self,
        organisms: &[Organism],
        method: OptimizationMethod,
        cub_index: CubIndex,
    ) -> Result<CodonRanking>;

    /// Pick the single best codon for every amino acid
    fn select_optimal_codons(
        &self,
        organisms: &[Organism],
        method: OptimizationMethod,
        cub_index: CubIndex,
    ) -> Result<CodonMap> {
        Ok(self.rank_codons(organisms, method, cub_index)?.optimal())
    }

    /// Organism-count policy in effect
    fn policy(&self) -> SelectionPolicy;

    fn strategy_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(entries: &[(&str, f64)]) -> Vec<RankedCodon> {
        entries
            .iter()
            .map(|&(codon, weight)| RankedCodon {
                codon: codon.to_string(),
                weight,
            })
            .collect()
    }

    #[test]
    fn test_optimal_takes_head() {
        let ranking: CodonRanking = vec![
            ('K', ranked(&[("AAG", 0.9), ("AAA", 0.3)])),
            ('M', ranked(&[("ATG", 1.0)])),
        ]
        .into_iter()
        .collect();

        let map = ranking.optimal();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get('K'), Some("AAG"));
        assert_eq!(map.get('M'), Some("ATG"));
        assert_eq!(map.get('W'), None);
    }

    #[test]
    fn test_near_optimal_threshold() {
        let ranking: CodonRanking = vec![(
            'L',
            ranked(&[("CTG", 1.0), ("TTG", 0.8), ("CTC", 0.5), ("CTA", 0.1)]),
        )]
        .into_iter()
        .collect();

        assert_eq!(ranking.near_optimal('L', 1.0), vec!["CTG"]);
        assert_eq!(ranking.near_optimal('L', 0.75), vec!["CTG", "TTG"]);
        assert_eq!(ranking.near_optimal('L', 0.0).len(), 4);
        assert!(ranking.near_optimal('W', 0.5).is_empty());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("Strict".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::Strict);
        assert_eq!("lenient".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::Lenient);
        assert!("loose".parse::<SelectionPolicy>().is_err());
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::Strict);
    }

    #[test]
    fn test_codon_map_serializes_as_object() {
        let map: CodonMap = vec![('K', "AAG".to_string())].into_iter().collect();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"K": "AAG"}));
    }
}
