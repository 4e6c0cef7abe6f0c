use crate::bio::genetic_code::{normalize_bases, Codon};
use crate::{CommuniqueError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Codon usage bias metric a profile was computed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubIndex {
    /// Codon Adaptation Index (relative adaptiveness against highly expressed genes)
    Cai,
    /// tRNA Adaptation Index
    Tai,
}

impl CubIndex {
    /// Stop codons carry no tRNA pairing signal, so this index leaves them alone
    pub fn is_trna_adaptation_index(&self) -> bool {
        matches!(self, CubIndex::Tai)
    }
}

impl fmt::Display for CubIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubIndex::Cai => write!(f, "CAI"),
            CubIndex::Tai => write!(f, "tAI"),
        }
    }
}

impl FromStr for CubIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cai" => Ok(CubIndex::Cai),
            "tai" => Ok(CubIndex::Tai),
            _ => Err(format!("Unknown CUB index: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationMethod {
    /// Optimal codon of the single wanted organism at every position
    SingleOrganism,
    /// Like `SingleOrganism`, but honours the tuning parameter and codon dedup
    SingleOrganismTuned,
}

impl OptimizationMethod {
    pub fn accepts_tuning(&self) -> bool {
        matches!(self, OptimizationMethod::SingleOrganismTuned)
    }
}

impl fmt::Display for OptimizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizationMethod::SingleOrganism => write!(f, "single-organism"),
            OptimizationMethod::SingleOrganismTuned => write!(f, "single-organism-tuned"),
        }
    }
}

impl FromStr for OptimizationMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "single-organism" | "single" => Ok(OptimizationMethod::SingleOrganism),
            "single-organism-tuned" | "tuned" => Ok(OptimizationMethod::SingleOrganismTuned),
            _ => Err(format!("Unknown optimization method: {}", s)),
        }
    }
}

/// Per-codon weights for one CUB index, iterated in lexicographic codon order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubProfile(BTreeMap<Codon, f64>);

impl CubProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, codon: &str, weight: f64) {
        self.0.insert(normalize_bases(codon), weight);
    }

    pub fn get(&self, codon: &str) -> Option<f64> {
        self.0.get(codon).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Codon, f64)> {
        self.0.iter().map(|(c, &w)| (c, w))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weights must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        for (codon, &weight) in &self.0 {
            if !weight.is_finite() || weight < 0.0 {
                return Err(CommuniqueError::InvalidInput(format!(
                    "weight {} for codon {} must be a non-negative number",
                    weight, codon
                )));
            }
        }
        Ok(())
    }

    fn normalized(self) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(codon, weight)| (normalize_bases(&codon), weight))
                .collect(),
        )
    }
}

impl FromIterator<(Codon, f64)> for CubProfile {
    fn from_iter<I: IntoIterator<Item = (Codon, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect()).normalized()
    }
}

static EMPTY_PROFILE: CubProfile = CubProfile(BTreeMap::new());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub name: String,
    #[serde(default)]
    pub is_optimized: bool,
    #[serde(default)]
    pub profiles: BTreeMap<CubIndex, CubProfile>,
}

impl Organism {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_optimized: false,
            profiles: BTreeMap::new(),
        }
    }

    pub fn optimized(mut self) -> Self {
        self.is_optimized = true;
        self
    }

    pub fn with_profile(mut self, index: CubIndex, profile: CubProfile) -> Self {
        self.profiles.insert(index, profile);
        self
    }

    /// Profile for `index`, or an empty profile when the organism has none
    pub fn profile(&self, index: CubIndex) -> &CubProfile {
        self.profiles.get(&index).unwrap_or(&EMPTY_PROFILE)
    }
}

/// Load organisms from a JSON array
pub fn load_organisms<P: AsRef<Path>>(path: P) -> Result<Vec<Organism>> {
    let contents = std::fs::read_to_string(path)?;
    parse_organisms(&contents)
}

pub fn parse_organisms(json: &str) -> Result<Vec<Organism>> {
    let organisms: Vec<Organism> = serde_json::from_str(json)?;
    organisms
        .into_iter()
        .map(|mut organism| -> Result<Organism> {
            organism.profiles = std::mem::take(&mut organism.profiles)
                .into_iter()
                .map(|(index, profile)| (index, profile.normalized()))
                .collect();
            for profile in organism.profiles.values() {
                profile.validate().map_err(|e| {
                    CommuniqueError::InvalidInput(format!("organism {}: {}", organism.name, e))
                })?;
            }
            Ok(organism)
        })
        .collect()
}
