use crate::{CommuniqueError, Result};
use serde::{Deserialize, Serialize};

/// Coding sequence submitted for optimization.
///
/// Bases are stored upper-cased with `U` read as `T`. The only framing rule
/// enforced here is that the length is a whole number of codons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetGene {
    pub id: String,
    pub description: Option<String>,
    sequence: String,
}

impl TargetGene {
    pub fn new(id: impl Into<String>, sequence: &str) -> Result<Self> {
        let mut bases = String::with_capacity(sequence.len());
        for (i, c) in sequence.chars().enumerate() {
            match c.to_ascii_uppercase() {
                b @ ('A' | 'C' | 'G' | 'T') => bases.push(b),
                'U' => bases.push('T'),
                other => {
                    return Err(CommuniqueError::InvalidInput(format!(
                        "invalid nucleotide '{}' at position {}",
                        other, i
                    )))
                }
            }
        }

        if bases.len() % 3 != 0 {
            return Err(CommuniqueError::InvalidInput(format!(
                "gene length {} is not a multiple of 3",
                bases.len()
            )));
        }

        Ok(Self {
            id: id.into(),
            description: None,
            sequence: bases,
        })
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Parse either a bare sequence or a single FASTA record.
    ///
    /// Whitespace and line breaks are ignored. A FASTA header provides the id
    /// (first word) and description (rest of the line).
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CommuniqueError::InvalidInput(
                "DNA sequence is required".to_string(),
            ));
        }

        let mut lines = trimmed.lines();
        let (id, description, body): (String, Option<String>, Vec<&str>) =
            if trimmed.starts_with('>') {
                let header = lines.next().unwrap_or_default();
                let header = header[1..].trim();
                let mut parts = header.splitn(2, char::is_whitespace);
                let id = parts.next().unwrap_or_default().to_string();
                let description = parts
                    .next()
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty());
                if lines.clone().any(|l| l.starts_with('>')) {
                    return Err(CommuniqueError::Parse(
                        "expected a single FASTA record".to_string(),
                    ));
                }
                (id, description, lines.collect())
            } else {
                ("target_gene".to_string(), None, lines.collect())
            };

        let sequence: String = body
            .iter()
            .flat_map(|line| line.chars())
            .filter(|c| !c.is_whitespace())
            .collect();

        if sequence.is_empty() {
            return Err(CommuniqueError::InvalidInput(
                "sequence cannot be empty".to_string(),
            ));
        }

        let gene = Self::new(id, &sequence)?;
        Ok(match description {
            Some(d) => gene.with_description(d),
            None => gene,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn codon_count(&self) -> usize {
        self.sequence.len() / 3
    }

    pub fn codon(&self, index: usize) -> Option<&str> {
        self.sequence.get(index * 3..index * 3 + 3)
    }

    pub fn codons(&self) -> impl Iterator<Item = &str> {
        (0..self.codon_count()).filter_map(move |i| self.codon(i))
    }

    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!(">{} {}", self.id, desc),
            None => format!(">{}", self.id),
        }
    }
}
