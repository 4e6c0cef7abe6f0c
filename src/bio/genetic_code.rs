//! Standard genetic code tables
//!
//! Both tables are built once on first access and are read-only afterwards,
//! so they can be shared freely between threads.
use crate::{CommuniqueError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

pub type Codon = String;
pub type AminoAcid = char;

/// Symbol the translation table uses for the three stop codons
pub const STOP_SYMBOL: AminoAcid = '*';

const BASES: [u8; 4] = *b"TCAG";
const STANDARD_CODE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

static CODON_TABLE: OnceLock<BTreeMap<Codon, AminoAcid>> = OnceLock::new();
static SYNONYMOUS_CODONS: OnceLock<BTreeMap<AminoAcid, BTreeSet<Codon>>> = OnceLock::new();

/// Codon to amino acid lookup for all 64 codons
pub fn codon_table() -> &'static BTreeMap<Codon, AminoAcid> {
    CODON_TABLE.get_or_init(|| {
        let mut table = BTreeMap::new();
        for (i, &first) in BASES.iter().enumerate() {
            for (j, &second) in BASES.iter().enumerate() {
                for (k, &third) in BASES.iter().enumerate() {
                    let codon: Codon = [first, second, third].iter().map(|&b| b as char).collect();
                    table.insert(codon, STANDARD_CODE[i * 16 + j * 4 + k] as char);
                }
            }
        }
        table
    })
}

/// Amino acid (stop included) to the set of codons that encode it
pub fn synonymous_codons() -> &'static BTreeMap<AminoAcid, BTreeSet<Codon>> {
    SYNONYMOUS_CODONS.get_or_init(|| {
        let mut synonymous: BTreeMap<AminoAcid, BTreeSet<Codon>> = BTreeMap::new();
        for (codon, &aa) in codon_table() {
            synonymous.entry(aa).or_default().insert(codon.clone());
        }
        synonymous
    })
}

pub fn is_stop(aa: AminoAcid) -> bool {
    aa == STOP_SYMBOL
}

/// Upper-case bases and read `U` as `T`
pub fn normalize_bases(bases: &str) -> String {
    bases
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'U' => 'T',
            other => other,
        })
        .collect()
}

/// Translate a coding sequence codon by codon.
///
/// Fails on a length that is not a multiple of 3, and on any triplet that is
/// not one of the 64 standard codons.
pub fn translate(gene: &str) -> Result<Vec<AminoAcid>> {
    if gene.len() % 3 != 0 {
        return Err(CommuniqueError::InvalidInput(format!(
            "sequence length {} is not a multiple of 3",
            gene.len()
        )));
    }

    let table = codon_table();
    let bytes = gene.as_bytes();
    let mut protein = Vec::with_capacity(bytes.len() / 3);

    for (position, triplet) in bytes.chunks(3).enumerate() {
        let raw = String::from_utf8_lossy(triplet);
        let codon = normalize_bases(&raw);
        match table.get(&codon) {
            Some(&aa) => protein.push(aa),
            None => {
                return Err(CommuniqueError::InvalidCodon {
                    codon: raw.into_owned(),
                    position,
                })
            }
        }
    }

    Ok(protein)
}
