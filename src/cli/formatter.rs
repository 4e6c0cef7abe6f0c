//! CLI output formatting helpers
use crate::bio::genetic_code::{self, AminoAcid};
use crate::bio::sequence::TargetGene;
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color as TableColor, ContentArrangement, Table};
use std::collections::BTreeMap;

/// Status line on stderr so stdout stays a clean sequence
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// One kind of codon rewrite seen in an optimized gene
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CodonChange {
    pub amino_acid: AminoAcid,
    pub from: String,
    pub to: String,
    pub count: usize,
}

/// Count rewritten codons per (amino acid, old codon, new codon)
pub fn codon_changes(original: &TargetGene, optimized: &str) -> Vec<CodonChange> {
    let table = genetic_code::codon_table();
    let mut counts: BTreeMap<(AminoAcid, &str, &[u8]), usize> = BTreeMap::new();
    for (from, to) in original.codons().zip(optimized.as_bytes().chunks(3)) {
        if from.as_bytes() == to {
            continue;
        }
        let amino_acid = table.get(from).copied().unwrap_or('?');
        *counts.entry((amino_acid, from, to)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((amino_acid, from, to), count)| CodonChange {
            amino_acid,
            from: from.to_string(),
            to: String::from_utf8_lossy(to).into_owned(),
            count,
        })
        .collect()
}

/// Run settings as a bold key/value block, then the codon rewrites as a table
pub fn print_run_report(settings: &[(&str, String)], changes: &[CodonChange]) {
    println!();
    for (label, value) in settings {
        println!("{:>12}: {}", label.bold(), value);
    }

    if changes.is_empty() {
        println!("{}", "No codons were changed".dimmed());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Amino acid").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new("From").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new("To").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new("Count").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
    ]);

    for change in changes {
        table.add_row(vec![
            Cell::new(change.amino_acid),
            Cell::new(&change.from).fg(TableColor::Yellow),
            Cell::new(&change.to).fg(TableColor::Green),
            Cell::new(change.count).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

/// Amino acid, chosen codon, its weight and the synonymous codon count
pub fn codon_table(title: &str, rows: &[(char, String, f64, usize)]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Amino acid").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new("Codon").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new("Weight").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
        Cell::new("Synonymous").add_attribute(Attribute::Bold).fg(TableColor::Cyan),
    ]);

    for (aa, codon, weight, synonymous) in rows {
        table.add_row(vec![
            Cell::new(aa),
            Cell::new(codon).fg(TableColor::Green),
            Cell::new(format!("{:.4}", weight)).set_alignment(CellAlignment::Right),
            Cell::new(synonymous).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", title.bold());
    println!("{}", table);
}

/// Break a sequence into lines of at most `width` bases
pub fn wrap_sequence(sequence: &str, width: usize) -> String {
    if width == 0 {
        return sequence.to_string();
    }
    sequence
        .as_bytes()
        .chunks(width)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codon_changes() {
        let original = TargetGene::new("gene", "ATGAAAAAAGCTAAGTAA").unwrap();
        let changes = codon_changes(&original, "ATGAAGAAGGCCAAGTGA");

        assert_eq!(
            changes,
            vec![
                CodonChange { amino_acid: '*', from: "TAA".into(), to: "TGA".into(), count: 1 },
                CodonChange { amino_acid: 'A', from: "GCT".into(), to: "GCC".into(), count: 1 },
                CodonChange { amino_acid: 'K', from: "AAA".into(), to: "AAG".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_codon_changes_unchanged_gene() {
        let original = TargetGene::new("gene", "ATGTAA").unwrap();
        assert!(codon_changes(&original, "ATGTAA").is_empty());
    }

    #[test]
    fn test_wrap_sequence() {
        assert_eq!(wrap_sequence("ATGAAATAA", 4), "ATGA\nAATA\nA");
        assert_eq!(wrap_sequence("ATG", 80), "ATG");
        assert_eq!(wrap_sequence("", 80), "");
        assert_eq!(wrap_sequence("ATG", 0), "ATG");
    }
}
