use anyhow::Result;
use comfy_table::Table;

use contact_cli::pipeline::{self, CleanResult};
use contact_model::{CleanOptions, Field, ValidationSelection};
use contact_report::OutputNames;
use contact_validate::blocklist::{
    BLOCKED_COUNTRY_SUFFIXES, BLOCKED_LOCAL_PARTS, FILLER_TOKENS, MALFORMED_SUFFIXES,
    TYPO_DOMAIN_FRAGMENTS,
};

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_rules() {
    let lists: [(&str, &str, &[&str]); 5] = [
        ("Role accounts", "contains", BLOCKED_LOCAL_PARTS),
        ("Provider typos", "contains", TYPO_DOMAIN_FRAGMENTS),
        ("Filler tokens", "contains", FILLER_TOKENS),
        ("Country domains", "ends with", BLOCKED_COUNTRY_SUFFIXES),
        ("Malformed suffixes", "ends with", MALFORMED_SUFFIXES),
    ];
    let mut table = Table::new();
    table.set_header(vec!["List", "Match", "Count", "Entries"]);
    apply_table_style(&mut table);
    for (name, rule, entries) in lists {
        table.add_row(vec![
            name.to_string(),
            rule.to_string(),
            entries.len().to_string(),
            entries.join(" "),
        ]);
    }
    println!("{table}");
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let selection: ValidationSelection = args.checks.iter().copied().map(Field::from).collect();
    let options = CleanOptions::new(selection)
        .with_output_dir(args.output_dir.clone())
        .with_dry_run(args.dry_run)
        .with_summary_json(args.summary_json.clone());
    pipeline::run_clean(&args.input, &options, &OutputNames::now())
}
