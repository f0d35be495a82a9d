// Front-desk document validation CLI
// Reads recognized (OCR) text and reports validity plus extracted fields

use std::fs;
use std::io::Read;

use clap::Parser;

use deskdoc::analysis;
use deskdoc::models::{DocumentTypeRule, ValidationResult};
use deskdoc::utils::DeskdocError;
use deskdoc::DocumentValidator;

#[derive(Parser)]
#[command(name = "deskdoc", about = "Validate recognized document text")]
struct Args {
    /// File with recognized text, or "-" for stdin
    input: String,

    /// Document type tag: nationalID, passport or drivingLicense
    #[arg(short = 't', long)]
    document_type: String,

    /// Also run the form-field analysis
    #[arg(long)]
    analyze: bool,

    /// Emit JSON instead of the human-readable report
    #[arg(long)]
    json: bool,
}

fn read_input(input: &str) -> Result<String, DeskdocError> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn print_report(result: &ValidationResult) {
    println!("\n===============================================");
    println!("        DOCUMENT VALIDATION REPORT");
    println!("===============================================\n");

    println!("Document Type: {}", result.document_type);
    println!("Confidence: {:.2}", result.confidence);

    println!("\nEXTRACTED FIELDS:");
    let rule = DocumentTypeRule::for_type(result.document_type);
    for &field in rule.fields {
        let value = result.fields.get(field).map(String::as_str).unwrap_or("");
        println!(
            "  {}: {}",
            field,
            if value.is_empty() { "<not found>" } else { value }
        );
    }

    if !result.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &result.issues {
            println!("  - {}", issue);
        }
    }

    println!(
        "\nValidation result: {}",
        if result.is_valid { "VALID" } else { "INVALID" }
    );
}

fn run(args: &Args) -> Result<(), DeskdocError> {
    let text = read_input(&args.input)?;

    let validator = DocumentValidator::new();
    let result = validator.validate(&text, &args.document_type)?;

    if args.json {
        let mut output = serde_json::json!({ "validation": result });
        if args.analyze {
            output["analysis"] = serde_json::json!(analysis::analyze_document(&text));
        }
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    print_report(&result);

    if args.analyze {
        let doc_analysis = analysis::analyze_document(&text);
        println!("\nFORM FIELDS DETECTED:");
        if doc_analysis.form_fields.is_empty() {
            println!("  <none>");
        }
        for hint in &doc_analysis.form_fields {
            println!(
                "  {} (confidence {:.2}{})",
                hint.name,
                hint.confidence,
                if hint.required { ", required" } else { "" }
            );
        }
        println!("Form completeness: {:.0}%", doc_analysis.completeness * 100.0);
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error validating document: {}", err);
        std::process::exit(1);
    }
}
