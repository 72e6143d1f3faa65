use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use esg_supplier_portal::config::AppConfig;
use esg_supplier_portal::error::AppError;
use esg_supplier_portal::portal::compliance::{
    fleet_report, record_upload, supplier_report, CategoryCatalog, CategoryId, Supplier,
    SupplierComplianceReport, UploadRequest,
};
use esg_supplier_portal::portal::fixtures;
use esg_supplier_portal::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "ESG Supplier Portal",
    about = "Score supplier ESG compliance and review fleet-wide risk from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize fleet-wide supplier risk for the buyer dashboard (default)
    Fleet(FleetArgs),
    /// Show one supplier's compliance report
    Supplier(SupplierArgs),
    /// Simulate a document upload and show the updated checklist
    Upload(UploadArgs),
    /// List the ESG categories and their required documents
    Categories,
}

#[derive(Args, Debug, Default)]
struct FleetArgs {
    /// JSON supplier fixture file (defaults to the built-in seed roster)
    #[arg(long)]
    suppliers: Option<PathBuf>,
    /// Emit the dashboard as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SupplierArgs {
    /// Supplier id to report on
    #[arg(long)]
    id: String,
    /// JSON supplier fixture file (defaults to the built-in seed roster)
    #[arg(long)]
    suppliers: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct UploadArgs {
    /// Supplier id receiving the document
    #[arg(long)]
    supplier: String,
    /// Category key, e.g. carbonEmissions
    #[arg(long, value_parser = parse_category)]
    category: CategoryId,
    /// Document type label; exact matches against the checklist count
    #[arg(long)]
    document_type: String,
    /// File name to record
    #[arg(long)]
    file_name: String,
    /// File size in bytes
    #[arg(long, default_value_t = 1_048_576)]
    size_bytes: u64,
    /// Upload date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    uploaded_on: Option<NaiveDate>,
    /// JSON supplier fixture file (defaults to the built-in seed roster)
    #[arg(long)]
    suppliers: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "esg supplier portal starting");

    let command = cli.command.unwrap_or_else(|| Command::Fleet(FleetArgs::default()));

    match command {
        Command::Fleet(args) => run_fleet(&config, args),
        Command::Supplier(args) => run_supplier(&config, args),
        Command::Upload(args) => run_upload(&config, args),
        Command::Categories => {
            render_categories(&CategoryCatalog::standard());
            Ok(())
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_category(raw: &str) -> Result<CategoryId, String> {
    CategoryId::from_key(raw.trim()).map_err(|err| err.to_string())
}

fn load_roster(
    config: &AppConfig,
    override_path: Option<PathBuf>,
) -> Result<Vec<Supplier>, AppError> {
    let path = override_path.or_else(|| config.fixtures.suppliers_path.clone());
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading supplier fixtures");
            Ok(fixtures::load_suppliers(&path)?)
        }
        None => Ok(fixtures::seed_suppliers()),
    }
}

fn find_supplier<'a>(roster: &'a [Supplier], id: &str) -> Result<&'a Supplier, AppError> {
    roster
        .iter()
        .find(|supplier| supplier.id == id)
        .ok_or_else(|| AppError::SupplierNotFound(id.to_owned()))
}

fn run_fleet(config: &AppConfig, args: FleetArgs) -> Result<(), AppError> {
    let roster = load_roster(config, args.suppliers)?;
    let dashboard = fleet_report(&roster);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&dashboard).map_err(std::io::Error::from)?
        );
        return Ok(());
    }

    println!("Supplier risk dashboard");
    println!("Suppliers tracked: {}", dashboard.summary.total_suppliers());
    match dashboard.summary.average_score {
        Some(average) => println!("Average ESG score: {average}"),
        None => println!("Average ESG score: n/a (no suppliers loaded)"),
    }

    println!("\nRisk distribution");
    println!("- Low Risk: {}", dashboard.summary.low);
    println!("- Medium Risk: {}", dashboard.summary.medium);
    println!("- High Risk: {}", dashboard.summary.high);

    if !dashboard.suppliers.is_empty() {
        println!("\nSuppliers");
        for row in &dashboard.suppliers {
            println!(
                "- [{}] {} | {} | score {} | {} | {} document(s), {} risk event(s)",
                row.id,
                row.name,
                row.location,
                row.esg_score,
                row.risk_label,
                row.document_count,
                row.risk_event_count
            );
        }
    }

    Ok(())
}

fn run_supplier(config: &AppConfig, args: SupplierArgs) -> Result<(), AppError> {
    let roster = load_roster(config, args.suppliers)?;
    let supplier = find_supplier(&roster, &args.id)?;
    let catalog = CategoryCatalog::standard();
    let report = supplier_report(&catalog, supplier);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?
        );
        return Ok(());
    }

    render_supplier_report(&report);
    Ok(())
}

fn run_upload(config: &AppConfig, args: UploadArgs) -> Result<(), AppError> {
    let mut roster = load_roster(config, args.suppliers)?;
    let supplier = roster
        .iter_mut()
        .find(|supplier| supplier.id == args.supplier)
        .ok_or_else(|| AppError::SupplierNotFound(args.supplier.clone()))?;

    let catalog = CategoryCatalog::standard();
    let request = UploadRequest {
        file_name: args.file_name,
        size_bytes: args.size_bytes,
        uploaded_on: args.uploaded_on.unwrap_or_else(|| Local::now().date_naive()),
        category: args.category,
        document_type: args.document_type,
    };

    let created = record_upload(&catalog, supplier, request)?;
    info!(supplier = %supplier.id, document = %created.id, "document recorded");

    println!(
        "Uploaded '{}' ({}) for {} as document {} - pending review",
        created.name,
        created.size,
        created.category.key(),
        created.id
    );

    // Re-score the updated snapshot so the supplier sees fresh progress.
    let report = supplier_report(&catalog, supplier);
    render_supplier_report(&report);
    Ok(())
}

fn render_supplier_report(report: &SupplierComplianceReport) {
    println!("\nCompliance report: {}", report.supplier_name);
    println!("Location: {}", report.location);
    println!(
        "ESG score: {} ({}) | last audit {}",
        report.esg_score, report.risk_label, report.last_audit
    );
    if report.certifications.is_empty() {
        println!("Certifications: none on file");
    } else {
        println!("Certifications: {}", report.certifications.join(", "));
    }
    println!(
        "Overall document completion: {:.1}%",
        report.overall_completion_percent
    );

    if !report.category_scores.is_empty() {
        println!("\nCategory scores");
        for entry in &report.category_scores {
            println!(
                "- {}: {} ({})",
                entry.category_label,
                entry.score,
                entry.tier.label()
            );
        }
    }

    println!("\nDocument checklist");
    for entry in &report.checklist {
        let state = if entry.complete { "complete" } else { "open" };
        println!(
            "- {}: {}/{} required documents ({:.0}%, {})",
            entry.category_label, entry.satisfied, entry.total, entry.percentage, state
        );
    }

    if report.documents.is_empty() {
        println!("\nUploaded documents: none");
    } else {
        println!("\nUploaded documents");
        for document in &report.documents {
            println!(
                "- {} | {} | {} | uploaded {} | {}",
                document.name,
                document.document_type,
                document.size,
                document.upload_date,
                document.status_label
            );
        }
    }

    if report.risk_events.is_empty() {
        println!("\nRisk events: none");
    } else {
        println!("\nRisk events");
        for event in &report.risk_events {
            println!(
                "- [{}] {} ({}): {}",
                event.severity_label, event.event_type, event.date, event.description
            );
        }
    }
}

fn render_categories(catalog: &CategoryCatalog) {
    println!("ESG categories");
    for category in catalog.categories() {
        println!("\n{} ({})", category.name, category.id.key());
        println!("  {}", category.description);
        for required in &category.required_documents {
            println!("  - {required}");
        }
    }
}
