use std::process;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;

use paccommers_roster::{
    load_roster_file, process_entry, process_roster, MemberOutcome, RosterEntry, RosterError,
};
use paccommers_tier::{MembershipRecord, Tier};

mod render;

use render::{format_amount, format_rupiah, grid_table};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Predict PacCommers membership tiers and price baskets at the tier discount.
#[derive(Debug, Parser)]
#[command(name = "paccommers", version, allow_negative_numbers = true)]
struct Cli {
    /// Member name.
    #[arg(long, default_value = "Kresna")]
    username: String,

    /// Monthly expense, in millions of Rupiah.
    #[arg(long, default_value_t = 7.0)]
    expense: f64,

    /// Monthly income, in millions of Rupiah.
    #[arg(long, default_value_t = 12.0)]
    income: f64,

    /// Comma-separated item prices in Rupiah. An empty value is an empty basket.
    #[arg(long, value_parser = parse_basket, default_value = "500000,750000,1200000")]
    items: Basket,

    /// Process every member in a roster CSV instead of a single member.
    #[arg(long, conflicts_with_all = ["username", "expense", "income", "items"])]
    roster: Option<String>,

    /// Output as JSON instead of formatted tables.
    #[arg(long)]
    json: bool,

    /// Do not print the benefit and requirement tables.
    #[arg(long)]
    skip_tables: bool,
}

/// Item prices given on the command line.
#[derive(Clone, Debug, PartialEq)]
struct Basket(Vec<f64>);

fn parse_basket(s: &str) -> Result<Basket, String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<f64>()
                .map_err(|_| format!("expected item price, got '{}'", p))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Basket)
}

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportJson {
    generated_at: String,
    members: Vec<MemberJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SummaryJson>,
}

#[derive(Serialize)]
struct DistanceJson {
    tier: Tier,
    distance: f64,
}

#[derive(Serialize)]
struct MemberJson {
    username: String,
    monthly_expense: f64,
    monthly_income: f64,
    membership: Tier,
    distances: Vec<DistanceJson>,
    total_price: f64,
    discount_rate: f64,
    final_price: f64,
}

#[derive(Serialize)]
struct TierCountJson {
    tier: Tier,
    members: usize,
}

#[derive(Serialize)]
struct SummaryJson {
    total_members: usize,
    tier_counts: Vec<TierCountJson>,
    gross_total: f64,
    net_total: f64,
    total_discount: f64,
}

fn member_json(outcome: &MemberOutcome) -> MemberJson {
    MemberJson {
        username: outcome.record.username.clone(),
        monthly_expense: outcome.record.monthly_expense,
        monthly_income: outcome.record.monthly_income,
        membership: outcome.classification.tier,
        distances: outcome
            .classification
            .distances
            .iter()
            .map(|d| DistanceJson {
                tier: d.tier,
                distance: d.distance,
            })
            .collect(),
        total_price: outcome.quote.total_price,
        discount_rate: outcome.quote.discount_rate,
        final_price: outcome.quote.final_price,
    }
}

fn print_json(report: &ReportJson) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_benefits() {
    let rows: Vec<Vec<String>> = Tier::ALL
        .iter()
        .map(|tier| {
            vec![
                tier.display_name().to_string(),
                tier.discount_label().to_string(),
                tier.benefits().join("\n"),
            ]
        })
        .collect();

    println!();
    println!("=== MEMBERSHIP BENEFITS ===");
    println!("{}", grid_table(&["Tier", "Discount", "Benefits"], &rows));
}

fn print_requirements() {
    let rows: Vec<Vec<String>> = Tier::ALL
        .iter()
        .map(|tier| {
            let p = tier.reference_point();
            vec![
                tier.display_name().to_string(),
                format!("{}", p.expense),
                format!("{}", p.income),
            ]
        })
        .collect();

    println!();
    println!("=== MEMBERSHIP REQUIREMENTS ===");
    println!(
        "{}",
        grid_table(
            &["Tier", "Monthly Expense (million)", "Monthly Income (million)"],
            &rows
        )
    );
}

fn print_prediction(outcome: &MemberOutcome) {
    let rows: Vec<Vec<String>> = outcome
        .classification
        .distances
        .iter()
        .map(|d| vec![d.tier.display_name().to_string(), format!("{:.2}", d.distance)])
        .collect();

    println!();
    println!("=== PREDICTION RESULT ===");
    println!("User: {}", outcome.record.username);
    println!(
        "Expense: {} million | Income: {} million",
        outcome.record.monthly_expense, outcome.record.monthly_income
    );
    println!();
    println!("{}", grid_table(&["Tier", "Euclidean Distance"], &rows));
    println!();
    println!(
        "Predicted Membership: {}",
        outcome.classification.tier.display_name()
    );
}

fn print_checkout(outcome: &MemberOutcome) {
    let quote = &outcome.quote;
    let membership = quote
        .membership
        .map(|t| t.display_name())
        .unwrap_or("NONE");
    let rows = vec![
        vec!["Total Price".to_string(), format_rupiah(quote.total_price, 0)],
        vec!["Membership".to_string(), membership.to_string()],
        vec![
            "Discount".to_string(),
            format!("{:.0}%", quote.discount_rate * 100.0),
        ],
        vec!["Final Price".to_string(), format_rupiah(quote.final_price, 2)],
    ];

    println!();
    println!("=== TOTAL PAYMENT ===");
    println!("{}", grid_table(&["Description", "Amount"], &rows));
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

fn run_single(cli: &Cli) -> Result<(), RosterError> {
    let entry = RosterEntry {
        record: MembershipRecord::new(cli.username.clone(), cli.expense, cli.income),
        items: cli.items.0.clone(),
    };
    let outcome = process_entry(entry)?;

    if cli.json {
        print_json(&ReportJson {
            generated_at: Utc::now().to_rfc3339(),
            members: vec![member_json(&outcome)],
            summary: None,
        });
        return Ok(());
    }

    if !cli.skip_tables {
        print_benefits();
        print_requirements();
    }
    print_prediction(&outcome);
    print_checkout(&outcome);
    println!();
    Ok(())
}

fn run_roster(cli: &Cli, path: &str) -> Result<(), RosterError> {
    let entries = load_roster_file(path)?;
    let report = process_roster(entries)?;

    if cli.json {
        print_json(&ReportJson {
            generated_at: Utc::now().to_rfc3339(),
            members: report.members.iter().map(member_json).collect(),
            summary: Some(SummaryJson {
                total_members: report.members.len(),
                tier_counts: report
                    .tier_counts
                    .iter()
                    .map(|c| TierCountJson {
                        tier: c.tier,
                        members: c.members,
                    })
                    .collect(),
                gross_total: report.gross_total,
                net_total: report.net_total,
                total_discount: report.total_discount(),
            }),
        });
        return Ok(());
    }

    if !cli.skip_tables {
        print_benefits();
        print_requirements();
    }
    for outcome in &report.members {
        print_prediction(outcome);
        print_checkout(outcome);
    }

    let counts: Vec<String> = report
        .tier_counts
        .iter()
        .map(|c| format!("{} {}", c.members, c.tier.display_name()))
        .collect();
    println!();
    println!(
        "{} members  \u{00b7}  {}  \u{00b7}  Rp {} gross  \u{00b7}  Rp {} net",
        report.members.len(),
        counts.join(", "),
        format_amount(report.gross_total, 0),
        format_amount(report.net_total, 2),
    );
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let result = match cli.roster.as_deref() {
        Some(path) => run_roster(&cli, path),
        None => run_single(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
