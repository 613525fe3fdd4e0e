//! Financial calculator CLI
//!
//! Command-line front end standing in for the page: it collects field
//! values, runs the calculators, and renders results with the 2-decimal
//! display the widgets use. `--json` emits the machine-readable form for
//! API integration.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use fincalc::loan::{amortization_schedule, AmortizationSchedule, LoanParameters};
use fincalc::portfolio::{load_lots, Lot, LotBook};
use fincalc::session::format_amount;
use fincalc::sip::{project_sip, SipParameters, SipProjection};

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Average cost, EMI, and SIP calculators")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Average purchase price over a set of lots
    Average {
        /// Lot given as PRICE:QTY, repeatable
        #[arg(long = "lot", value_name = "PRICE:QTY")]
        lots: Vec<String>,

        /// Load additional lots from a CSV file with Price,Quantity columns
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Loan installment breakdown with optional amortization schedule
    Emi {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Repayment term in months
        #[arg(long)]
        months: u32,

        /// Print the month-by-month schedule
        #[arg(long)]
        schedule: bool,

        /// Write the schedule to a CSV file
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// SIP growth projection with optional monthly detail
    Sip {
        /// First-year monthly contribution
        #[arg(long)]
        amount: f64,

        /// Investment horizon in years
        #[arg(long)]
        years: u32,

        /// Expected annual return in percent
        #[arg(long)]
        rate: f64,

        /// Annual step-up in percent
        #[arg(long, default_value_t = 0.0)]
        step_up: f64,

        /// Print the month-by-month projection
        #[arg(long)]
        schedule: bool,

        /// Write the projection rows to a CSV file
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Average { lots, csv, json } => run_average(&lots, csv.as_deref(), json),
        Command::Emi {
            principal,
            rate,
            months,
            schedule,
            out,
            json,
        } => run_emi(
            LoanParameters::new(principal, rate, months),
            schedule,
            out.as_deref(),
            json,
        ),
        Command::Sip {
            amount,
            years,
            rate,
            step_up,
            schedule,
            out,
            json,
        } => run_sip(
            SipParameters::new(amount, years, rate, step_up),
            schedule,
            out.as_deref(),
            json,
        ),
    }
}

/// JSON form of the average-cost result
#[derive(Serialize)]
struct AverageReport<'a> {
    lots: &'a [Lot],
    total_quantity: u64,
    total_cost: f64,
    average_price: f64,
}

fn run_average(entries: &[String], csv: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let mut book = LotBook::new();

    for entry in entries {
        match entry.split_once(':') {
            Some((price, quantity)) => {
                // Unparseable entries are skipped, same as the entry fields
                if !book.add_raw(price, quantity) {
                    log::warn!("skipping unparseable lot entry '{}'", entry);
                }
            }
            None => log::warn!("skipping lot entry '{}' (expected PRICE:QTY)", entry),
        }
    }

    if let Some(path) = csv {
        let loaded = load_lots(path)
            .with_context(|| format!("failed to load lots from {}", path.display()))?;
        log::info!("loaded {} lots from {}", loaded.len(), path.display());
        for lot in loaded.iter() {
            book.push(*lot);
        }
    }

    if json {
        let report = AverageReport {
            lots: book.lots(),
            total_quantity: book.total_quantity(),
            total_cost: book.total_cost(),
            average_price: book.average_price(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{:>4} {:>12} {:>8} {:>14}", "Lot", "Price", "Qty", "Cost");
    println!("{}", "-".repeat(42));
    for (index, lot) in book.iter().enumerate() {
        println!(
            "{:>4} {:>12.2} {:>8} {:>14.2}",
            index + 1,
            lot.price,
            lot.quantity,
            lot.cost()
        );
    }
    println!();
    println!("Average price: {}", format_amount(book.average_price()));

    Ok(())
}

fn run_emi(
    params: LoanParameters,
    print_schedule: bool,
    out: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let schedule = amortization_schedule(&params);
    log::info!(
        "amortized {} months at {}% annual",
        params.term_months,
        params.annual_rate_pct
    );

    if json {
        if print_schedule {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&schedule.breakdown)?);
        }
    } else {
        println!("EMI (per month): {:>14}", format_amount(schedule.breakdown.emi));
        println!("Total principal: {:>14}", format_amount(params.principal));
        println!(
            "Total interest:  {:>14}",
            format_amount(schedule.breakdown.total_interest)
        );
        println!(
            "Total amount:    {:>14}",
            format_amount(schedule.breakdown.total_amount)
        );

        if print_schedule {
            println!();
            println!(
                "{:>5} {:>14} {:>12} {:>12} {:>14}",
                "Month", "Opening", "Interest", "Principal", "Closing"
            );
            println!("{}", "-".repeat(62));
            for row in &schedule.rows {
                println!(
                    "{:>5} {:>14.2} {:>12.2} {:>12.2} {:>14.2}",
                    row.month,
                    row.opening_balance,
                    row.interest,
                    row.principal_component,
                    row.closing_balance
                );
            }
        }
    }

    if let Some(path) = out {
        write_amortization_csv(path, &schedule)?;
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}

fn run_sip(
    params: SipParameters,
    print_schedule: bool,
    out: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let projection = project_sip(&params);
    log::info!(
        "projected {} months at {}% annual return",
        params.total_months(),
        params.annual_return_pct
    );

    if json {
        if print_schedule {
            println!("{}", serde_json::to_string_pretty(&projection)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&projection.outcome)?);
        }
    } else {
        println!(
            "Expected amount: {:>14}",
            format_amount(projection.outcome.expected_amount)
        );
        println!(
            "Amount invested: {:>14}",
            format_amount(projection.outcome.total_invested)
        );
        println!(
            "Total gain:      {:>14}",
            format_amount(projection.outcome.total_gain)
        );

        if print_schedule {
            println!();
            println!(
                "{:>5} {:>5} {:>14} {:>16} {:>16}",
                "Month", "Year", "Contribution", "Future value", "Invested"
            );
            println!("{}", "-".repeat(60));
            for row in &projection.rows {
                println!(
                    "{:>5} {:>5} {:>14.2} {:>16.2} {:>16.2}",
                    row.month, row.year, row.contribution, row.future_value, row.invested_to_date
                );
            }
        }
    }

    if let Some(path) = out {
        write_sip_csv(path, &projection)?;
        println!("\nProjection written to: {}", path.display());
    }

    Ok(())
}

fn write_amortization_csv(path: &Path, schedule: &AmortizationSchedule) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(file, "Month,OpeningBalance,Interest,Principal,ClosingBalance")?;
    for row in &schedule.rows {
        writeln!(
            file,
            "{},{:.8},{:.8},{:.8},{:.8}",
            row.month, row.opening_balance, row.interest, row.principal_component, row.closing_balance
        )?;
    }

    Ok(())
}

fn write_sip_csv(path: &Path, projection: &SipProjection) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(file, "Month,Year,Contribution,FutureValue,InvestedToDate")?;
    for row in &projection.rows {
        writeln!(
            file,
            "{},{},{:.8},{:.8},{:.8}",
            row.month, row.year, row.contribution, row.future_value, row.invested_to_date
        )?;
    }

    Ok(())
}
