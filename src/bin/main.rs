//! Portal CLI - execute mock analytical runs from the command line.
//!
//! Usage:
//!   portal run --domain sales --from 2024-01-01 --to 2024-01-31 --select regions=DACH
//!   portal preview --domain finance --select cost_centers=CC100
//!   portal schema --domain procurement
//!   portal filters --domain sales
//!   portal demo

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use dataportal::model::{FilterKind, RawFilters, Run};
use dataportal::sql::verify::validate_sql;
use dataportal::{Dialect, Domain, Portal, RunRequest, Settings};

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Data portal demo - mocked KPI runs over gold tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a run and archive it
    Run {
        /// Business domain
        #[arg(short, long)]
        domain: DomainArg,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the run as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render SQL and results without archiving
    Preview {
        /// Business domain
        #[arg(short, long)]
        domain: DomainArg,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print gold-table DDL
    Schema {
        /// Business domain (all domains if omitted)
        #[arg(short, long)]
        domain: Option<DomainArg>,

        /// SQL dialect to render
        #[arg(long, default_value = "postgres")]
        dialect: DialectArg,

        /// Verify the DDL parses before printing
        #[arg(long)]
        check: bool,
    },

    /// Print a domain's filter contract
    Filters {
        /// Business domain
        #[arg(short, long)]
        domain: DomainArg,
    },

    /// Execute one unfiltered run per domain, then list the archive
    Demo,
}

#[derive(Args)]
struct FilterArgs {
    /// Range lower bound (YYYY-MM-DD, or YYYY-MM for finance)
    #[arg(long)]
    from: Option<String>,

    /// Range upper bound (YYYY-MM-DD, or YYYY-MM for finance)
    #[arg(long)]
    to: Option<String>,

    /// Multi-select filter, repeatable (e.g. --select regions=DACH)
    #[arg(long = "select", value_name = "FIELD=VALUE")]
    select: Vec<String>,
}

impl FilterArgs {
    fn to_raw(&self) -> Result<RawFilters, String> {
        let mut raw = RawFilters::new();
        raw.range_from = self.from.clone();
        raw.range_to = self.to.clone();
        for item in &self.select {
            let (field, value) = item
                .split_once('=')
                .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", item))?;
            raw = raw.select(field, [value]);
        }
        Ok(raw)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DomainArg {
    Sales,
    Procurement,
    Finance,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Sales => Domain::Sales,
            DomainArg::Procurement => Domain::Procurement,
            DomainArg::Finance => Domain::Finance,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Postgres,
    Ansi,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Postgres => Dialect::Postgres,
            DialectArg::Ansi => Dialect::Ansi,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load_or_default() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let portal = Portal::new(settings);

    match cli.command {
        Commands::Run {
            domain,
            filters,
            json,
        } => cmd_run(&portal, domain.into(), &filters, json),
        Commands::Preview {
            domain,
            filters,
            json,
        } => cmd_preview(&portal, domain.into(), &filters, json),
        Commands::Schema {
            domain,
            dialect,
            check,
        } => cmd_schema(domain.map(Into::into), dialect.into(), check),
        Commands::Filters { domain } => cmd_filters(&portal, domain.into()),
        Commands::Demo => cmd_demo(&portal),
    }
}

fn cmd_run(portal: &Portal, domain: Domain, filters: &FilterArgs, json: bool) -> ExitCode {
    let raw = match filters.to_raw() {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match portal.execute(&RunRequest::with_filters(domain, raw)) {
        Ok(run) => {
            if json {
                print_json(&*run)
            } else {
                print_run(&run);
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_preview(portal: &Portal, domain: Domain, filters: &FilterArgs, json: bool) -> ExitCode {
    let raw = match filters.to_raw() {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match portal.preview(&RunRequest::with_filters(domain, raw)) {
        Ok(outcome) => {
            if json {
                return print_json(&outcome.results);
            }
            println!("{} (preview)", domain.title());
            println!("Filters: {}", outcome.filters.summary());
            println!();
            println!("{}", outcome.query.select_sql);
            println!();
            print_kpis(&outcome.results.kpis);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_schema(domain: Option<Domain>, dialect: Dialect, check: bool) -> ExitCode {
    let domains: Vec<Domain> = match domain {
        Some(domain) => vec![domain],
        None => Domain::ALL.to_vec(),
    };

    for domain in domains {
        let schema = dataportal::model::Schema::of(domain);
        let ddl = schema.ddl_sql(dialect);
        if check {
            if let Err(e) = validate_sql(&ddl, dialect) {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        println!("-- {} ({})", schema.qualified_name(), schema.description);
        println!("{}", ddl);
        println!();
    }
    ExitCode::SUCCESS
}

fn cmd_filters(portal: &Portal, domain: Domain) -> ExitCode {
    let spec = portal.filter_spec(domain);
    println!("Filter contract for {}:", domain.title());
    for field in &spec.fields {
        match field.kind {
            FilterKind::DateRange => {
                println!("  {} - date range (YYYY-MM-DD)", field.name);
            }
            FilterKind::PeriodRange => {
                println!("  {} - period range (YYYY-MM)", field.name);
            }
            FilterKind::MultiSelect => {
                println!(
                    "  {} - multi-select on {}: {}",
                    field.name,
                    field.column,
                    field.allowed.join(", ")
                );
            }
        }
    }
    ExitCode::SUCCESS
}

fn cmd_demo(portal: &Portal) -> ExitCode {
    for domain in Domain::ALL {
        match portal.execute(&RunRequest::new(domain)) {
            Ok(run) => print_run(&run),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        println!();
    }

    println!("Archive ({} runs, newest first):", portal.run_count(None));
    for run in portal.archive(None) {
        println!("  {}  {}", run.id, run.display_name());
    }
    ExitCode::SUCCESS
}

fn print_run(run: &Run) {
    println!("{}  {}", run.id, run.display_name());
    println!(
        "Executed at: {}",
        run.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!();
    println!("{}", run.query.select_sql);
    println!();
    print_kpis(&run.results.kpis);

    let trends = &run.results.trends;
    println!();
    println!(
        "Trend ({} months): {}",
        trends.months.len(),
        trends.months.join(" ")
    );
    for line in &trends.lines {
        let values: Vec<String> = line.values.iter().map(|v| format!("{:.0}", v)).collect();
        println!("  {:<10} {}", line.name, values.join(" "));
    }

    let breakdown = &run.results.breakdown;
    println!();
    println!("Breakdown by {}:", breakdown.dimension);
    for row in &breakdown.rows {
        println!("  {:<16} {:.2}", row.label, row.value);
    }
}

fn print_kpis(kpis: &dataportal::model::KpiResult) {
    println!("KPIs:");
    for (name, value) in kpis {
        println!("  {:<18} {}", name, value);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}
