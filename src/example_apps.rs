//! Reusable demo runners shared by the `demos/` wrappers.
//!
//! These drive the engine the way a host UI would: build a source, apply
//! one `QueryState`, and render the resulting page window as text cards or
//! JSON. They double as executable documentation of the caller contract
//! (option lists, slider defaults, placeholder policy).

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::constants::{filters::ALL_OPTION, paging};
use crate::data::{CellValue, ProgramRecord, RawRow, SheetGroup, text_or_placeholder};
use crate::filter::{CategoricalField, FilterSpec, TuitionRange};
use crate::query::{QueryOutcome, QueryState};
use crate::source::{CsvWorkbookConfig, CsvWorkbookSource, InMemorySheetSource, SheetSource};

#[derive(Debug, Parser)]
#[command(
    name = "search_demo",
    disable_help_subcommand = true,
    about = "Filter and page a program catalog from the command line",
    after_help = "Without --workbook, a small built-in sample catalog is used."
)]
struct SearchDemoCli {
    #[arg(
        long,
        value_name = "DIR",
        help = "Workbook directory with one CSV file per sheet"
    )]
    workbook: Option<PathBuf>,
    #[arg(long, default_value = ALL_OPTION, help = "Exact major filter")]
    major: String,
    #[arg(long, default_value = ALL_OPTION, help = "Exact country filter")]
    country: String,
    #[arg(long = "level", default_value = ALL_OPTION, help = "Exact program level filter")]
    program_level: String,
    #[arg(long, default_value = ALL_OPTION, help = "Exact field filter")]
    field: String,
    #[arg(long = "institution", default_value = ALL_OPTION, help = "Exact institution type filter")]
    institution_type: String,
    #[arg(long, help = "Inclusive tuition lower bound")]
    tuition_min: Option<f64>,
    #[arg(long, help = "Inclusive tuition upper bound")]
    tuition_max: Option<f64>,
    #[arg(long, default_value = "", help = "Case-insensitive name/speciality search")]
    search: String,
    #[arg(long, default_value_t = 1, help = "1-based page to display")]
    page: usize,
    #[arg(long, default_value_t = paging::DEFAULT_PAGE_SIZE, help = "Records per page")]
    page_size: usize,
    #[arg(long, help = "Print the page as JSON instead of text cards")]
    json: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "filter_options_demo",
    disable_help_subcommand = true,
    about = "Print the derived filter option lists for a catalog"
)]
struct FilterOptionsDemoCli {
    #[arg(
        long,
        value_name = "DIR",
        help = "Workbook directory with one CSV file per sheet"
    )]
    workbook: Option<PathBuf>,
}

/// Run the interactive search demo with the given argument iterator.
pub fn run_search_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();
    let Some(cli) = parse_cli::<SearchDemoCli, _>(
        std::iter::once("search_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = CatalogConfig::default();
    config.page_size = cli.page_size;

    match workbook_source(cli.workbook.clone()) {
        Some(source) => search_with(Catalog::new(source, config), cli),
        None => search_with(Catalog::new(sample_source(), config), cli),
    }
}

/// Run the option-list demo with the given argument iterator.
pub fn run_filter_options_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();
    let Some(cli) = parse_cli::<FilterOptionsDemoCli, _>(
        std::iter::once("filter_options_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    match workbook_source(cli.workbook) {
        Some(source) => print_options(Catalog::new(source, CatalogConfig::default())),
        None => print_options(Catalog::new(sample_source(), CatalogConfig::default())),
    }
}

fn search_with<S: SheetSource>(catalog: Catalog<S>, cli: SearchDemoCli) -> Result<(), Box<dyn Error>> {
    let tuition = tuition_range(&catalog, cli.tuition_min, cli.tuition_max)?;
    let mut state = QueryState::new();
    state.apply_filters(FilterSpec {
        major: FilterSpec::selection(cli.major),
        country: FilterSpec::selection(cli.country),
        program_level: FilterSpec::selection(cli.program_level),
        field: FilterSpec::selection(cli.field),
        institution_type: FilterSpec::selection(cli.institution_type),
        tuition,
        search_query: cli.search,
    });
    state.current_page = cli.page;

    let outcome = catalog.query(&state)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome.records)?);
        return Ok(());
    }
    print_page(&outcome);
    Ok(())
}

/// Fill a half-open CLI range from the observed bounds, the way a UI
/// slider would.
fn tuition_range<S: SheetSource>(
    catalog: &Catalog<S>,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<Option<TuitionRange>, Box<dyn Error>> {
    if min.is_none() && max.is_none() {
        return Ok(None);
    }
    let observed = catalog.observed_tuition_range()?;
    let fallback = observed.unwrap_or(TuitionRange {
        min: 0.0,
        max: f64::MAX,
    });
    Ok(Some(TuitionRange {
        min: min.unwrap_or(fallback.min),
        max: max.unwrap_or(fallback.max),
    }))
}

fn print_page(outcome: &QueryOutcome) {
    if outcome.records.is_empty() {
        println!("No programs match the current filters.");
    }
    for record in &outcome.records {
        print_card(record);
    }
    println!(
        "Page {} of {} ({} matches)",
        outcome.current_page, outcome.total_pages, outcome.total_matches
    );
    if outcome.truncated {
        println!("Results were sampled down to the configured cap.");
    }
}

fn print_card(record: &ProgramRecord) {
    println!("{}", text_or_placeholder(record.university_name.as_deref()));
    println!("  {}", text_or_placeholder(record.speciality.as_deref()));
    println!(
        "  Location: {}, {}",
        text_or_placeholder(record.city.as_deref()),
        text_or_placeholder(record.country.as_deref())
    );
    println!(
        "  Tuition: {}/Year",
        price_label(record.tuition_price, record.tuition_currency.as_deref())
    );
    println!(
        "  Application Fee: {}",
        price_label(
            record.application_fee_price,
            record.application_fee_currency.as_deref()
        )
    );
    println!(
        "  Duration: {}  Level: {}",
        text_or_placeholder(record.duration.as_deref()),
        text_or_placeholder(record.program_level.as_deref())
    );
    if !record.tags.is_empty() {
        println!("  Tags: {}", record.tags.join(", "));
    }
    println!();
}

fn price_label(price: Option<f64>, currency: Option<&str>) -> String {
    match price {
        Some(price) => format!("${:.0} {}", price, text_or_placeholder(currency)),
        None => text_or_placeholder(None).to_string(),
    }
}

fn print_options<S: SheetSource>(catalog: Catalog<S>) -> Result<(), Box<dyn Error>> {
    for (label, field) in [
        ("Major", CategoricalField::Major),
        ("Country", CategoricalField::Country),
        ("Program Level", CategoricalField::ProgramLevel),
        ("Field", CategoricalField::Field),
        ("Institution Type", CategoricalField::InstitutionType),
    ] {
        println!("{label}: {}", catalog.filter_options(field)?.join(", "));
    }
    if let Some(range) = catalog.observed_tuition_range()? {
        println!("Tuition range: {:.0} - {:.0}", range.min, range.max);
    }
    Ok(())
}

fn workbook_source(root: Option<PathBuf>) -> Option<CsvWorkbookSource> {
    root.map(|root| CsvWorkbookSource::new(CsvWorkbookConfig::new("workbook", root)))
}

/// Built-in two-sheet sample catalog so the demos run without any files.
fn sample_source() -> InMemorySheetSource {
    let undergrad = [
        ("McGill University", "Software Engineering", "Engineering", "Canada", "Montreal", "Bachelor", "Public", "21000"),
        ("University of Toronto", "English Literature", "Arts", "Canada", "Toronto", "Bachelor", "Public", "28500"),
        ("TU Munich", "Mechanical Engineering", "Engineering", "Germany", "Munich", "Bachelor", "Public", "300"),
        ("Bocconi University", "Economics", "Business", "Italy", "Milan", "Bachelor", "Private", "15600"),
        ("Concordia University", "Fine Arts", "Arts", "Canada", "Montreal", "Bachelor", "Public", "N/A"),
    ];
    let graduate = [
        ("ETH Zurich", "Quantum Physics", "Science", "Switzerland", "Zurich", "Master", "Public", "1500"),
        ("McGill University", "Data Science", "Science", "Canada", "Montreal", "Master", "Public", "24000"),
        ("Politecnico di Milano", "Architecture", "Engineering", "Italy", "Milan", "Master", "Public", "4000"),
    ];

    let build = |entries: &[(&str, &str, &str, &str, &str, &str, &str, &str)]| {
        entries
            .iter()
            .copied()
            .map(|(uni, spec, field, country, city, level, kind, tuition)| {
                sample_row(uni, spec, field, country, city, level, kind, tuition)
            })
            .collect::<Vec<RawRow>>()
    };

    InMemorySheetSource::new(
        "sample_programs",
        vec![
            SheetGroup {
                name: "Undergraduate".to_string(),
                rows: build(&undergrad),
            },
            SheetGroup {
                name: "Graduate".to_string(),
                rows: build(&graduate),
            },
        ],
    )
}

#[allow(clippy::too_many_arguments)]
fn sample_row(
    university: &str,
    speciality: &str,
    field: &str,
    country: &str,
    city: &str,
    level: &str,
    institution_type: &str,
    tuition: &str,
) -> RawRow {
    let cells = [
        ("University Name", university),
        ("Speciality", speciality),
        ("Major", speciality),
        ("Field", field),
        ("Country", country),
        ("City", city),
        ("Level", level),
        ("Institution Type", institution_type),
        ("Tuition Price", tuition),
        ("Tuition Currency", "CAD"),
        ("Duration", "4 Years"),
    ];
    cells
        .iter()
        .map(|(name, value)| (name.to_string(), CellValue::Text(value.to_string())))
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
