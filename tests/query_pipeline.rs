use unicatalog::{
    Catalog, CatalogConfig, CatalogError, CategoricalField, CellValue, FilterSpec, QueryState,
    RawRow, SheetGroup, SheetSource, TuitionRange,
};

fn build_row(
    university: &str,
    speciality: &str,
    country: &str,
    level: &str,
    tuition: &str,
) -> RawRow {
    let cells = [
        ("University Name", university),
        ("Speciality", speciality),
        ("Country", country),
        ("Level", level),
        ("Institution Type", "Public"),
        ("Tuition Price", tuition),
        ("Tuition Currency", "CAD"),
    ];
    cells
        .iter()
        .map(|(name, value)| (name.to_string(), CellValue::Text(value.to_string())))
        .collect()
}

fn numbered_sheet(name: &str, count: usize, country: &str) -> SheetGroup {
    let rows = (0..count)
        .map(|idx| {
            build_row(
                &format!("{name} University {idx:02}"),
                "Software Engineering",
                country,
                "Bachelor",
                &format!("{}", 10_000 + idx * 100),
            )
        })
        .collect();
    SheetGroup {
        name: name.to_string(),
        rows,
    }
}

fn catalog_with(
    groups: Vec<SheetGroup>,
    config: CatalogConfig,
) -> Catalog<unicatalog::InMemorySheetSource> {
    Catalog::new(
        unicatalog::InMemorySheetSource::new("pipeline_fixture", groups),
        config,
    )
}

struct UnreachableSource;

impl SheetSource for UnreachableSource {
    fn id(&self) -> &str {
        "unreachable"
    }

    fn fetch_groups(&self) -> Result<Vec<SheetGroup>, CatalogError> {
        Err(CatalogError::FetchFailed {
            source_id: "unreachable".to_string(),
            reason: "backend offline".to_string(),
        })
    }
}

#[test]
fn identity_query_serves_the_first_window_in_source_order() {
    let catalog = catalog_with(
        vec![numbered_sheet("alpha", 3, "Canada"), numbered_sheet("beta", 2, "Germany")],
        CatalogConfig::default(),
    );
    let outcome = catalog.query(&QueryState::new()).expect("query");

    assert_eq!(outcome.total_matches, 5);
    assert_eq!(outcome.total_pages, 1);
    assert_eq!(outcome.current_page, 1);
    assert!(!outcome.truncated);
    let names: Vec<&str> = outcome
        .records
        .iter()
        .filter_map(|record| record.university_name.as_deref())
        .collect();
    assert_eq!(
        names,
        vec![
            "alpha University 00",
            "alpha University 01",
            "alpha University 02",
            "beta University 00",
            "beta University 01",
        ]
    );
}

#[test]
fn second_page_window_matches_the_documented_boundary() {
    // 25 items at 16 per page: page 2 holds items 16..25.
    let catalog = catalog_with(
        vec![numbered_sheet("alpha", 25, "Canada")],
        CatalogConfig::default(),
    );
    let mut state = QueryState::new();
    state.next_page();

    let outcome = catalog.query(&state).expect("query");
    assert_eq!(outcome.total_pages, 2);
    assert_eq!(outcome.current_page, 2);
    assert_eq!(outcome.records.len(), 9);
    assert_eq!(
        outcome.records[0].university_name.as_deref(),
        Some("alpha University 16")
    );
}

#[test]
fn out_of_range_page_requests_clamp_instead_of_failing() {
    let catalog = catalog_with(
        vec![numbered_sheet("alpha", 25, "Canada")],
        CatalogConfig::default(),
    );
    let mut state = QueryState::new();
    state.current_page = 99;

    let outcome = catalog.query(&state).expect("query");
    assert_eq!(outcome.current_page, 2);
    assert_eq!(outcome.records.len(), 9);
}

#[test]
fn empty_match_set_is_a_normal_outcome() {
    let catalog = catalog_with(
        vec![numbered_sheet("alpha", 4, "Canada")],
        CatalogConfig::default(),
    );
    let mut state = QueryState::new();
    state.apply_filters(FilterSpec {
        country: Some("Atlantis".to_string()),
        ..FilterSpec::default()
    });

    let outcome = catalog.query(&state).expect("query");
    assert_eq!(outcome.total_matches, 0);
    assert_eq!(outcome.total_pages, 0);
    assert_eq!(outcome.current_page, 1);
    assert!(outcome.records.is_empty());
}

#[test]
fn filters_and_search_compose_through_the_facade() {
    let mut groups = vec![numbered_sheet("alpha", 6, "Canada"), numbered_sheet("beta", 6, "Germany")];
    groups[0].rows.push(build_row(
        "Gamma Institute",
        "Marine Biology",
        "Canada",
        "Master",
        "9000",
    ));
    let catalog = catalog_with(groups, CatalogConfig::default());

    let mut state = QueryState::new();
    state.apply_filters(FilterSpec {
        country: Some("Canada".to_string()),
        tuition: Some(TuitionRange {
            min: 9000.0,
            max: 10_200.0,
        }),
        ..FilterSpec::default()
    });
    state.apply_search("alpha");

    let outcome = catalog.query(&state).expect("query");
    let names: Vec<&str> = outcome
        .records
        .iter()
        .filter_map(|record| record.university_name.as_deref())
        .collect();
    assert_eq!(names, vec!["alpha University 00", "alpha University 01", "alpha University 02"]);
}

#[test]
fn sampling_cap_is_reported_and_reproducible_end_to_end() {
    let mut config = CatalogConfig::default();
    config.sample_cap = Some(10);

    let groups = vec![numbered_sheet("alpha", 30, "Canada"), numbered_sheet("beta", 30, "Germany")];
    let first = catalog_with(groups.clone(), config.clone())
        .query(&QueryState::new())
        .expect("query");
    let second = catalog_with(groups, config)
        .query(&QueryState::new())
        .expect("query");

    assert!(first.truncated);
    assert_eq!(first.total_matches, 10);
    assert_eq!(first.records, second.records);
}

#[test]
fn fetch_failures_surface_as_errors_not_empty_results() {
    let catalog = Catalog::new(UnreachableSource, CatalogConfig::default());
    let result = catalog.query(&QueryState::new());
    assert!(matches!(
        result,
        Err(CatalogError::FetchFailed { source_id, .. }) if source_id == "unreachable"
    ));
}

#[test]
fn option_lists_come_from_the_aggregated_snapshot() {
    let catalog = catalog_with(
        vec![numbered_sheet("alpha", 2, "Canada"), numbered_sheet("beta", 2, "Germany")],
        CatalogConfig::default(),
    );
    let options = catalog
        .filter_options(CategoricalField::Country)
        .expect("options");
    assert_eq!(options, vec!["All", "Canada", "Germany"]);

    let range = catalog
        .observed_tuition_range()
        .expect("range")
        .expect("known prices");
    assert_eq!(range.min, 10_000.0);
    assert_eq!(range.max, 10_100.0);
}

#[test]
fn unparsable_tuition_rows_survive_until_a_range_is_active() {
    let mut sheet = numbered_sheet("alpha", 2, "Canada");
    sheet.rows.push(build_row(
        "No Price College",
        "History",
        "Canada",
        "Bachelor",
        "N/A",
    ));
    let catalog = catalog_with(vec![sheet], CatalogConfig::default());

    let everything = catalog.query(&QueryState::new()).expect("query");
    assert_eq!(everything.total_matches, 3);

    let mut state = QueryState::new();
    state.apply_filters(FilterSpec {
        tuition: Some(TuitionRange {
            min: 0.0,
            max: 1_000_000.0,
        }),
        ..FilterSpec::default()
    });
    let priced_only = catalog.query(&state).expect("query");
    assert_eq!(priced_only.total_matches, 2);
}
