//! Filter criteria and fixed-order clause evaluation.
//!
//! Clauses narrow the working set in a documented order: categorical
//! equality filters first, then the tuition range, then free-text search.
//! The engine never reorders survivors and never sorts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::filters::ALL_OPTION;
use crate::data::ProgramRecord;
use crate::types::{FieldValue, SearchQuery};

/// Categorical record fields that support exact-match filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoricalField {
    /// Program major.
    Major,
    /// Host country.
    Country,
    /// Program level (Bachelor, Master, ...).
    ProgramLevel,
    /// Broad academic field.
    Field,
    /// Institution type (Public, Private, ...).
    InstitutionType,
}

impl CategoricalField {
    /// Clause application order. Fixed so narrowing is reproducible.
    pub const APPLY_ORDER: [CategoricalField; 5] = [
        CategoricalField::Major,
        CategoricalField::Country,
        CategoricalField::ProgramLevel,
        CategoricalField::Field,
        CategoricalField::InstitutionType,
    ];

    /// Borrow the record value backing this field.
    pub fn value<'a>(&self, record: &'a ProgramRecord) -> Option<&'a str> {
        match self {
            CategoricalField::Major => record.major.as_deref(),
            CategoricalField::Country => record.country.as_deref(),
            CategoricalField::ProgramLevel => record.program_level.as_deref(),
            CategoricalField::Field => record.field.as_deref(),
            CategoricalField::InstitutionType => record.institution_type.as_deref(),
        }
    }
}

/// Inclusive tuition bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TuitionRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl TuitionRange {
    /// True when `price` falls inside the bounds, both inclusive.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The active criteria for one query evaluation.
///
/// Constructed fresh per evaluation and applied whole: each `None`
/// categorical means the UI's `"All"` option (see [`FilterSpec::selection`]),
/// a `None` tuition range leaves that clause inactive, and an empty search
/// query disables the text clause. The all-defaults spec is an identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub major: Option<FieldValue>,
    pub country: Option<FieldValue>,
    pub program_level: Option<FieldValue>,
    pub field: Option<FieldValue>,
    pub institution_type: Option<FieldValue>,
    /// Inclusive tuition bounds; records without a known price are excluded
    /// while a range is active.
    pub tuition: Option<TuitionRange>,
    /// Case-insensitive substring matched against university name OR
    /// speciality.
    pub search_query: SearchQuery,
}

impl FilterSpec {
    /// Map a UI selection to a clause value, treating the sentinel as unset.
    pub fn selection(value: impl Into<FieldValue>) -> Option<FieldValue> {
        let value = value.into();
        (value != ALL_OPTION).then_some(value)
    }

    /// True when every clause is inactive and filtering is an identity.
    pub fn is_identity(&self) -> bool {
        CategoricalField::APPLY_ORDER
            .iter()
            .all(|field| self.categorical(*field).is_none())
            && self.tuition.is_none()
            && self.search_query.is_empty()
    }

    /// The active value for `field`, if any.
    pub fn categorical(&self, field: CategoricalField) -> Option<&FieldValue> {
        match field {
            CategoricalField::Major => self.major.as_ref(),
            CategoricalField::Country => self.country.as_ref(),
            CategoricalField::ProgramLevel => self.program_level.as_ref(),
            CategoricalField::Field => self.field.as_ref(),
            CategoricalField::InstitutionType => self.institution_type.as_ref(),
        }
    }
}

/// Apply `spec` to `records` clause by clause, preserving input order.
///
/// A record with a null field never matches an active clause on that field;
/// nulls are non-matching, never an error.
pub fn filter(records: &[ProgramRecord], spec: &FilterSpec) -> Vec<ProgramRecord> {
    let mut survivors: Vec<ProgramRecord> = records.to_vec();

    for field in CategoricalField::APPLY_ORDER {
        if let Some(wanted) = spec.categorical(field) {
            survivors.retain(|record| field.value(record) == Some(wanted.as_str()));
        }
    }

    if let Some(range) = spec.tuition {
        survivors.retain(|record| {
            record
                .tuition_price
                .is_some_and(|price| range.contains(price))
        });
    }

    if !spec.search_query.is_empty() {
        let needle = spec.search_query.to_lowercase();
        survivors.retain(|record| {
            text_contains(record.university_name.as_deref(), &needle)
                || text_contains(record.speciality.as_deref(), &needle)
        });
    }

    survivors
}

fn text_contains(field: Option<&str>, lowercase_needle: &str) -> bool {
    field.is_some_and(|text| text.to_lowercase().contains(lowercase_needle))
}

/// Build the UI option list for `field`: sorted distinct non-null values
/// with the `"All"` sentinel prepended.
pub fn filter_options(records: &[ProgramRecord], field: CategoricalField) -> Vec<FieldValue> {
    let values: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| field.value(record))
        .collect();
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ALL_OPTION.to_string());
    options.extend(values.into_iter().map(str::to_string));
    options
}

/// Observed tuition bounds across records with a known price.
///
/// UI callers seed their range slider from this, so a submitted full-range
/// query still excludes records with unknown tuition.
pub fn observed_tuition_range(records: &[ProgramRecord]) -> Option<TuitionRange> {
    let mut prices = records.iter().filter_map(|record| record.tuition_price);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), price| {
        (lo.min(price), hi.max(price))
    });
    Some(TuitionRange { min, max })
}
