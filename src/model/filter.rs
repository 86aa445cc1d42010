//! Filter contracts and validation.
//!
//! Each domain exposes a fixed set of filterable fields (the filter
//! contract): one date or period range plus multi-select dimension fields.
//! The UI only collects filter parameters; everything here validates them
//! into an immutable [`FilterValues`] snapshot. Absent filters mean
//! "no restriction", never an error.
//!
//! The allowed values for the multi-select fields are the fixed lists the
//! demo data is generated from.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Domain;

static PERIOD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap());

/// What kind of input a filter field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Calendar date range, bounds formatted `YYYY-MM-DD`.
    DateRange,
    /// Posting period range, bounds formatted `YYYY-MM`.
    PeriodRange,
    /// Subset of a fixed list of dimension values.
    MultiSelect,
}

/// One filterable field of a domain's contract.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterField {
    /// Field name as presented to callers, e.g. `regions`.
    pub name: &'static str,
    /// Gold-table column the field filters, e.g. `region`.
    pub column: &'static str,
    pub kind: FilterKind,
    /// Allowed values for multi-select fields; empty for range fields.
    pub allowed: &'static [&'static str],
}

/// The fixed filter contract of one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub domain: Domain,
    pub fields: Vec<FilterField>,
}

impl FilterSpec {
    /// Look up the filter contract for a domain.
    pub fn of(domain: Domain) -> &'static FilterSpec {
        match domain {
            Domain::Sales => &SPECS[0],
            Domain::Procurement => &SPECS[1],
            Domain::Finance => &SPECS[2],
        }
    }

    pub fn field(&self, name: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The contract's single range field (every domain has exactly one).
    pub fn range_field(&self) -> &FilterField {
        self.fields
            .iter()
            .find(|f| f.kind != FilterKind::MultiSelect)
            .expect("every filter contract declares a range field")
    }

    /// Multi-select fields in contract order.
    pub fn multi_selects(&self) -> impl Iterator<Item = &FilterField> {
        self.fields
            .iter()
            .filter(|f| f.kind == FilterKind::MultiSelect)
    }
}

/// Shorthand for `FilterSpec::of`.
pub fn get_filter_spec(domain: Domain) -> &'static FilterSpec {
    FilterSpec::of(domain)
}

/// Unvalidated filter input, as collected from a UI or CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFilters {
    /// Lower bound of the domain's range field.
    pub range_from: Option<String>,
    /// Upper bound of the domain's range field.
    pub range_to: Option<String>,
    /// Multi-select values, keyed by field name.
    pub selections: BTreeMap<String, Vec<String>>,
}

impl RawFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.range_from = Some(from.into());
        self.range_to = Some(to.into());
        self
    }

    pub fn since(mut self, from: impl Into<String>) -> Self {
        self.range_from = Some(from.into());
        self
    }

    pub fn until(mut self, to: impl Into<String>) -> Self {
        self.range_to = Some(to.into());
        self
    }

    pub fn select<I, S>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .entry(field.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Validated bounds of a range field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeBound {
    Dates {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    Periods {
        from: Option<String>,
        to: Option<String>,
    },
}

/// A validated, immutable instance of a domain's filter contract.
///
/// Selections are normalized to sorted order so that equal filter sets
/// serialize identically regardless of input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterValues {
    pub domain: Domain,
    pub range: Option<RangeBound>,
    pub selections: BTreeMap<String, Vec<String>>,
}

impl FilterValues {
    /// The empty filter: no restriction on any field.
    pub fn none(domain: Domain) -> Self {
        Self {
            domain,
            range: None,
            selections: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_none() && self.selections.is_empty()
    }

    pub fn selection(&self, field: &str) -> Option<&[String]> {
        self.selections.get(field).map(|v| v.as_slice())
    }

    /// Human-readable one-line summary, e.g.
    /// `2024-01-01 to 2024-01-31 | region: DACH`.
    pub fn summary(&self) -> String {
        let spec = FilterSpec::of(self.domain);
        let mut parts = Vec::new();

        match &self.range {
            Some(RangeBound::Dates { from, to }) => push_range_part(
                &mut parts,
                from.map(|d| d.to_string()),
                to.map(|d| d.to_string()),
            ),
            Some(RangeBound::Periods { from, to }) => {
                push_range_part(&mut parts, from.clone(), to.clone())
            }
            None => {}
        }

        for field in spec.multi_selects() {
            if let Some(values) = self.selections.get(field.name) {
                parts.push(format!("{}: {}", field.column, values.join(", ")));
            }
        }

        if parts.is_empty() {
            "No filters".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

fn push_range_part(parts: &mut Vec<String>, from: Option<String>, to: Option<String>) {
    match (from, to) {
        (Some(from), Some(to)) => parts.push(format!("{} to {}", from, to)),
        (Some(from), None) => parts.push(format!("From {}", from)),
        (None, Some(to)) => parts.push(format!("Until {}", to)),
        (None, None) => {}
    }
}

/// Malformed filter input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown filter field '{field}' for domain '{domain}'")]
    UnknownField { domain: Domain, field: String },

    #[error("filter field '{field}' does not accept selected values")]
    NotSelectable { field: String },

    #[error("invalid date '{value}' for '{field}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    #[error("invalid period '{value}' for '{field}' (expected YYYY-MM)")]
    InvalidPeriod { field: String, value: String },

    #[error("inverted range for '{field}': {start} is after {end}")]
    InvertedRange {
        field: String,
        start: String,
        end: String,
    },

    #[error("unknown value '{value}' for filter '{field}'")]
    UnknownValue { field: String, value: String },

    #[error("empty value for filter '{field}'")]
    EmptyValue { field: String },

    #[error("duplicate value '{value}' for filter '{field}'")]
    DuplicateValue { field: String, value: String },
}

/// Validate raw input against a domain's filter contract.
pub fn validate(domain: Domain, raw: &RawFilters) -> Result<FilterValues, ValidationError> {
    let spec = FilterSpec::of(domain);
    let range_field = spec.range_field();

    let range = validate_range(range_field, raw)?;
    let mut selections = BTreeMap::new();

    for (name, values) in &raw.selections {
        // Empty selections mean "no restriction", same as an absent field.
        if values.is_empty() {
            continue;
        }

        let field = spec
            .field(name)
            .ok_or_else(|| ValidationError::UnknownField {
                domain,
                field: name.clone(),
            })?;
        if field.kind != FilterKind::MultiSelect {
            return Err(ValidationError::NotSelectable {
                field: name.clone(),
            });
        }

        let mut seen = Vec::with_capacity(values.len());
        for value in values {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyValue {
                    field: name.clone(),
                });
            }
            if !field.allowed.contains(&value.as_str()) {
                return Err(ValidationError::UnknownValue {
                    field: name.clone(),
                    value: value.clone(),
                });
            }
            if seen.contains(value) {
                return Err(ValidationError::DuplicateValue {
                    field: name.clone(),
                    value: value.clone(),
                });
            }
            seen.push(value.clone());
        }

        seen.sort();
        selections.insert(name.clone(), seen);
    }

    Ok(FilterValues {
        domain,
        range,
        selections,
    })
}

fn validate_range(
    field: &FilterField,
    raw: &RawFilters,
) -> Result<Option<RangeBound>, ValidationError> {
    if raw.range_from.is_none() && raw.range_to.is_none() {
        return Ok(None);
    }

    match field.kind {
        FilterKind::DateRange => {
            let from = raw
                .range_from
                .as_deref()
                .map(|v| parse_date(field.name, v))
                .transpose()?;
            let to = raw
                .range_to
                .as_deref()
                .map(|v| parse_date(field.name, v))
                .transpose()?;
            if let (Some(from), Some(to)) = (from, to) {
                if from > to {
                    return Err(ValidationError::InvertedRange {
                        field: field.name.to_string(),
                        start: from.to_string(),
                        end: to.to_string(),
                    });
                }
            }
            Ok(Some(RangeBound::Dates { from, to }))
        }
        FilterKind::PeriodRange => {
            let from = raw
                .range_from
                .as_deref()
                .map(|v| parse_period(field.name, v))
                .transpose()?;
            let to = raw
                .range_to
                .as_deref()
                .map(|v| parse_period(field.name, v))
                .transpose()?;
            if let (Some(from), Some(to)) = (&from, &to) {
                // YYYY-MM compares chronologically as a string.
                if from > to {
                    return Err(ValidationError::InvertedRange {
                        field: field.name.to_string(),
                        start: from.clone(),
                        end: to.clone(),
                    });
                }
            }
            Ok(Some(RangeBound::Periods { from, to }))
        }
        FilterKind::MultiSelect => unreachable!("range field is never multi-select"),
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_period(field: &str, value: &str) -> Result<String, ValidationError> {
    if PERIOD_PATTERN.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidPeriod {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

static SPECS: LazyLock<[FilterSpec; 3]> = LazyLock::new(|| {
    [
        FilterSpec {
            domain: Domain::Sales,
            fields: vec![
                FilterField {
                    name: "order_date",
                    column: "order_date",
                    kind: FilterKind::DateRange,
                    allowed: &[],
                },
                FilterField {
                    name: "regions",
                    column: "region",
                    kind: FilterKind::MultiSelect,
                    allowed: &["DACH", "Nordics", "UK", "France"],
                },
                FilterField {
                    name: "product_categories",
                    column: "product_category",
                    kind: FilterKind::MultiSelect,
                    allowed: &["Electronics", "Clothing", "Home", "Sports"],
                },
                FilterField {
                    name: "channels",
                    column: "channel",
                    kind: FilterKind::MultiSelect,
                    allowed: &["Online", "Retail", "Wholesale"],
                },
            ],
        },
        FilterSpec {
            domain: Domain::Procurement,
            fields: vec![
                FilterField {
                    name: "purchase_date",
                    column: "purchase_date",
                    kind: FilterKind::DateRange,
                    allowed: &[],
                },
                FilterField {
                    name: "suppliers",
                    column: "supplier",
                    kind: FilterKind::MultiSelect,
                    allowed: &["Supplier A", "Supplier B", "Supplier C", "Supplier D"],
                },
                FilterField {
                    name: "material_groups",
                    column: "material_group",
                    kind: FilterKind::MultiSelect,
                    allowed: &["Raw Materials", "Components", "Services", "Equipment"],
                },
                FilterField {
                    name: "plants",
                    column: "plant",
                    kind: FilterKind::MultiSelect,
                    allowed: &["Plant 100", "Plant 200", "Plant 300"],
                },
            ],
        },
        FilterSpec {
            domain: Domain::Finance,
            fields: vec![
                FilterField {
                    name: "posting_period",
                    column: "posting_period",
                    kind: FilterKind::PeriodRange,
                    allowed: &[],
                },
                FilterField {
                    name: "company_codes",
                    column: "company_code",
                    kind: FilterKind::MultiSelect,
                    allowed: &["1000", "2000"],
                },
                FilterField {
                    name: "cost_centers",
                    column: "cost_center",
                    kind: FilterKind::MultiSelect,
                    allowed: &["CC100", "CC200", "CC300", "CC400"],
                },
                FilterField {
                    name: "accounts",
                    column: "account",
                    kind: FilterKind::MultiSelect,
                    allowed: &["4000", "4010", "4100", "5000", "5100", "5200"],
                },
            ],
        },
    ]
});
