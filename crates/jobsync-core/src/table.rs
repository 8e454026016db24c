use serde::Serialize;

/// Literal fallback written when a listing has no company mapping or no
/// usable location.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column names in output order. Every row serializes to exactly these
/// columns.
pub const COLUMNS: [&str; 6] = [
    "publication_date",
    "job_type",
    "job",
    "company",
    "city",
    "country",
];

/// One flattened job listing.
///
/// `None` is the lack-of-value marker: the source listing did not carry the
/// field. It is distinct from [`NOT_AVAILABLE`], which is only produced for
/// a missing `company` mapping and for missing or comma-less locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    /// `YYYY-MM-DD`, the first 10 characters of the raw timestamp.
    pub publication_date: String,
    pub job_type: Option<String>,
    pub job: Option<String>,
    pub company: Option<String>,
    pub city: String,
    pub country: String,
}

impl OutputRow {
    /// Returns the row's fields in [`COLUMNS`] order, with the lack-of-value
    /// marker rendered as an empty field.
    #[must_use]
    pub fn to_record(&self) -> [&str; 6] {
        [
            self.publication_date.as_str(),
            self.job_type.as_deref().unwrap_or_default(),
            self.job.as_deref().unwrap_or_default(),
            self.company.as_deref().unwrap_or_default(),
            self.city.as_str(),
            self.country.as_str(),
        ]
    }
}

/// Ordered collection of [`OutputRow`]s, one per listing in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    rows: Vec<OutputRow>,
}

impl OutputTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: OutputRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutputRow> {
        self.rows.iter()
    }

    /// Column names, identical for every table.
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }
}

impl FromIterator<OutputRow> for OutputTable {
    fn from_iter<I: IntoIterator<Item = OutputRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OutputTable {
    type Item = &'a OutputRow;
    type IntoIter = std::slice::Iter<'a, OutputRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
