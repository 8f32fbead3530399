use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// Dataset kind
// ============================================================================

/// One of the four static datasets served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Team,
    CustomerType,
    AcvRange,
    AccountIndustry,
}

impl DatasetKind {
    /// All kinds in dashboard tab order.
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Team,
        DatasetKind::CustomerType,
        DatasetKind::AcvRange,
        DatasetKind::AccountIndustry,
    ];

    /// Path segment under `/api/` serving this dataset.
    pub fn endpoint(&self) -> &'static str {
        match self {
            DatasetKind::Team => "team",
            DatasetKind::CustomerType => "customer-type",
            DatasetKind::AcvRange => "acv-range",
            DatasetKind::AccountIndustry => "account-industry",
        }
    }

    /// Backing file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::Team => "Team.json",
            DatasetKind::CustomerType => "Customer Type.json",
            DatasetKind::AcvRange => "ACV Range.json",
            DatasetKind::AccountIndustry => "Account Industry.json",
        }
    }

    /// Name of the column carrying the category in the wire format.
    pub fn category_column(&self) -> &'static str {
        match self {
            DatasetKind::Team => "Team",
            DatasetKind::CustomerType => "Cust_Type",
            DatasetKind::AcvRange => "ACV_Range",
            DatasetKind::AccountIndustry => "Acct_Industry",
        }
    }

    /// Dashboard tab / section title.
    pub fn title(&self) -> &'static str {
        match self {
            DatasetKind::Team => "Team Performance",
            DatasetKind::CustomerType => "Customer Analytics",
            DatasetKind::AcvRange => "Revenue Analysis",
            DatasetKind::AccountIndustry => "Industry Breakdown",
        }
    }

    /// Decodes the raw JSON array of this dataset into records.
    pub fn decode_records(&self, json: &str) -> serde_json::Result<Vec<SalesRecord>> {
        match self {
            DatasetKind::Team => decode::<TeamRow>(json),
            DatasetKind::CustomerType => decode::<CustomerTypeRow>(json),
            DatasetKind::AcvRange => decode::<AcvRangeRow>(json),
            DatasetKind::AccountIndustry => decode::<AccountIndustryRow>(json),
        }
    }
}

fn decode<R: DatasetRow>(json: &str) -> serde_json::Result<Vec<SalesRecord>> {
    let rows: Vec<R> = serde_json::from_str(json)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

// ============================================================================
// Record
// ============================================================================

/// Category key of a record, tagged with the dataset it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Category {
    Team(String),
    CustomerType(String),
    AcvRange(String),
    Industry(String),
}

impl Category {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Category::Team(_) => DatasetKind::Team,
            Category::CustomerType(_) => DatasetKind::CustomerType,
            Category::AcvRange(_) => DatasetKind::AcvRange,
            Category::Industry(_) => DatasetKind::AccountIndustry,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Category::Team(name)
            | Category::CustomerType(name)
            | Category::AcvRange(name)
            | Category::Industry(name) => name,
        }
    }
}

/// One dataset row: deals closed in a fiscal quarter for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub category: Category,
    /// Number of deals / customers
    pub count: u64,
    /// Annual contract value sum
    pub acv: f64,
    /// Fiscal quarter label, e.g. "2023-Q1"
    pub closed_fiscal_quarter: String,
}

impl SalesRecord {
    pub fn new(category: Category, count: u64, acv: f64, closed_fiscal_quarter: &str) -> Self {
        Self {
            category,
            count,
            acv,
            closed_fiscal_quarter: closed_fiscal_quarter.to_string(),
        }
    }
}

// ============================================================================
// Wire rows (one shape per dataset file)
// ============================================================================

/// A row as stored in a dataset file and returned by its endpoint.
pub trait DatasetRow: Into<SalesRecord> + Serialize + DeserializeOwned + Send + 'static {
    const KIND: DatasetKind;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "Team")]
    pub team: String,
    pub count: u64,
    pub acv: f64,
    pub closed_fiscal_quarter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTypeRow {
    #[serde(rename = "Cust_Type")]
    pub cust_type: String,
    pub count: u64,
    pub acv: f64,
    pub closed_fiscal_quarter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcvRangeRow {
    #[serde(rename = "ACV_Range")]
    pub acv_range: String,
    pub count: u64,
    pub acv: f64,
    pub closed_fiscal_quarter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountIndustryRow {
    #[serde(rename = "Acct_Industry")]
    pub acct_industry: String,
    pub count: u64,
    pub acv: f64,
    pub closed_fiscal_quarter: String,
}

impl DatasetRow for TeamRow {
    const KIND: DatasetKind = DatasetKind::Team;
}

impl DatasetRow for CustomerTypeRow {
    const KIND: DatasetKind = DatasetKind::CustomerType;
}

impl DatasetRow for AcvRangeRow {
    const KIND: DatasetKind = DatasetKind::AcvRange;
}

impl DatasetRow for AccountIndustryRow {
    const KIND: DatasetKind = DatasetKind::AccountIndustry;
}

impl From<TeamRow> for SalesRecord {
    fn from(row: TeamRow) -> Self {
        Self {
            category: Category::Team(row.team),
            count: row.count,
            acv: row.acv,
            closed_fiscal_quarter: row.closed_fiscal_quarter,
        }
    }
}

impl From<CustomerTypeRow> for SalesRecord {
    fn from(row: CustomerTypeRow) -> Self {
        Self {
            category: Category::CustomerType(row.cust_type),
            count: row.count,
            acv: row.acv,
            closed_fiscal_quarter: row.closed_fiscal_quarter,
        }
    }
}

impl From<AcvRangeRow> for SalesRecord {
    fn from(row: AcvRangeRow) -> Self {
        Self {
            category: Category::AcvRange(row.acv_range),
            count: row.count,
            acv: row.acv,
            closed_fiscal_quarter: row.closed_fiscal_quarter,
        }
    }
}

impl From<AccountIndustryRow> for SalesRecord {
    fn from(row: AccountIndustryRow) -> Self {
        Self {
            category: Category::Industry(row.acct_industry),
            count: row.count,
            acv: row.acv,
            closed_fiscal_quarter: row.closed_fiscal_quarter,
        }
    }
}
