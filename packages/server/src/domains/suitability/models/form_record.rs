use serde::{Deserialize, Serialize, Serializer};

use crate::domains::suitability::schema::FORM_FIELDS;

/// Financial suitability form state for one applicant.
///
/// Every field is optional; absent fields are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_amount"
    )]
    pub annual_income: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_amount"
    )]
    pub net_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_horizon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_needs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,
}

/// Borrowed view of a single field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Empty strings count as "not filled in".
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl FormRecord {
    /// Value of the field with the given wire name, if set.
    pub fn get(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "fullName" => text(&self.full_name),
            "dateOfBirth" => text(&self.date_of_birth),
            "email" => text(&self.email),
            "phone" => text(&self.phone),
            "address" => text(&self.address),
            "occupation" => text(&self.occupation),
            "annualIncome" => number(&self.annual_income),
            "netWorth" => number(&self.net_worth),
            "investmentExperience" => text(&self.investment_experience),
            "riskTolerance" => text(&self.risk_tolerance),
            "investmentGoals" => text(&self.investment_goals),
            "timeHorizon" => text(&self.time_horizon),
            "liquidityNeeds" => text(&self.liquidity_needs),
            "taxStatus" => text(&self.tax_status),
            _ => None,
        }
    }

    /// Wire names of fields holding a non-empty value, in form order.
    pub fn populated_fields(&self) -> Vec<&'static str> {
        FORM_FIELDS
            .iter()
            .filter(|spec| matches!(self.get(spec.name), Some(v) if !v.is_blank()))
            .map(|spec| spec.name)
            .collect()
    }

    /// Merge an extraction result over this record.
    ///
    /// Only fields the extraction actually supplies (non-null, non-empty)
    /// are written; each one replaces the current value. Merging the same
    /// result again is a no-op.
    pub fn merge(&mut self, extraction: &ExtractionResult) {
        let FormRecord {
            full_name,
            date_of_birth,
            email,
            phone,
            address,
            occupation,
            annual_income,
            net_worth,
            investment_experience,
            risk_tolerance,
            investment_goals,
            time_horizon,
            liquidity_needs,
            tax_status,
        } = extraction.cleaned().into_record();

        overwrite(&mut self.full_name, full_name);
        overwrite(&mut self.date_of_birth, date_of_birth);
        overwrite(&mut self.email, email);
        overwrite(&mut self.phone, phone);
        overwrite(&mut self.address, address);
        overwrite(&mut self.occupation, occupation);
        overwrite(&mut self.annual_income, annual_income);
        overwrite(&mut self.net_worth, net_worth);
        overwrite(&mut self.investment_experience, investment_experience);
        overwrite(&mut self.risk_tolerance, risk_tolerance);
        overwrite(&mut self.investment_goals, investment_goals);
        overwrite(&mut self.time_horizon, time_horizon);
        overwrite(&mut self.liquidity_needs, liquidity_needs);
        overwrite(&mut self.tax_status, tax_status);
    }

    /// Owned variant of [`FormRecord::merge`].
    pub fn merged(mut self, extraction: &ExtractionResult) -> Self {
        self.merge(extraction);
        self
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if let Some(value) = value {
        *slot = Some(value);
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value.as_deref().map(FieldValue::Text)
}

fn number<'a>(value: &Option<f64>) -> Option<FieldValue<'a>> {
    value.map(FieldValue::Number)
}

/// Whole amounts go out as JSON integers (`120000`, not `120000.0`).
fn serialize_amount<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

/// 2^53; larger f64 integers are not exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// The fields the model could confidently determine from free text.
///
/// Fields it could not determine are absent, never placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult(FormRecord);

impl ExtractionResult {
    pub fn new(record: FormRecord) -> Self {
        Self(record)
    }

    pub fn as_record(&self) -> &FormRecord {
        &self.0
    }

    pub fn into_record(self) -> FormRecord {
        self.0
    }

    /// Copy with empty-string fields removed (absent fields already are).
    pub fn cleaned(&self) -> ExtractionResult {
        let r = self.0.clone();
        ExtractionResult(FormRecord {
            full_name: non_empty(r.full_name),
            date_of_birth: non_empty(r.date_of_birth),
            email: non_empty(r.email),
            phone: non_empty(r.phone),
            address: non_empty(r.address),
            occupation: non_empty(r.occupation),
            annual_income: r.annual_income,
            net_worth: r.net_worth,
            investment_experience: non_empty(r.investment_experience),
            risk_tolerance: non_empty(r.risk_tolerance),
            investment_goals: non_empty(r.investment_goals),
            time_horizon: non_empty(r.time_horizon),
            liquidity_needs: non_empty(r.liquidity_needs),
            tax_status: non_empty(r.tax_status),
        })
    }

    /// Names of the fields this result would fill.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.0.populated_fields()
    }

    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }
}

impl From<FormRecord> for ExtractionResult {
    fn from(record: FormRecord) -> Self {
        Self(record)
    }
}
