use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Mutually-exclusive category of the request being filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    #[default]
    Services,
    FacilityUse,
    Purchases,
    EquipmentUse,
    Other,
}

impl RequestType {
    /// Wire value, matches the radio input values in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Services => "services",
            RequestType::FacilityUse => "facility-use",
            RequestType::Purchases => "purchases",
            RequestType::EquipmentUse => "equipment-use",
            RequestType::Other => "other",
        }
    }

    /// Human label used on the form page and the rendered sheet.
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::Services => "Services",
            RequestType::FacilityUse => "Use of church facilities",
            RequestType::Purchases => "Purchases",
            RequestType::EquipmentUse => "Use of equipment",
            RequestType::Other => "Other",
        }
    }

    pub const ALL: [RequestType; 5] = [
        RequestType::Services,
        RequestType::FacilityUse,
        RequestType::Purchases,
        RequestType::EquipmentUse,
        RequestType::Other,
    ];
}

/// Approval state of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Approved,
    Denied,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Approved => "approved",
            Status::Denied => "denied",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Approved => "Approved",
            Status::Denied => "Denied",
        }
    }

    pub const ALL: [Status; 2] = [Status::Approved, Status::Denied];
}

/// The complete current set of field values for one in-progress request.
///
/// Binds directly from the urlencoded form body. String fields default to
/// empty and dates to `None` so that a sparse body reaches the validator
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub other_request_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub received_by: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub executed_by: String,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub end_date: Option<NaiveDate>,
}

impl FormSnapshot {
    /// Replace exactly one named string field, leaving every other field
    /// untouched. Returns `false` for names that are not string fields
    /// (radio groups and dates have their own setters).
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "number" => &mut self.number,
            "from" => &mut self.from,
            "to" => &mut self.to,
            "subject" => &mut self.subject,
            "other_request_type" => &mut self.other_request_type,
            "description" => &mut self.description,
            "responsible" => &mut self.responsible,
            "received_by" => &mut self.received_by,
            "by" => &mut self.by,
            "executed_by" => &mut self.executed_by,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// Select the active request type. The free-text override is advisory
    /// and is deliberately left as-is, whichever option is active.
    pub fn set_request_type(&mut self, request_type: RequestType) {
        self.request_type = request_type;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// The two dates are independent; neither setter touches the other,
    /// and no ordering between them is enforced.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    /// ISO value for the date input, empty when unset.
    pub fn start_date_value(&self) -> String {
        iso_date(&self.start_date)
    }

    pub fn end_date_value(&self) -> String {
        iso_date(&self.end_date)
    }

    /// Long-form date for the rendered sheet, empty when unset.
    pub fn start_date_long(&self) -> String {
        long_date(&self.start_date)
    }

    pub fn end_date_long(&self) -> String {
        long_date(&self.end_date)
    }
}

fn iso_date(date: &Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn long_date(date: &Option<NaiveDate>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string()).unwrap_or_default()
}

/// Date inputs post an empty string when nothing is picked; treat that the
/// same as an absent field.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
