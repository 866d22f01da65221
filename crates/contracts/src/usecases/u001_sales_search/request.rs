use crate::domain::a002_service::{Duration, ServiceId};
use crate::shared::form_body::{FormBody, FormError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 500;

/// Whether the controls that depend on the duration (end date, results
/// area) are usable: at least one service and a chosen duration.
pub fn end_date_enabled(selected_services: usize, duration: &Duration) -> bool {
    selected_services > 0 && duration.is_valid()
}

/// What the operator asked for: services plus one duration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub services: Vec<ServiceId>,
    pub duration: Duration,
}

impl SearchCriteria {
    pub fn new(services: Vec<ServiceId>, duration: Duration) -> Self {
        Self { services, duration }
    }

    pub fn is_searchable(&self) -> bool {
        end_date_enabled(self.services.len(), &self.duration)
    }

    /// One `data[]` item per service
    pub fn selections(&self) -> Vec<ServiceSelection> {
        self.services
            .iter()
            .map(|service| ServiceSelection {
                service: service.clone(),
                duration: self.duration.clone(),
            })
            .collect()
    }
}

/// JSON object carried in each `data[]` form value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub service: ServiceId,
    pub duration: Duration,
}

/// Request of one result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub criteria: SearchCriteria,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl SearchRequest {
    pub fn new(criteria: SearchCriteria, page: u32, page_size: u32) -> Self {
        Self {
            criteria,
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn to_form(&self) -> FormBody {
        let mut form = FormBody::new();
        for selection in self.criteria.selections() {
            // ServiceSelection only holds strings, serialization cannot fail
            let item = serde_json::to_string(&selection).unwrap_or_default();
            form.push("data[]", item);
        }
        form.push("page", self.page.to_string());
        form.push("page_size", self.page_size.to_string());
        form
    }

    pub fn from_form(form: &FormBody) -> Result<Self, FormError> {
        let mut services = Vec::new();
        let mut duration = Duration::unset();
        for raw in form.get_all("data[]") {
            let selection: ServiceSelection =
                serde_json::from_str(raw).map_err(|e| FormError::InvalidValue {
                    field: "data[]".to_string(),
                    reason: e.to_string(),
                })?;
            duration = selection.duration;
            if !services.contains(&selection.service) {
                services.push(selection.service);
            }
        }

        let page = parse_number(form, "page")?.unwrap_or(1);
        let page_size = parse_number(form, "page_size")?.unwrap_or(DEFAULT_PAGE_SIZE);

        Ok(Self::new(SearchCriteria::new(services, duration), page, page_size))
    }
}

fn parse_number(form: &FormBody, field: &str) -> Result<Option<u32>, FormError> {
    match form.get(field) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| FormError::InvalidValue {
                field: field.to_string(),
                reason: e.to_string(),
            }),
    }
}
