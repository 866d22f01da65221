//! Runtime configuration of the sales screen.
//!
//! Defaults suit the admin site serving the wasm bundle itself; the host
//! page may override them with `data-*` attributes on the mount element:
//!
//! ```html
//! <div id="sales-app" data-api-base="" data-page-size="50" data-media-base="/media/"></div>
//! ```
//!
//! The coupon redeem page also sets `data-redeem-service` and
//! `data-redeem-duration`, which preselect the criteria and search at mount.

use contracts::usecases::u001_sales_search::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Id of the element the app mounts into
pub const MOUNT_ID: &str = "sales-app";

#[derive(Debug, Clone, PartialEq)]
pub struct SalesConfig {
    /// Prefix for endpoint paths; empty means same origin
    pub api_base: String,
    /// Prefix for logo paths
    pub media_base: String,
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
    /// Name of the hidden input holding the CSRF token
    pub csrf_field: String,
    pub service_list_id: String,
    pub duration_list_id: String,
    pub bank_list_id: String,
    pub payment_list_id: String,
    /// Id of the sale form's submit button
    pub submit_id: String,
    /// Preset criteria of the redeem page
    pub redeem_service: Option<String>,
    pub redeem_duration: Option<String>,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            media_base: "/media/".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![25, 50, 100],
            csrf_field: "csrfmiddlewaretoken".to_string(),
            service_list_id: "servicelist".to_string(),
            duration_list_id: "durationlist".to_string(),
            bank_list_id: "banklist".to_string(),
            payment_list_id: "paymentlist".to_string(),
            submit_id: "submit".to_string(),
            redeem_service: None,
            redeem_duration: None,
        }
    }
}

impl SalesConfig {
    /// Read the mount element's `data-*` attributes
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self::default().with_overrides(|name| element.get_attribute(name))
    }

    pub fn with_overrides(mut self, attr: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = attr("data-api-base") {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(media) = attr("data-media-base") {
            self.media_base = media;
        }
        if let Some(raw) = attr("data-page-size") {
            match raw.trim().parse::<u32>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => self.page_size = size,
                _ => log::warn!("ignoring invalid data-page-size {:?}", raw),
            }
        }
        if let Some(id) = attr("data-service-list") {
            self.service_list_id = id;
        }
        if let Some(id) = attr("data-duration-list") {
            self.duration_list_id = id;
        }
        if let Some(id) = attr("data-bank-list") {
            self.bank_list_id = id;
        }
        if let Some(id) = attr("data-payment-list") {
            self.payment_list_id = id;
        }
        if let Some(id) = attr("data-submit") {
            self.submit_id = id;
        }
        self.redeem_service = attr("data-redeem-service").filter(|v| !v.trim().is_empty());
        self.redeem_duration = attr("data-redeem-duration").filter(|v| !v.trim().is_empty());

        if !self.page_size_options.contains(&self.page_size) {
            self.page_size_options.push(self.page_size);
            self.page_size_options.sort_unstable();
        }
        self
    }

    /// Redeem page: both presets present
    pub fn redeem_preset(&self) -> Option<(&str, &str)> {
        match (&self.redeem_service, &self.redeem_duration) {
            (Some(service), Some(duration)) => Some((service.as_str(), duration.as_str())),
            _ => None,
        }
    }

    pub fn logo_url(&self, logo: &str) -> String {
        format!("{}{}", self.media_base, logo.trim_start_matches('/'))
    }
}
