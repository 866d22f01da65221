pub mod request;
pub mod response;

pub use request::{
    end_date_enabled, SearchCriteria, SearchRequest, ServiceSelection, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use response::{SearchResponse, NO_ACCOUNTS_AVAILABLE, NO_SERVICES_SELECTED};

use crate::usecases::common::UseCaseMetadata;

pub struct SalesSearch;

impl UseCaseMetadata for SalesSearch {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "sales_search"
    }

    fn display_name() -> &'static str {
        "Búsqueda de cuentas"
    }

    fn endpoint() -> &'static str {
        "/adm/sales/search"
    }
}
