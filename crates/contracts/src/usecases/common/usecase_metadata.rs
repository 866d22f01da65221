/// Identification of a use case and the backend endpoint serving it
pub trait UseCaseMetadata {
    /// Index, e.g. "u001"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "sales_search"
    fn usecase_name() -> &'static str;

    /// Label for the UI
    fn display_name() -> &'static str;

    /// Absolute path of the POST endpoint
    fn endpoint() -> &'static str;

    /// Full name such as "u001_sales_search"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
