// Adapters layer: concrete implementations for the external systems (the
// observation data-cache service and the report output targets).

pub mod datacache;
pub mod report;
