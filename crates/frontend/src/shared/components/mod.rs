pub mod page_header;
pub mod pagination_controls;
pub mod table;
pub mod table_placeholders;

pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use table_placeholders::{TableEmptyRows, TableNoData};
