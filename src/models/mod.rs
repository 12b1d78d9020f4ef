pub mod movie;
pub mod page;

pub use movie::{Movie, MovieInput};
pub use page::{Page, PageRequest, Sort, SortDirection, SortField};
