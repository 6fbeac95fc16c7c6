mod aggregation;
mod categorization;
mod conversion;
mod grocery_list;

pub use aggregation::*;
pub use categorization::*;
pub use conversion::*;
pub use grocery_list::*;
