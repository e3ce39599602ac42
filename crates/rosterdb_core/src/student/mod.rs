//! Student records and their store.

mod record;
mod store;

pub use record::Student;
pub use store::StudentStore;
