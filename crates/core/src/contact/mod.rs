mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::ContactError;
pub use mock_data::demo_contacts;
pub use operations::like_pattern;
pub use requests::{CreateContactRequest, SearchQuery, UpdateContactRequest};
pub use types::{Contact, ContactField, ContactUpdate, NewContact};
