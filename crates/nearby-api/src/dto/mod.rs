mod request;
mod response;

pub use request::{AddRequest, NearRequest};
pub use response::RecordResponse;
