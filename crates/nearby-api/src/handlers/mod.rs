mod add;
mod near;

pub use add::handle_add;
pub use near::handle_near;
