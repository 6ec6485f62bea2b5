pub mod current_user;
pub mod public;
pub mod resource;

pub use current_user::current_user;
pub use public::{health, root};
pub use resource::{GenericMessage, IdQuery, ResourceState};
