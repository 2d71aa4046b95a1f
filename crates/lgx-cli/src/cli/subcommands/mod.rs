pub mod auth;
pub mod batch;
pub mod draft;
pub mod master;
pub mod order;
pub mod organization;

pub use auth::AuthCommands;
pub use batch::BatchCommands;
pub use draft::DraftArgs;
pub use master::MasterCommands;
pub use order::OrderCommands;
pub use organization::OrganizationCommands;
