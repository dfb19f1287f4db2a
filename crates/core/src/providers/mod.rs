pub mod traits;

// Collaborator implementations
pub mod http_stock;
pub mod notifier;
