mod tenants;
mod tournaments;

pub use tenants::Tenants;
pub use tournaments::Tournaments;
