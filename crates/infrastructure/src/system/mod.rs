pub mod identity;

pub use identity::SystemIdentityProvider;
