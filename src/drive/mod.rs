pub mod client;
pub mod credentials;
pub mod token;

pub use client::DriveClient;
pub use credentials::ServiceAccountKey;
pub use token::Token;
