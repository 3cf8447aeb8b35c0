pub mod digest;

pub use digest::password_digest;
