//! Concrete policies built on [`validated_string`]
//!
//! Each module declares one policy together with an alias for the
//! [`ValidatedString`][validated_string::ValidatedString] it governs:
//! * [Non-empty trimmed strings][trimmed], ordered lexicographically
//! * [Email addresses][email], compared case-insensitively
//! * [Application versions][version], ordered by numeric components
//! * [Brazilian CPF numbers][cpf]
//! * [Brazilian license plates][plate]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cpf;
pub mod email;
pub mod plate;
pub mod trimmed;
pub mod version;

pub use cpf::{Cpf, CpfPolicy};
pub use email::{EmailAddress, EmailPolicy};
pub use plate::{BrLicensePlate, BrLicensePlatePolicy};
pub use trimmed::{NonEmptyTrimmed, NonEmptyTrimmedString};
pub use version::{AppVersion, AppVersionPolicy};
