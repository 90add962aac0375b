//! External collaborator contracts around the lunar pipeline.
//!
//! The core pipeline accepts a UTC `BirthInstant` and returns a `Rashi`.
//! Two collaborators sit at its boundaries:
//!
//! - A **time resolver** turns (local date, local time, place) into the
//!   UTC instant, accounting for timezone offset and historical DST rules.
//!   Implementations should be deterministic (IANA tzdb lookup); the
//!   contract only requires that an unresolvable place is reported as
//!   [`ResolutionError::LocationNotFound`], distinguishable from generic
//!   failure, and surfaced verbatim rather than retried.
//! - An **insight provider** turns a `Rashi` into descriptive guidance and
//!   a bracelet recommendation. The pipeline supplies only the key and
//!   performs no validation of the returned content.
//!
//! The static 12-entry bracelet catalog itself ships here, keyed by rashi.

pub mod bracelet;
pub mod contract;
pub mod error;

pub use bracelet::{BRACELET_CATALOG, Bracelet, bracelet_for};
pub use contract::{BirthDetails, InsightProvider, RashiInsights, TimeResolver};
pub use error::{InsightError, ResolutionError};
