//! Output-normalization pipeline for the OSINT aggregation service.
//!
//! Holds the domain model, the three tool-output parsers, the WHOIS field
//! normalizer, the WHOIS lookup adapter, request-subject validation and the
//! process invoker used to run external tools. Nothing here knows about HTTP.

pub mod classify;
pub mod enumeration;
pub mod error;
pub mod inspector;
pub mod lookup;
pub mod process;
pub mod types;
pub mod validation;
pub mod whois;
