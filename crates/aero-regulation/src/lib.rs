//! # aero-regulation — Regulatory Compliance for the AeroLedger Stack
//!
//! Regulations are small, pure rule objects behind the [`Regulation`] trait.
//! The [`RegulatoryEngine`] composes any number of them into a single
//! [`ComplianceResult`] with precise precedence: every applicable regulation
//! is evaluated, the first denial in configuration order wins verbatim, and
//! allowing verdicts merge their obligations in order without deduplication.
//!
//! [`Eu261Cancellation`] is the canonical implementation; every new
//! regulation follows its shape.

pub mod action;
pub mod compensation;
pub mod context;
pub mod engine;
pub mod eu261;
pub mod jurisdiction;
pub mod regulation;
pub mod result;
pub mod sop;

pub use action::RegulatoryAction;
pub use compensation::{denied_boarding_compensation, DeniedBoardingReason, Eu261Compensation};
pub use context::RegulationContext;
pub use engine::RegulatoryEngine;
pub use eu261::Eu261Cancellation;
pub use jurisdiction::{Airport, Jurisdiction};
pub use regulation::Regulation;
pub use result::ComplianceResult;
pub use sop::SopExpectation;
