//! # lms-core
//!
//! Core types and error types for the LMS admin toolkit.
//!
//! This crate provides the foundational types shared across all LMS crates:
//! - Draft structs edited by the course-creation wizard (course, certificate,
//!   exam, question, option)
//! - Live and gating validation over those drafts
//! - Backend record structs (courses, students, submissions, ...)
//! - Wire request shapes sent to the REST backend
//! - Status enums and cross-cutting error types

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod requests;
pub mod validation;
