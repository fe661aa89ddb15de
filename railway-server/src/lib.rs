//! Railway best-journeys server.
//!
//! A web application that answers: "given a railway network of named
//! routes and ordered stops, what are the best ways to travel from
//! station A to station B?"

pub mod dataset;
pub mod network;
pub mod planner;
pub mod summary;
pub mod web;
