//! Restaurant finder server.
//!
//! A web application that answers: "which restaurants are within walking
//! distance of this light rail station, nearest first?"

pub mod config;
pub mod domain;
pub mod places;
pub mod proximity;
pub mod stations;
pub mod web;
