#![forbid(unsafe_code)]

//! ARES web server: landing page, demo dashboard, analysis API and waitlist
//! intake.

pub mod config;
pub mod http;
pub mod pages;
pub mod sink;
