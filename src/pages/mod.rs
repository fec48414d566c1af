//! Routed pages of the console.
//!
//! DESIGN
//! ======
//! Only the login page carries real behavior. The admin and exam screens
//! are shells carrying the matched route's heading; the data grids behind
//! them are separate work and arrive screen by screen.

pub mod dashboard;
pub mod exam;
pub mod login;
pub mod masters;
pub mod operations;
