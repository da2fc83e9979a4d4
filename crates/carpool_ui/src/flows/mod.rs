//! Request/response handling for each page. Every function here is pure over
//! its inputs and the session store, so the web pages and the terminal client
//! make the same decisions.

pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;
pub mod verify;
