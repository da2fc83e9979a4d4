//! Signed-in account endpoints: the dashboard summary and profile updates.

pub(crate) mod client;
