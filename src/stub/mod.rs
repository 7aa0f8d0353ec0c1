//! An in-memory stand-in for the remote story spoiler service.
//!
//! Implements the documented API contract (authentication, bearer-guarded
//! story CRUD) so the suite can run without network access to the real
//! deployment. Not a reimplementation target: behavior stops at the contract.

mod routes;
mod startup;
mod state;

pub use startup::Application;
pub use state::{StubCredentials, StubState};
