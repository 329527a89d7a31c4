//! Account creation dialog and summary-row synchronization.

pub mod controller;
pub mod dom;

pub use controller::{AccountDialog, AccountFormController, AccountRow, SelectControl};
