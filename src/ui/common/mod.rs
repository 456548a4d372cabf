//! Reusable form controls and indicators

pub mod form;
pub mod spinner;

pub use form::{DateField, FormField, TextAreaField};
pub use spinner::{InlineSpinner, SpinnerStyle};
