mod alert;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use spinner::{FullPageSpinner, Spinner};
