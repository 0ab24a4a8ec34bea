//! Layout shared by every protected route.

mod app_shell;

pub(crate) use app_shell::AppShell;
