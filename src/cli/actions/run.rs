use crate::cli::actions::{
    dashboard, google, login, pages, profile, register, verify, Action,
};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::execute(args).await,
        Action::Google(args) => google::execute(args).await,
        Action::Register(args) => register::execute(args).await,
        Action::Verify(args) => verify::execute(args).await,
        Action::Dashboard(args) => dashboard::execute(args).await,
        Action::Profile(args) => profile::execute(args).await,
        Action::Pages(args) => pages::execute(&args),
    }
}
