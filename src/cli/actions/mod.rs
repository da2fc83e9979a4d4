pub mod dashboard;
pub mod google;
pub mod login;
pub mod pages;
pub mod profile;
pub mod register;
pub mod render;
pub mod verify;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Google(google::Args),
    Register(register::Args),
    Verify(verify::Args),
    Dashboard(dashboard::Args),
    Profile(profile::Args),
    Pages(pages::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
