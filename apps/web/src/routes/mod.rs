mod complete_profile;
mod dashboard;
mod driver_verification;
mod help;
mod home;
mod login;
mod not_found;
mod register;
mod services;
mod verify_email;

pub(crate) use complete_profile::CompleteProfilePage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use driver_verification::DriverVerificationPage;
pub(crate) use help::HelpPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use services::ServicesPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

// Paths mirror `carpool_ui::paths`; `path!` needs literals.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/complete-profile") view=CompleteProfilePage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/help") view=HelpPage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/driver-verification") view=DriverVerificationPage />
        </Routes>
    }
}
