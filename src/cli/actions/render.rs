//! Plain-text rendering for terminal output.

use carpool_ui::{
    content::{PageBody, StaticPage},
    flows::dashboard::{activity_label, stat_tiles},
    paths,
    types::DashboardResponse,
    OtpInput, SessionStore, TimerState, OTP_LENGTH,
};
use std::io::{self, Write};

/// Six cells with the focused one bracketed, e.g. `1 2 [_] _ _ _`.
#[must_use]
pub fn otp_cells(otp: &OtpInput) -> String {
    (0..OTP_LENGTH)
        .map(|index| {
            let cell = otp.digit(index).unwrap_or('_');
            if index == otp.focus() {
                format!("[{cell}]")
            } else {
                cell.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn resend_status(state: TimerState) -> String {
    match state {
        TimerState::Counting { remaining } => format!("resend available in {remaining}s"),
        TimerState::Eligible => "type `resend` for a new code".to_string(),
    }
}

/// # Errors
/// Returns an error if writing fails.
pub fn signed_in(out: &mut impl Write, store: &SessionStore) -> io::Result<()> {
    if let (Some(user), Some(token)) = (store.user(), store.token()) {
        writeln!(out, "Signed in as {}.", user.display_name())?;
        writeln!(out, "Token: {token}")?;
    }
    Ok(())
}

/// Follow-up hint for the route a flow ended on.
/// # Errors
/// Returns an error if writing fails.
pub fn next_step(out: &mut impl Write, route: &str) -> io::Result<()> {
    match route {
        paths::COMPLETE_PROFILE => writeln!(
            out,
            "Add a phone number to finish your profile: carpool profile --phone <number>"
        ),
        paths::LOGIN => writeln!(out, "Sign in to continue: carpool login"),
        paths::REGISTER => writeln!(out, "Create an account first: carpool register"),
        _ => Ok(()),
    }
}

/// # Errors
/// Returns an error if writing fails.
pub fn dashboard(out: &mut impl Write, response: &DashboardResponse) -> io::Result<()> {
    for tile in stat_tiles(&response.stats) {
        writeln!(out, "{:<15} {}", tile.label, tile.value)?;
    }

    writeln!(out)?;
    if response.recent_activity.is_empty() {
        return writeln!(out, "No recent activity.");
    }
    writeln!(out, "Recent activity")?;
    for activity in &response.recent_activity {
        let when = activity.created_at.as_deref().unwrap_or("");
        writeln!(
            out,
            "  {:<20} {} {}",
            activity_label(activity),
            activity.description,
            when
        )?;
    }
    Ok(())
}

/// # Errors
/// Returns an error if writing fails.
pub fn page(out: &mut impl Write, page: &StaticPage) -> io::Result<()> {
    writeln!(out, "{}", page.title)?;
    writeln!(out, "{}", page.summary)?;

    match &page.body {
        PageBody::Help(categories) => {
            for category in *categories {
                writeln!(out, "\n{}", category.title)?;
                for faq in category.faqs {
                    writeln!(out, "  Q: {}", faq.question)?;
                    writeln!(out, "  A: {}", faq.answer)?;
                }
            }
        }
        PageBody::Services(blocks) => {
            for block in *blocks {
                writeln!(out, "\n{}\n  {}", block.title, block.description)?;
            }
        }
        PageBody::DriverVerification { steps, benefits } => {
            writeln!(out, "\nHow it works")?;
            for (index, step) in steps.iter().enumerate() {
                writeln!(out, "  {}. {}: {}", index + 1, step.title, step.description)?;
            }
            writeln!(out, "\nWhy verify")?;
            for benefit in *benefits {
                writeln!(out, "  - {}: {}", benefit.title, benefit.description)?;
            }
        }
    }
    Ok(())
}
