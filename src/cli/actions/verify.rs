use crate::{
    cli::{actions::render, globals::GlobalArgs},
    client::ApiClient,
};
use anyhow::Result;
use carpool_ui::{
    flows::verify::{
        complete_verification, resolve_pending, VerificationForm, RESEND_FAILED, VERIFY_FAILED,
    },
    OtpInput, PendingVerification, ResendTimer, SessionStore, TimerState,
};
use std::{
    io::{self, Write},
    time::Duration,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

const PROMPT_HELP: &str =
    "Type a digit, paste the whole code, `<` to delete, Enter to submit, `resend` or `quit`.";

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub email: String,
    pub user_id: Option<String>,
}

/// Clock settings for the prompt; tests shorten both.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub tick: Duration,
    pub timer: ResendTimer,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            timer: ResendTimer::new(),
        }
    }
}

/// One line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Digit(char),
    Paste(String),
    Delete,
    Submit,
    Resend,
    Quit,
    Unknown,
}

impl Entry {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" | "submit" => return Self::Submit,
            "resend" => return Self::Resend,
            "quit" | "q" | "exit" => return Self::Quit,
            "<" => return Self::Delete,
            _ => {}
        }

        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) if digit.is_ascii_digit() => Self::Digit(digit),
            _ if line.chars().any(|c| c.is_ascii_digit()) => Self::Paste(line.to_string()),
            _ => Self::Unknown,
        }
    }
}

/// Removes the digit before the caret, like Backspace in the web form.
fn delete_last(otp: &mut OtpInput) {
    let focus = otp.focus();
    if otp.digit(focus).is_none() {
        otp.backspace(focus);
    }
    let focus = otp.focus();
    otp.input(focus, "");
}

fn show_code(out: &mut impl Write, form: &VerificationForm) -> io::Result<()> {
    writeln!(
        out,
        "Code: {}   ({})",
        render::otp_cells(form.otp()),
        render::resend_status(form.timer().state())
    )
}

/// # Errors
/// Returns an error if the client cannot be built or the terminal fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = args.globals.client()?;

    let mut store = SessionStore::new();
    store.set_pending_verification(PendingVerification::new(args.user_id, args.email));

    let input = BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();
    if let Some(route) = prompt(&client, &mut store, input, &mut out, Settings::default()).await? {
        render::next_step(&mut out, route)?;
    }

    Ok(())
}

/// Runs the verification prompt for the pending verification in `store`.
///
/// Returns the route the flow ended on, or `None` when the user quit or the
/// input closed first.
///
/// # Errors
/// Returns an error only when reading input or writing output fails; API
/// failures are printed and the prompt stays open.
pub async fn prompt<R, W>(
    client: &ApiClient,
    store: &mut SessionStore,
    input: R,
    out: &mut W,
    settings: Settings,
) -> Result<Option<&'static str>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let pending = match resolve_pending(store.pending_verification()) {
        Ok(pending) => pending,
        Err(route) => {
            writeln!(out, "There is no email waiting for verification.")?;
            return Ok(Some(route));
        }
    };

    let mut form = VerificationForm::with_timer(pending, settings.timer);
    writeln!(
        out,
        "Enter the 6-digit code sent to {}.",
        form.pending().email
    )?;
    writeln!(out, "{PROMPT_HELP}")?;
    show_code(out, &form)?;

    let mut lines = input.lines();
    let mut ticker = interval_at(Instant::now() + settings.tick, settings.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick(), if !form.timer().can_resend() => {
                if form.tick() == TimerState::Eligible {
                    writeln!(out, "You can request a new code now: type `resend`.")?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed before verification finished");
                    return Ok(None);
                };

                match Entry::parse(&line) {
                    Entry::Digit(digit) => {
                        let focus = form.otp().focus();
                        form.otp_mut().input(focus, &digit.to_string());
                        show_code(out, &form)?;
                    }
                    Entry::Paste(text) => {
                        form.otp_mut().paste(&text);
                        show_code(out, &form)?;
                    }
                    Entry::Delete => {
                        delete_last(form.otp_mut());
                        show_code(out, &form)?;
                    }
                    Entry::Submit => {
                        let request = match form.submission() {
                            Ok(request) => request,
                            Err(err) => {
                                writeln!(out, "{}", err.user_message(VERIFY_FAILED))?;
                                continue;
                            }
                        };

                        match client.verify_email(&request).await {
                            Ok(response) => {
                                let route = complete_verification(store, response);
                                info!(route, "email verified");
                                writeln!(out, "Email verified.")?;
                                render::signed_in(out, store)?;
                                return Ok(Some(route));
                            }
                            Err(err) => {
                                warn!(error = %err, "verification failed");
                                writeln!(out, "{}", err.user_message(VERIFY_FAILED))?;
                            }
                        }
                    }
                    Entry::Resend => {
                        let request = match form.begin_resend() {
                            Ok(request) => request,
                            Err(err) => {
                                writeln!(out, "{}", err.user_message(RESEND_FAILED))?;
                                continue;
                            }
                        };

                        match client.resend_otp(&request).await {
                            Ok(()) => {
                                form.resend_succeeded();
                                ticker.reset();
                                writeln!(out, "{}", form.resend_notice())?;
                                show_code(out, &form)?;
                            }
                            Err(err) => {
                                warn!(error = %err, "resend failed");
                                writeln!(out, "{}", err.user_message(RESEND_FAILED))?;
                            }
                        }
                    }
                    Entry::Quit => return Ok(None),
                    Entry::Unknown => writeln!(out, "{PROMPT_HELP}")?,
                }
            }
        }
    }
}
