//! Text rendering of a [`View`].

use pp_app::{AccountView, AuthForm, AuthStatus, Control, ControlStatus, Route, Screen, View};

use std::fmt::Write;

fn auth(out: &mut String, heading: &str, form: &AuthForm, footer: &str) {
    let _ = writeln!(out, "PlantPal\n\n{heading}");
    let _ = writeln!(out, "  [email] [password]  (Google sign-in: google <id_token>)");
    match form.status {
        AuthStatus::Idle => {}
        AuthStatus::Processing => {
            let _ = writeln!(out, "  Processing...");
        }
        AuthStatus::Failed(ref message) => {
            let _ = writeln!(out, "  Error: {message}");
        }
    }
    let _ = writeln!(out, "\n{footer}");
}

fn status_suffix(account: &AccountView, control: Control) -> String {
    match account.status(control) {
        ControlStatus::Idle => String::new(),
        ControlStatus::Pending => String::from("  (saving...)"),
        ControlStatus::Saved => String::from("  (saved)"),
        ControlStatus::Failed(message) => format!("  ! {message}"),
    }
}

fn account(out: &mut String, account: &AccountView) {
    let _ = writeln!(out, "({})  {}", account.initials, account.username);
    let _ = writeln!(out, "{}", account.email);
    let _ = writeln!(
        out,
        "Picture: {}{}",
        account.profile_pic_url.as_deref().unwrap_or("none"),
        status_suffix(account, Control::Avatar)
    );

    let _ = writeln!(out, "\nSettings");
    let _ = writeln!(
        out,
        "  Location          {} >{}",
        account.location,
        status_suffix(account, Control::Location)
    );
    if let (Some(report), Some(temperature)) = (account.weather.as_ref(), account.temperature()) {
        let _ = writeln!(out, "                    {temperature} in {}", report.country);
    }
    let _ = writeln!(
        out,
        "  Dark Mode         [{}]{}",
        if account.theme.is_dark() { "x" } else { " " },
        status_suffix(account, Control::Theme)
    );
    let _ = writeln!(
        out,
        "  Temperature Unit  {}{}",
        account.temperature_unit.symbol(),
        status_suffix(account, Control::TemperatureUnit)
    );
    let _ = writeln!(
        out,
        "\n  [Sign Out]{}",
        status_suffix(account, Control::SignOut)
    );
}

fn nav(out: &mut String, active: Option<Route>) {
    let items: Vec<String> = Route::ALL
        .iter()
        .map(|route| {
            if Some(*route) == active {
                format!("[{}]", route.title())
            } else {
                route.title().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "\n{}", items.join(" | "));
}

pub fn render(view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "---- view {} ({} theme) ----", view.epoch, view.chrome.theme);

    match view.screen {
        Screen::SignIn(ref form) => auth(
            &mut out,
            "Sign in to your account",
            form,
            "New to PlantPal? Type 'switch' to sign up.",
        ),
        Screen::SignUp(ref form) => auth(
            &mut out,
            "Create your account",
            form,
            "Already have an account? Type 'switch' to sign in.",
        ),
        Screen::Loading => {
            let _ = writeln!(out, "Loading your profile...");
        }
        Screen::Home => {
            let _ = writeln!(out, "Home Screen (PlantPal)\nChecklist and Weather will go here.");
        }
        Screen::MyPlants => {
            let _ = writeln!(out, "My Plants\nGallery of your plants goes here.");
        }
        Screen::Search => {
            let _ = writeln!(out, "Plant Search\nSearch and API filtering goes here.");
        }
        Screen::Account(ref view) => account(&mut out, view),
        Screen::NotFound { ref fragment } => {
            let _ = writeln!(out, "404 - Page Not Found ({fragment})");
        }
    }

    if view.chrome.nav_visible {
        nav(&mut out, view.chrome.active_nav);
    }

    out
}
