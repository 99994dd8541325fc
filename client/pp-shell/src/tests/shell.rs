use crate::ShellCommand;
use crate::shell::{Flow, execute};
use crate::wiring::{OFFLINE_GOOGLE_TOKEN, offline};

use pp_app::{Navigator, Screen};
use pp_config::Config;

use std::time::Duration;

use googletest::prelude::*;

const WAIT: Duration = Duration::from_secs(5);

// =========================================================================
// Shell Flow Tests
// =========================================================================

#[tokio::test]
async fn given_offline_services_when_signing_in_with_google_then_home_is_shown() {
    // Given
    let app = Navigator::spawn(offline(&Config::default()), "");

    // When
    let flow = execute(&app, ShellCommand::Google(OFFLINE_GOOGLE_TOKEN.into()))
        .await
        .unwrap();
    let view = app
        .wait_for("home", WAIT, |v| v.screen == Screen::Home)
        .await
        .unwrap();

    // Then
    assert_that!(flow, eq(Flow::Continue));
    assert_that!(view.chrome.nav_visible, eq(true));
}

#[tokio::test]
async fn given_sign_in_form_when_switching_then_sign_up_form_is_shown() {
    // Given
    let app = Navigator::spawn(offline(&Config::default()), "");

    // When
    execute(&app, ShellCommand::Switch).await.unwrap();
    app.wait_for("sign-up", WAIT, |v| matches!(v.screen, Screen::SignUp(_)))
        .await
        .unwrap();
    execute(&app, ShellCommand::Switch).await.unwrap();
    let view = app
        .wait_for("sign-in", WAIT, |v| matches!(v.screen, Screen::SignIn(_)))
        .await
        .unwrap();

    // Then
    assert_that!(view.chrome.nav_visible, eq(false));
}

#[tokio::test]
async fn given_offline_account_when_saving_known_city_then_canonical_name_shows() {
    // Given
    let app = Navigator::spawn(offline(&Config::default()), "#account");
    execute(
        &app,
        ShellCommand::SignUp {
            email: String::from("ivy@example.com"),
            password: String::from("secret1"),
        },
    )
    .await
    .unwrap();
    app.wait_for("account", WAIT, |v| matches!(v.screen, Screen::Account(_)))
        .await
        .unwrap();

    // When
    execute(&app, ShellCommand::Location(String::from("paris")))
        .await
        .unwrap();
    let view = app
        .wait_for("location saved", WAIT, |v| {
            matches!(v.screen, Screen::Account(ref a) if a.location.starts_with("Paris"))
        })
        .await
        .unwrap();

    // Then
    let Screen::Account(ref account) = view.screen else {
        panic!("expected account screen");
    };
    assert_that!(account.location.as_str(), eq("Paris, Île-de-France"));
}

#[tokio::test]
async fn given_missing_avatar_file_when_executed_then_io_error_and_nothing_sent() {
    // Given
    let app = Navigator::spawn(offline(&Config::default()), "");

    // When
    let result = execute(
        &app,
        ShellCommand::Avatar("/definitely/not/here.jpg".into()),
    )
    .await;

    // Then
    assert!(matches!(result, Err(crate::ShellError::Io { .. })));
}

#[tokio::test]
async fn given_quit_when_executed_then_flow_stops() {
    // Given
    let app = Navigator::spawn(offline(&Config::default()), "");

    // When
    let flow = execute(&app, ShellCommand::Quit).await.unwrap();

    // Then
    assert_that!(flow, eq(Flow::Quit));
}
