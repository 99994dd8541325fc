//! The session and navigation state machine.
//!
//! A [`Navigator`] owns all UI state and runs one event loop that serializes
//! session changes, UI events and completions of the I/O it starts. Service
//! calls run on spawned tasks; their results come back as completions tagged
//! with the render epoch and session generation they were started under, so
//! late results from a replaced screen or an ended session cannot touch what
//! is currently shown.

use crate::account::{self, AccountAction, Outcome};
use crate::collaborators::Collaborators;
use crate::error::{AppError, Result};
use crate::intent::{Intent, UiEvent};
use crate::route::{Route, RouteTarget, active_nav, resolve};
use crate::screen::{AuthForm, AuthStatus, Control, ControlStatus, Screen, render};
use crate::view::{Chrome, View};

use pp_core::{Identity, Profile, ProfileUpdate, WeatherReport};
use pp_services::{ServiceResult, ensure_profile};

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};

const EVENT_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    Unauthenticated {
        mode: AuthMode,
        form: AuthForm,
    },
    Bootstrapping {
        identity: Identity,
    },
    Authenticated {
        profile: Profile,
        identity: Identity,
        route: RouteTarget,
    },
}

impl SessionState {
    fn signed_out(form: AuthForm) -> Self {
        Self::Unauthenticated {
            mode: AuthMode::SignIn,
            form,
        }
    }
}

enum Completion {
    Bootstrapped {
        generation: u64,
        result: ServiceResult<Profile>,
    },
    AuthAttempt {
        epoch: u64,
        result: ServiceResult<Identity>,
    },
    Account {
        generation: u64,
        epoch: u64,
        control: Control,
        request: u64,
        result: ServiceResult<Outcome>,
    },
}

/// Account-screen state that lives for one render
#[derive(Debug, Default)]
struct ScreenStatus {
    controls: BTreeMap<Control, ControlStatus>,
    weather: Option<WeatherReport>,
}

/// Front-end side of a running [`Navigator`]
#[derive(Clone)]
pub struct AppHandle {
    pub events: mpsc::Sender<UiEvent>,
    pub view: watch::Receiver<View>,
}

impl AppHandle {
    pub fn current(&self) -> View {
        self.view.borrow().clone()
    }

    pub async fn send(&self, event: UiEvent) -> Result<()> {
        self.events.send(event).await.map_err(|_| AppError::closed())
    }

    pub async fn navigate(&self, fragment: impl Into<String>) -> Result<()> {
        self.send(UiEvent::HashChanged(fragment.into())).await
    }

    /// Send `intent` as issued from the view currently shown
    pub async fn dispatch(&self, intent: Intent) -> Result<()> {
        let epoch = self.view.borrow().epoch;
        self.send(UiEvent::Intent { epoch, intent }).await
    }

    /// Wait until the published view satisfies `ready`
    pub async fn wait_for(
        &self,
        waiting_for: &str,
        timeout: Duration,
        ready: impl FnMut(&View) -> bool,
    ) -> Result<View> {
        let mut view = self.view.clone();
        let outcome = tokio::time::timeout(timeout, view.wait_for(ready)).await;
        match outcome {
            Ok(Ok(current)) => Ok(current.clone()),
            Ok(Err(_)) => Err(AppError::closed()),
            Err(_) => Err(AppError::timeout(waiting_for)),
        }
    }
}

pub struct Navigator {
    collaborators: Collaborators,
    state: SessionState,
    fragment: String,
    epoch: u64,
    generation: u64,
    next_request: u64,
    latest_request: HashMap<Control, u64>,
    applied_request: HashMap<Control, u64>,
    pending: ProfileUpdate,
    status: ScreenStatus,
    view: watch::Sender<View>,
    completions: mpsc::UnboundedSender<Completion>,
}

impl Navigator {
    /// Start the navigator on the current runtime.
    ///
    /// The first view (for whatever session is current) is published before
    /// this returns.
    pub fn spawn(collaborators: Collaborators, fragment: impl Into<String>) -> AppHandle {
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        let (view_tx, view_rx) = watch::channel(View::default());
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        let mut session = collaborators.session.subscribe();
        let mut navigator = Navigator {
            collaborators,
            state: SessionState::signed_out(AuthForm::default()),
            fragment: fragment.into(),
            epoch: 0,
            generation: 0,
            next_request: 0,
            latest_request: HashMap::new(),
            applied_request: HashMap::new(),
            pending: ProfileUpdate::default(),
            status: ScreenStatus::default(),
            view: view_tx,
            completions: completions_tx,
        };

        let current = session.borrow_and_update().clone();
        navigator.on_session(current);
        tokio::spawn(navigator.run(session, events_rx, completions_rx));

        AppHandle {
            events: events_tx,
            view: view_rx,
        }
    }

    async fn run(
        mut self,
        mut session: watch::Receiver<Option<Identity>>,
        mut events: mpsc::Receiver<UiEvent>,
        mut completions: mpsc::UnboundedReceiver<Completion>,
    ) {
        let mut session_open = true;

        loop {
            tokio::select! {
                changed = session.changed(), if session_open => match changed {
                    Ok(()) => {
                        let identity = session.borrow_and_update().clone();
                        self.on_session(identity);
                    }
                    Err(_) => {
                        warn!("Session authority stopped publishing");
                        session_open = false;
                    }
                },
                event = events.recv() => match event {
                    Some(event) => self.on_event(event),
                    None => break,
                },
                Some(completion) = completions.recv() => self.on_completion(completion),
            }
        }

        info!("Navigator stopped");
    }

    // === Session ===

    fn on_session(&mut self, identity: Option<Identity>) {
        self.generation += 1;
        self.latest_request.clear();
        self.applied_request.clear();
        self.pending = ProfileUpdate::default();

        match identity {
            None => {
                info!("No user signed in");
                self.state = SessionState::signed_out(AuthForm::default());
            }
            Some(identity) => {
                info!("Bootstrapping session for {}", identity.uid);
                self.state = SessionState::Bootstrapping {
                    identity: identity.clone(),
                };

                let generation = self.generation;
                let profiles = self.collaborators.profiles.clone();
                self.start(async move {
                    let result = ensure_profile(profiles.as_ref(), &identity).await;
                    Completion::Bootstrapped { generation, result }
                });
            }
        }

        self.render();
    }

    fn on_bootstrapped(&mut self, generation: u64, result: ServiceResult<Profile>) {
        if generation != self.generation {
            debug!("Dropping profile resolution from session generation {generation}");
            return;
        }
        let SessionState::Bootstrapping { ref identity } = self.state else {
            debug!("Dropping profile resolution outside bootstrap");
            return;
        };
        let identity = identity.clone();

        match result {
            Ok(profile) => {
                info!("Session ready for {}", identity.uid);
                self.state = SessionState::Authenticated {
                    profile,
                    identity,
                    route: resolve(&self.fragment),
                };
            }
            Err(e) => {
                warn!("Profile resolution failed for {}: {e}", identity.uid);
                self.state = SessionState::signed_out(AuthForm::failed(format!(
                    "Could not load your profile. {}",
                    e.user_message()
                )));
            }
        }

        self.render();
    }

    // === UI events ===

    fn on_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::HashChanged(fragment) => {
                self.fragment = fragment;
                if let SessionState::Authenticated { ref mut route, .. } = self.state {
                    *route = resolve(&self.fragment);
                    self.render();
                }
            }
            UiEvent::Renavigate => {
                if matches!(self.state, SessionState::Authenticated { .. }) {
                    self.render();
                }
            }
            UiEvent::Intent { epoch, intent } => {
                if epoch != self.epoch {
                    debug!(
                        "Dropping {} from view {epoch}; current view is {}",
                        intent.name(),
                        self.epoch
                    );
                    return;
                }
                self.on_intent(intent);
            }
        }
    }

    fn on_intent(&mut self, intent: Intent) {
        match self.state {
            SessionState::Unauthenticated { .. } => self.on_auth_intent(intent),
            SessionState::Authenticated { .. } => match AccountAction::from_intent(intent) {
                Ok(action) => self.on_account_action(action),
                Err(intent) => warn!("Ignoring {} while signed in", intent.name()),
            },
            SessionState::Bootstrapping { .. } => {
                debug!("Ignoring {} while loading", intent.name());
            }
        }
    }

    fn on_auth_intent(&mut self, intent: Intent) {
        let SessionState::Unauthenticated {
            ref mut mode,
            ref mut form,
        } = self.state
        else {
            return;
        };

        let session = self.collaborators.session.clone();
        let epoch = self.epoch;

        match intent {
            Intent::ShowSignIn => {
                *mode = AuthMode::SignIn;
                *form = AuthForm::default();
                self.render();
            }
            Intent::ShowSignUp => {
                *mode = AuthMode::SignUp;
                *form = AuthForm::default();
                self.render();
            }
            Intent::SignIn { email, password } => {
                form.status = AuthStatus::Processing;
                self.publish();
                self.start(async move {
                    let result = session.sign_in(&email, &password).await;
                    Completion::AuthAttempt { epoch, result }
                });
            }
            Intent::SignUp { email, password } => {
                form.status = AuthStatus::Processing;
                self.publish();
                self.start(async move {
                    let result = session.sign_up(&email, &password).await;
                    Completion::AuthAttempt { epoch, result }
                });
            }
            Intent::SignInWithProvider(credential) => {
                form.status = AuthStatus::Processing;
                self.publish();
                self.start(async move {
                    let result = session.sign_in_with_provider(&credential).await;
                    Completion::AuthAttempt { epoch, result }
                });
            }
            other => warn!("Ignoring {} while signed out", other.name()),
        }
    }

    fn on_account_action(&mut self, action: AccountAction) {
        let SessionState::Authenticated {
            ref identity,
            ref route,
            ..
        } = self.state
        else {
            return;
        };
        if route.route() != Some(Route::Account) {
            warn!("Ignoring account action outside the account screen");
            return;
        }
        let uid = identity.uid.clone();

        let control = action.control();
        self.next_request += 1;
        let request = self.next_request;
        self.latest_request.insert(control, request);

        if let Some(ref update) = action.optimistic() {
            self.pending.merge(update);
        }
        self.status.controls.insert(control, ControlStatus::Pending);
        self.publish();

        let collaborators = self.collaborators.clone();
        let generation = self.generation;
        let epoch = self.epoch;
        self.start(async move {
            let result = account::perform(&collaborators, &uid, action).await;
            Completion::Account {
                generation,
                epoch,
                control,
                request,
                result,
            }
        });
    }

    // === Completions ===

    fn on_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Bootstrapped { generation, result } => {
                self.on_bootstrapped(generation, result)
            }
            Completion::AuthAttempt { epoch, result } => self.on_auth_attempt(epoch, result),
            Completion::Account {
                generation,
                epoch,
                control,
                request,
                result,
            } => self.on_account_done(generation, epoch, control, request, result),
        }
    }

    fn on_auth_attempt(&mut self, epoch: u64, result: ServiceResult<Identity>) {
        if epoch != self.epoch {
            debug!("Dropping auth result for view {epoch}");
            return;
        }

        match result {
            // The session broadcast drives the transition.
            Ok(identity) => debug!("Credentials accepted for {}", identity.uid),
            Err(e) => {
                warn!("Authentication failed: {e}");
                if let SessionState::Unauthenticated { ref mut form, .. } = self.state {
                    form.status = AuthStatus::Failed(e.user_message());
                    self.publish();
                }
            }
        }
    }

    fn on_account_done(
        &mut self,
        generation: u64,
        epoch: u64,
        control: Control,
        request: u64,
        result: ServiceResult<Outcome>,
    ) {
        if generation != self.generation {
            debug!("Dropping {control:?} result from session generation {generation}");
            return;
        }
        let latest = self.latest_request.get(&control) == Some(&request);
        let same_view = latest && epoch == self.epoch;

        // A superseded write still reached the store; the cache follows the
        // newest accepted write per control.
        if let Ok(Outcome::Saved(ref saved)) = result {
            let applied = self.applied_request.get(&control).copied().unwrap_or(0);
            if request > applied {
                self.applied_request.insert(control, request);
                if let SessionState::Authenticated {
                    ref mut profile, ..
                } = self.state
                {
                    if latest {
                        saved.apply_to(profile);
                    } else {
                        profile.apply(&saved.update);
                    }
                }
                info!("Saved {:?}", saved.update.field_paths());
            }
        }

        if !latest {
            debug!("Superseded {control:?} request {request} finished");
            self.refresh_account();
            return;
        }
        account::clear_optimistic(&mut self.pending, control);

        match result {
            Ok(Outcome::SignedOut) => {
                debug!("Sign-out accepted");
                return;
            }
            Ok(Outcome::Saved(saved)) => {
                if same_view {
                    self.status.controls.insert(control, ControlStatus::Saved);
                    if saved.report.is_some() {
                        self.status.weather = saved.report;
                    }
                }
            }
            Err(e) => {
                warn!("{control:?} change failed: {e}");
                if same_view {
                    self.status
                        .controls
                        .insert(control, ControlStatus::Failed(e.user_message()));
                }
            }
        }

        self.refresh_account();
    }

    /// Redraw the account screen in place from the cached profile; another
    /// screen only picks up the data on its next render.
    fn refresh_account(&self) {
        if matches!(self.view.borrow().screen, Screen::Account(_)) {
            self.publish();
        }
    }

    // === Rendering ===

    fn start<F>(&self, task: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let completion = task.await;
            if completions.send(completion).is_err() {
                debug!("Navigator gone; dropping completion");
            }
        });
    }

    /// Replace the screen: new epoch, fresh per-screen status
    fn render(&mut self) {
        self.epoch += 1;
        self.status = ScreenStatus::default();
        self.publish();
    }

    /// Redraw the current screen under the same epoch
    fn publish(&self) {
        let view = View {
            epoch: self.epoch,
            screen: self.screen(),
            chrome: self.chrome(),
        };
        self.view.send_replace(view);
    }

    fn displayed(&self, profile: &Profile) -> Profile {
        let mut shown = profile.clone();
        shown.apply(&self.pending);
        shown
    }

    fn screen(&self) -> Screen {
        match self.state {
            SessionState::Unauthenticated { mode, ref form } => match mode {
                AuthMode::SignIn => Screen::SignIn(form.clone()),
                AuthMode::SignUp => Screen::SignUp(form.clone()),
            },
            SessionState::Bootstrapping { .. } => Screen::Loading,
            SessionState::Authenticated {
                ref profile,
                ref identity,
                ref route,
            } => {
                let mut screen = render(route, &self.displayed(profile), identity);
                if let Screen::Account(ref mut account) = screen {
                    account.statuses = self.status.controls.clone();
                    account.weather = self.status.weather.clone();
                }
                screen
            }
        }
    }

    fn chrome(&self) -> Chrome {
        match self.state {
            SessionState::Authenticated { ref profile, .. } => Chrome {
                nav_visible: true,
                active_nav: active_nav(&self.fragment),
                theme: self.displayed(profile).theme,
            },
            _ => Chrome::hidden(),
        }
    }
}
