use std::cell::Cell;
use std::rc::Rc;

use crate::api::{ApiError, RosterApi};
use crate::console;
use crate::markup::LOAD_FAILED;
use crate::model::Roster;
use crate::notice::{Notice, NoticeId};

/// The part of the page a `RosterView` owns.
pub trait RosterSurface {
    fn roster_loaded(&self, roster: Roster);
    fn roster_failed(&self, message: &str);
    fn show_notice(&self, id: NoticeId, notice: Notice);
    fn hide_notice(&self, id: NoticeId);
    fn reset_form(&self);
    fn confirm(&self, prompt: &str) -> bool;
}

/// One-shot delayed task.
pub trait NoticeTimer {
    fn after(&self, millis: u32, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// A mutation succeeded on the server; the rendered roster is stale.
    RosterChanged,
}

pub type Listener = Rc<dyn Fn(ViewEvent)>;

/// Canned texts for one kind of mutation.
struct Wording {
    success: &'static str,
    rejected: &'static str,
    failed: &'static str,
    log: &'static str,
}

const SIGNUP: Wording = Wording {
    success: "Signed up successfully",
    rejected: "An error occurred",
    failed: "Failed to sign up. Please try again.",
    log: "Error signing up:",
};

const UNREGISTER: Wording = Wording {
    success: "Unregistered participant",
    rejected: "Failed to unregister participant",
    failed: "Failed to unregister. Please try again.",
    log: "Error unregistering participant:",
};

pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Unregister {email} from {activity}?")
}

pub struct RosterView<A, S, T> {
    api: A,
    surface: S,
    timer: T,
    notice_timeout_ms: u32,
    listener: Listener,
    last_notice: Cell<NoticeId>,
}

impl<A, S, T> RosterView<A, S, T>
where
    A: RosterApi,
    S: RosterSurface + Clone + 'static,
    T: NoticeTimer,
{
    pub fn new(api: A, surface: S, timer: T, notice_timeout_ms: u32, listener: Listener) -> Self {
        Self {
            api,
            surface,
            timer,
            notice_timeout_ms,
            listener,
            last_notice: Cell::new(NoticeId::default()),
        }
    }

    pub async fn load_roster(&self) {
        match self.api.fetch_roster().await {
            Ok(roster) => self.surface.roster_loaded(roster),
            Err(e) => {
                self.surface.roster_failed(LOAD_FAILED);
                console::error("Error fetching activities:", &e);
            }
        }
    }

    pub async fn submit_signup(&self, activity: &str, email: &str) {
        let result = self.api.signup(activity, email).await;
        if self.settle(result, &SIGNUP) {
            self.surface.reset_form();
            (self.listener)(ViewEvent::RosterChanged);
        }
    }

    /// Returns without a request if the user declines the prompt.
    pub async fn remove_participant(&self, activity: &str, email: &str) {
        if !self.surface.confirm(&removal_prompt(activity, email)) {
            return;
        }
        let result = self.api.unregister(activity, email).await;
        if self.settle(result, &UNREGISTER) {
            (self.listener)(ViewEvent::RosterChanged);
        }
    }

    /// Turns a mutation result into a notice; true on success.
    fn settle(&self, result: Result<Option<String>, ApiError>, wording: &Wording) -> bool {
        match result {
            Ok(message) => {
                let text = message.unwrap_or_else(|| wording.success.to_string());
                self.notify(Notice::success(text));
                true
            }
            Err(ApiError::Rejected { status, detail }) => {
                console::warn(wording.log, &format!("HTTP {status}"));
                let text = detail.unwrap_or_else(|| wording.rejected.to_string());
                self.notify(Notice::error(text));
                false
            }
            Err(e @ ApiError::Transport(_)) => {
                console::error(wording.log, &e);
                self.notify(Notice::error(wording.failed));
                false
            }
        }
    }

    fn notify(&self, notice: Notice) {
        let id = self.last_notice.get().next();
        self.last_notice.set(id);
        self.surface.show_notice(id, notice);

        let surface = self.surface.clone();
        self.timer
            .after(self.notice_timeout_ms, Box::new(move || surface.hide_notice(id)));
    }
}
