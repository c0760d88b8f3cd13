use std::rc::Rc;

use gloo::timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::model::Roster;
use crate::notice::{Notice, NoticeBoard, NoticeId};
use crate::view::{NoticeTimer, RosterSurface};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RosterDisplay {
    #[default]
    Loading,
    Loaded(Roster),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    /// The card area.
    pub roster: RosterDisplay,
    /// Select options from the last successful load; a failed reload keeps them.
    pub options: Vec<String>,
    pub notice: NoticeBoard,
    pub form: SignupForm,
    /// Bumped on every `RosterChanged`; the app reloads when it moves.
    pub reloads: u64,
}

pub enum PageAction {
    RosterLoaded(Roster),
    RosterFailed(String),
    ShowNotice(NoticeId, Notice),
    HideNotice(NoticeId),
    ResetForm,
    SetEmail(String),
    SetActivity(String),
    RosterChanged,
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::RosterLoaded(roster) => {
                if !roster.contains(&next.form.activity) {
                    next.form.activity.clear();
                }
                next.options = roster.names().map(str::to_string).collect();
                next.roster = RosterDisplay::Loaded(roster);
            }
            PageAction::RosterFailed(message) => next.roster = RosterDisplay::Failed(message),
            PageAction::ShowNotice(id, notice) => next.notice.show(id, notice),
            PageAction::HideNotice(id) => {
                if !next.notice.expire(id) {
                    return self;
                }
            }
            PageAction::ResetForm => next.form = SignupForm::default(),
            PageAction::SetEmail(email) => next.form.email = email,
            PageAction::SetActivity(activity) => next.form.activity = activity,
            PageAction::RosterChanged => next.reloads += 1,
        }
        Rc::new(next)
    }
}

/// `RosterSurface` backed by the page reducer.
#[derive(Clone, PartialEq)]
pub struct ReducerSurface {
    dispatcher: UseReducerDispatcher<PageState>,
}

impl ReducerSurface {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>) -> Self {
        Self { dispatcher }
    }
}

impl RosterSurface for ReducerSurface {
    fn roster_loaded(&self, roster: Roster) {
        self.dispatcher.dispatch(PageAction::RosterLoaded(roster));
    }

    fn roster_failed(&self, message: &str) {
        self.dispatcher.dispatch(PageAction::RosterFailed(message.to_string()));
    }

    fn show_notice(&self, id: NoticeId, notice: Notice) {
        self.dispatcher.dispatch(PageAction::ShowNotice(id, notice));
    }

    fn hide_notice(&self, id: NoticeId) {
        self.dispatcher.dispatch(PageAction::HideNotice(id));
    }

    fn reset_form(&self) {
        self.dispatcher.dispatch(PageAction::ResetForm);
    }

    fn confirm(&self, prompt: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

impl NoticeTimer for BrowserTimer {
    fn after(&self, millis: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(millis, task).forget();
    }
}
