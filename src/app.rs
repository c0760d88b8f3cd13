use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::HttpRosterApi;
use crate::config::RosterConfig;
use crate::markup::render_card;
use crate::state::{BrowserTimer, PageAction, PageState, ReducerSurface, RosterDisplay};
use crate::view::{RosterView, ViewEvent};

type PageView = RosterView<HttpRosterApi, ReducerSurface, BrowserTimer>;

// Delegated from the activity list: the nearest delete button of the click target.
fn removal_target(target: &Element) -> Option<(String, String)> {
    let button = target.closest(".participant-delete").ok()??;
    removal_pair(
        button.get_attribute("data-activity"),
        button.get_attribute("data-email"),
    )
}

/// Both data attributes must be present and non-empty.
fn removal_pair(activity: Option<String>, email: Option<String>) -> Option<(String, String)> {
    match (activity, email) {
        (Some(a), Some(e)) if !a.is_empty() && !e.is_empty() => Some((a, e)),
        _ => None,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PageState::default);

    let view: Rc<PageView> = {
        let dispatcher = state.dispatcher();
        use_memo((), move |_| {
            let config = RosterConfig::from_document();
            let events = dispatcher.clone();
            RosterView::new(
                HttpRosterApi::new(config.api_base),
                ReducerSurface::new(dispatcher),
                BrowserTimer,
                config.notice_timeout_ms,
                Rc::new(move |event| match event {
                    ViewEvent::RosterChanged => events.dispatch(PageAction::RosterChanged),
                }),
            )
        })
    };

    // Initial load, then once per RosterChanged.
    {
        let view = view.clone();
        use_effect_with(state.reloads, move |_| {
            spawn_local(async move {
                view.load_roster().await;
            });
            || ()
        });
    }

    let on_submit = {
        let view = view.clone();
        let form = state.form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let view = view.clone();
            let form = form.clone();
            spawn_local(async move {
                view.submit_signup(&form.activity, &form.email).await;
            });
        })
    };

    let on_email = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PageAction::SetEmail(input.value()));
        })
    };

    let on_activity = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(PageAction::SetActivity(select.value()));
        })
    };

    let on_list_click = {
        let view = view.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            let Some((activity, email)) = removal_target(&target) else {
                return;
            };
            let view = view.clone();
            spawn_local(async move {
                view.remove_participant(&activity, &email).await;
            });
        })
    };

    let cards = match &state.roster {
        RosterDisplay::Loading => html! { <p>{ "Loading activities..." }</p> },
        RosterDisplay::Failed(message) => html! { <p>{ message.clone() }</p> },
        RosterDisplay::Loaded(roster) => html! {
          <>
            { for roster.activities().iter().map(|a| html! {
                <div class="activity-card" key={a.name.clone()}>
                  { Html::from_html_unchecked(AttrValue::from(render_card(a))) }
                </div>
            }) }
          </>
        },
    };

    let selected = state.form.activity.clone();

    let notice = &state.notice;
    let notice_class = classes!(
        notice.notice().map(|n| n.kind.class()),
        (!notice.is_visible()).then_some("hidden")
    );
    let notice_text = notice.notice().map(|n| n.text.clone()).unwrap_or_default();

    html! {
      <main>
        <section id="activities-container">
          <h3>{ "Available Activities" }</h3>
          <div id="activities-list" onclick={on_list_click}>
            { cards }
          </div>
        </section>

        <section id="signup-container">
          <h3>{ "Sign Up for an Activity" }</h3>
          <form id="signup-form" onsubmit={on_submit}>
            <div class="form-group">
              <label for="email">{ "Student Email:" }</label>
              <input
                type="email"
                id="email"
                required=true
                placeholder="your-email@mergington.edu"
                value={state.form.email.clone()}
                oninput={on_email}
              />
            </div>
            <div class="form-group">
              <label for="activity">{ "Select Activity:" }</label>
              <select id="activity" required=true onchange={on_activity}>
                <option value="" selected={selected.is_empty()}>{ "-- Select an activity --" }</option>
                { for state.options.iter().map(|n| html! {
                    <option value={n.clone()} selected={*n == selected}>{ n.clone() }</option>
                }) }
              </select>
            </div>
            <button type="submit">{ "Sign Up" }</button>
          </form>
          <div id="message" class={notice_class}>{ notice_text }</div>
        </section>
      </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_needs_both_attributes() {
        assert_eq!(
            removal_pair(Some("Chess Club".into()), Some("a@x.edu".into())),
            Some(("Chess Club".to_string(), "a@x.edu".to_string()))
        );
        assert_eq!(removal_pair(None, Some("a@x.edu".into())), None);
        assert_eq!(removal_pair(Some("Chess Club".into()), None), None);
        assert_eq!(removal_pair(Some(String::new()), Some("a@x.edu".into())), None);
        assert_eq!(removal_pair(Some("Chess Club".into()), Some(String::new())), None);
        assert_eq!(removal_pair(None, None), None);
    }
}
