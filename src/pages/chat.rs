//! Chat page, reachable by any authenticated role.
//!
//! A deliberately thin surface: pick a conversation partner by user id,
//! load the transcript, send messages. Sent messages are echoed into the
//! local transcript immediately; the POST is fire-and-forget.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::components::top_bar::TopBar;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ChatMessageDto;
use crate::state::chat::{ChatEntry, ChatState};
use crate::state::session::AppSessionStore;

fn parse_partner_id(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

#[cfg(any(test, feature = "hydrate"))]
fn entry_from_dto(dto: &ChatMessageDto, own_id: &str, own_name: &str) -> ChatEntry {
    let sender_id = dto.sender_id.to_string();
    let sender_name =
        if sender_id == own_id { own_name.to_owned() } else { format!("user {sender_id}") };
    ChatEntry { id: dto.id.to_string(), sender_id, sender_name, body: dto.message.clone() }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let partner = RwSignal::new(String::new());
    let draft = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let identity = move || {
        session.with(|store| {
            store
                .current()
                .map(|s| (s.token.clone(), s.user_id.clone(), s.display_name.clone()))
                .unwrap_or_default()
        })
    };

    let on_load = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(partner_id) = parse_partner_id(&partner.get()) else {
            info.set("Enter a numeric user id.".to_owned());
            return;
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let (token, own_id, own_name) = identity();
            leptos::task::spawn_local(async move {
                if let Some(history) =
                    crate::net::api::fetch_chat_history(&token, &partner_id.to_string()).await
                {
                    chat.update(|state| {
                        state.clear();
                        for dto in &history {
                            state.push(entry_from_dto(dto, &own_id, &own_name));
                        }
                    });
                } else {
                    info.set("Could not load the transcript.".to_owned());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = partner_id;
        }
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get().trim().to_owned();
        if body.is_empty() {
            return;
        }
        let Some(partner_id) = parse_partner_id(&partner.get()) else {
            info.set("Enter a numeric user id.".to_owned());
            return;
        };
        let (token, own_id, own_name) = identity();

        chat.update(|state| {
            state.push(ChatEntry {
                id: uuid::Uuid::new_v4().to_string(),
                sender_id: own_id,
                sender_name: own_name,
                body: body.clone(),
            });
        });
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = crate::net::api::send_chat_message(&token, partner_id, &body).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, partner_id, body);
        }
    };

    view! {
        <div class="chat-page">
            <TopBar title="Chat"/>
            <form class="chat-page__partner" on:submit=on_load>
                <input
                    class="chat-input"
                    type="text"
                    placeholder="Chat with user id"
                    prop:value=move || partner.get()
                    on:input=move |ev| partner.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Load"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="chat-page__info">{move || info.get()}</p>
            </Show>
            <div class="chat-page__messages">
                {move || {
                    chat.get()
                        .entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="chat-message">
                                    <span class="chat-message__sender">{entry.sender_name}</span>
                                    <span class="chat-message__body">{entry.body}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <form class="chat-page__composer" on:submit=on_send>
                <input
                    class="chat-input"
                    type="text"
                    placeholder="Write a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </div>
    }
}
