//! Transient success/error notifications in the top-right corner.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeQueue, TOAST_MS};

/// Queue a toast and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeQueue>, kind: NoticeKind, text: impl Into<String>) {
    let mut id = 0;
    notices.update(|q| id = q.push(kind, text));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        notices.update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (id, TOAST_MS);
}

pub fn notify_success(notices: RwSignal<NoticeQueue>, text: impl Into<String>) {
    notify(notices, NoticeKind::Success, text);
}

pub fn notify_error(notices: RwSignal<NoticeQueue>, text: impl Into<String>) {
    notify(notices, NoticeKind::Error, text);
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeQueue>>();

    view! {
        <div class="toasts">
            <For each=move || notices.get().items().to_vec() key=|n| n.id let:notice>
                <div
                    class=toast_class(notice.kind)
                    on:click=move |_| notices.update(|q| q.dismiss(notice.id))
                >
                    {notice.text.clone()}
                </div>
            </For>
        </div>
    }
}
