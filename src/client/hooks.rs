use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    client::{Client, Sessions},
    model::user::Session,
};

pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Current session, re-read whenever the session store publishes a change.
///
/// The subscription lives as long as the calling component.
pub fn use_session() -> Signal<Option<Session>> {
    let sessions = use_context::<Sessions>();
    let session = use_signal(|| sessions.current());

    use_hook(|| {
        let store = sessions.clone();
        Rc::new(sessions.subscribe(move |_| {
            let mut session = session;
            session.set(store.current());
        }))
    });

    session
}
