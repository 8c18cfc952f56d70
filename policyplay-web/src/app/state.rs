use crate::api::ApiClient;
use crate::router::Route;
use policyplay_core::User;
use yew::prelude::*;

/// Shared by every screen through a [`ContextProvider`].
#[derive(Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub user: Option<User>,
    pub set_user: Callback<Option<User>>,
    /// Message shown above the given page until the visitor moves on.
    pub set_notice: Callback<(Route, AttrValue)>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

impl AppContext {
    pub fn logout(&self) {
        self.client.logout();
        self.set_user.emit(None);
    }
}

#[derive(Clone)]
pub struct AppState {
    pub user: UseStateHandle<Option<User>>,
    pub notice: UseStateHandle<Option<(Route, AttrValue)>>,
    pub client: ApiClient,
}

#[hook]
pub fn use_app_state() -> AppState {
    let client = (*use_memo((), |()| ApiClient::from_window())).clone();
    let user = {
        let client = client.clone();
        use_state(move || client.auth().current_user())
    };
    AppState {
        user,
        notice: use_state(|| None::<(Route, AttrValue)>),
        client,
    }
}

impl AppState {
    #[must_use]
    pub fn context(&self) -> AppContext {
        let user = self.user.clone();
        let notice = self.notice.clone();
        AppContext {
            client: self.client.clone(),
            user: (*self.user).clone(),
            set_user: Callback::from(move |next| user.set(next)),
            set_notice: Callback::from(move |next| notice.set(Some(next))),
        }
    }
}

/// The app context; screens are only mounted under the provider.
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("screens render inside the AppContext provider")
}
