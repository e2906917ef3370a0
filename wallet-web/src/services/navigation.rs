//! Router-backed navigation for the deposit form

use leptos_router::NavigateOptions;
use lib_core::deposit::{Navigation, Navigator};
use std::rc::Rc;

use crate::utils::constants::HOME_ROUTE;

/// `Back` walks the browser history, `Home` goes through the router.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: Rc::new(move |path| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, to: Navigation) {
        log::debug!("Navigating {:?}", to);
        match to {
            Navigation::Home => (self.navigate)(HOME_ROUTE),
            Navigation::Back => {
                let went_back = web_sys::window()
                    .and_then(|w| w.history().ok())
                    .map(|history| history.back().is_ok())
                    .unwrap_or(false);
                if !went_back {
                    (self.navigate)(HOME_ROUTE);
                }
            }
        }
    }
}
