use super::{state_to_fragment, NavState};
use log::debug;

/// Where the fragment lives. In the browser this is `window.location.hash`.
pub trait FragmentHost {
    /// Current fragment, including the leading `#` when present.
    fn current(&self) -> String;

    /// Sets the fragment. In the browser this adds a history entry.
    fn write(&mut self, fragment: &str);
}

/// Writes the canonical fragment for `state` to `host` unless the host
/// already shows it. Returns whether a write happened.
pub fn publish<H: FragmentHost + ?Sized>(state: &NavState, host: &mut H) -> bool {
    let fragment = state_to_fragment(state);
    if host.current() == fragment {
        return false;
    }
    debug!("Fragment {} -> {}", host.current(), fragment);
    host.write(&fragment);
    true
}

/// In-memory host recording every write, for headless use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFragment {
    pub fragment: String,
    pub writes: Vec<String>,
}

impl MemoryFragment {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            writes: Vec::new(),
        }
    }
}

impl FragmentHost for MemoryFragment {
    fn current(&self) -> String {
        self.fragment.clone()
    }

    fn write(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.writes.push(fragment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::Route;

    #[test]
    fn publish_skips_matching_fragment() {
        let mut host = MemoryFragment::new("#contacts");
        let state = NavState {
            route: Route::Contacts,
            ..NavState::default()
        };

        assert!(!publish(&state, &mut host));
        assert!(host.writes.is_empty());
    }

    #[test]
    fn publish_writes_once_per_change() {
        let mut host = MemoryFragment::default();
        let mut state = NavState::default();

        assert!(publish(&state, &mut host));
        assert!(!publish(&state, &mut host));
        state.navigate(Route::Catalog);
        assert!(publish(&state, &mut host));

        assert_eq!(host.writes, vec!["#home", "#catalog"]);
    }
}
