use serde::{Deserialize, Serialize};

/// One navigation item mapping a display label to a route
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageEntry {
    /// display label, unique within the navigation
    pub name: String,

    /// route the page is served under, starts with '/'
    pub path: String,
}
