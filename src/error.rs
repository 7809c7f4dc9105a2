use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Raised when the site declaration is structurally invalid.
///
/// Every variant names the offending field or value. Validation runs
/// once at startup and is fatal; there is no recovery path.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("page {name:?} declares route {path:?} which is already in use")]
    #[diagnostic(code(portalgen::config::duplicate_route))]
    DuplicateRoute { name: String, path: String },

    #[error("page name {name:?} is declared more than once")]
    #[diagnostic(code(portalgen::config::duplicate_name))]
    DuplicateName { name: String },

    #[error("page {name:?} declares route {path:?} which does not start with '/'")]
    #[diagnostic(code(portalgen::config::route_missing_slash))]
    RouteMissingSlash { name: String, path: String },

    #[error("page {name:?} declares route {path:?} with a trailing '/'")]
    #[diagnostic(code(portalgen::config::route_trailing_slash))]
    RouteTrailingSlash { name: String, path: String },

    #[error("the page with route {path:?} has an empty name")]
    #[diagnostic(code(portalgen::config::empty_page_name))]
    EmptyPageName { path: String },

    #[error("the site title must not be empty")]
    #[diagnostic(code(portalgen::config::empty_title))]
    EmptyTitle,

    #[error("the content root {} does not exist or is not a directory", path.display())]
    #[diagnostic(code(portalgen::config::root_not_found))]
    RootNotFound { path: PathBuf },
}
