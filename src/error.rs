//! Errors raised while rendering a page

use thiserror::Error;

/// Failures from the renderer's collaborators
///
/// The post page template has no failure modes of its own. Everything here
/// comes from resolving routes or from the template engine.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Route '{route}' is missing parameter '{parameter}'")]
    MissingRouteParameter { route: String, parameter: String },

    #[error("Route '{route}' was given {count} unused parameter(s)")]
    UnusedRouteParameters { route: String, count: usize },

    #[error("Route '{route}' has a malformed pattern: {pattern}")]
    MalformedRoute { route: String, pattern: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
