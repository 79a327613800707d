//! Navigation surface: the display route and the edit route.

/// Top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Read-only profile view at `/`.
    Display,
    /// Profile edit form at `/edit`.
    Edit,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Display => "/",
            Self::Edit => "/edit",
        }
    }

    /// Resolves a request path. Unknown paths redirect to `Display`.
    pub fn resolve(path: &str) -> Self {
        match path.trim_matches('/') {
            "edit" => Self::Edit,
            _ => Self::Display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn resolves_known_and_unknown_paths() {
        assert_eq!(Route::resolve(""), Route::Display);
        assert_eq!(Route::resolve("/"), Route::Display);
        assert_eq!(Route::resolve("/edit/"), Route::Edit);
        assert_eq!(Route::resolve("/admin"), Route::Display);
        assert_eq!(Route::resolve(Route::Edit.path()), Route::Edit);
    }
}
