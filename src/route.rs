//! Page Routing
//!
//! Pages are chosen from the URL path once at mount; links do full loads.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    ApplyForm,
    News,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/applyform" => Route::ApplyForm,
            "/news" => Route::News,
            _ => Route::NotFound,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => "/",
            Route::ApplyForm => "/applyform",
            Route::News => "/news",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/applyform"), Route::ApplyForm);
        assert_eq!(Route::from_path("/applyform/"), Route::ApplyForm);
        assert_eq!(Route::from_path("/news"), Route::News);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
        assert_eq!(Route::from_path("/news/3"), Route::NotFound);
    }

    #[test]
    fn test_href_round_trip() {
        for route in [Route::Home, Route::ApplyForm, Route::News] {
            assert_eq!(Route::from_path(route.href()), route);
        }
    }
}
