//! Page routing: which view a URL path selects.

pub mod table;

pub use table::{RouteError, RouteTable};

/// View a path pattern is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Room,
    RedirectLanding,
}

const ROOM_PARAM: &str = "roomID";

/// The page routes, most specific first; `/` is the catch-all and must stay last.
/// `/room` without an id bounces to the landing page.
pub fn page_routes() -> Result<RouteTable<Page>, RouteError> {
    RouteTable::from_patterns([
        ("/room/:roomID", Page::Room),
        ("/room", Page::RedirectLanding),
        ("/", Page::Landing),
    ])
}

/// Route selected for a single navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    /// Room id exactly as it appeared in the path; not checked against the generator's format.
    Room { room_id: String },
    RedirectLanding,
}

impl Route {
    pub fn resolve(table: &RouteTable<Page>, path: &str) -> Self {
        let matched = table.select(path);
        tracing::trace!(path, pattern = matched.pattern.as_str(), "route matched");
        match matched.target {
            Page::Landing => Route::Landing,
            Page::Room => match matched.params.get(ROOM_PARAM) {
                Some(room_id) => Route::Room { room_id: room_id.to_owned() },
                None => Route::Landing,
            },
            Page::RedirectLanding => Route::RedirectLanding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Route {
        Route::resolve(&page_routes().unwrap(), path)
    }

    #[test]
    fn root_is_landing() {
        assert_eq!(resolve("/"), Route::Landing);
    }

    #[test]
    fn room_id_comes_from_path() {
        assert_eq!(resolve("/room/abc123"), Route::Room { room_id: "abc123".into() });
        assert_eq!(resolve("/room/3fa9c1/"), Route::Room { room_id: "3fa9c1".into() });
    }

    #[test]
    fn room_route_ignores_trailing_segments() {
        assert_eq!(resolve("/room/abc/extra"), Route::Room { room_id: "abc".into() });
    }

    #[test]
    fn room_id_is_not_validated() {
        assert_eq!(resolve("/room/NOT-HEX!"), Route::Room { room_id: "NOT-HEX!".into() });
        assert_eq!(resolve("/room/%3Cb%3E"), Route::Room { room_id: "%3Cb%3E".into() });
    }

    #[test]
    fn empty_room_id_redirects_to_landing() {
        assert_eq!(resolve("/room/"), Route::RedirectLanding);
        assert_eq!(resolve("/room"), Route::RedirectLanding);
        assert_eq!(resolve("/room//"), Route::RedirectLanding);
    }

    #[test]
    fn unknown_paths_fall_back_to_landing() {
        assert_eq!(resolve("/lobby"), Route::Landing);
        assert_eq!(resolve("/rooms/abc"), Route::Landing);
        assert_eq!(resolve("/a/b/c"), Route::Landing);
    }
}
