use std::fmt;

/// Client-side routes the form can navigate to.
///
/// Static segments win over ids: a listing whose id is `new` renders to
/// `/listings/new`, which resolves to `NewListing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Listings,
    NewListing,
    ListingDetail(String),
    NotFound,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Listings => "/listings".to_string(),
            Route::NewListing => "/listings/new".to_string(),
            Route::ListingDetail(id) => format!("/listings/{}", urlencoding::encode(id)),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Resolve a path, falling back to `NotFound`
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["listings"] => Route::Listings,
            ["listings", "new"] => Route::NewListing,
            ["listings", id] => match urlencoding::decode(id) {
                Ok(id) => Route::ListingDetail(id.into_owned()),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_uses_listing_id() {
        assert_eq!(
            Route::ListingDetail("abc123".to_string()).path(),
            "/listings/abc123"
        );
    }

    #[test]
    fn detail_id_is_a_single_segment() {
        let route = Route::ListingDetail("a/b c".to_string());

        assert_eq!(route.path(), "/listings/a%2Fb%20c");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/listings/"), Route::Listings);
        assert_eq!(Route::parse("/listings/new"), Route::NewListing);
        assert_eq!(
            Route::parse("/listings/abc123?ref=form"),
            Route::ListingDetail("abc123".to_string())
        );
    }

    #[test]
    fn static_segment_wins_over_listing_id() {
        let path = Route::ListingDetail("new".to_string()).path();

        assert_eq!(path, "/listings/new");
        assert_eq!(Route::parse(&path), Route::NewListing);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/adverts/1"), Route::NotFound);
        assert_eq!(Route::parse("/listings/1/edit"), Route::NotFound);
    }
}
