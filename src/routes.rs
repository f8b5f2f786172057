//! Typed route table for the application.
//!
//! DESIGN
//! ======
//! Routes are a closed set constructed once at startup through a builder
//! that validates the table (unique patterns, a single catch-all, a login
//! route whenever anything is protected). The table is the single source
//! for hrefs, nav entries, and gate decisions; the `<Routes>` wiring in
//! `app` mirrors it segment for segment.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Render units reachable through the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Login,
    Users,
    UserDetail,
    NotFound,
}

/// Closed variant of route kinds: root, fixed segment, single-parameter,
/// and catch-all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    /// The table root (`/`).
    Root,
    /// A single fixed segment, e.g. `about`.
    Fixed(&'static str),
    /// A fixed prefix followed by one named parameter, e.g. `user/:id`.
    Param {
        prefix: &'static str,
        param: &'static str,
    },
    /// Matches anything the other patterns did not.
    CatchAll,
}

impl RoutePattern {
    /// Try to match `segments` (a path split on `/`, empty segments
    /// dropped), returning captured parameters on success.
    fn matches(&self, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
        match self {
            Self::Root => segments.is_empty().then(Vec::new),
            Self::Fixed(seg) => match segments {
                [only] if only == seg => Some(Vec::new()),
                _ => None,
            },
            Self::Param { prefix, param } => match segments {
                [first, value] if first == prefix && !value.is_empty() => {
                    Some(vec![(*param, (*value).to_owned())])
                }
                _ => None,
            },
            Self::CatchAll => Some(Vec::new()),
        }
    }

    /// Canonical key used for duplicate detection.
    fn key(&self) -> String {
        match self {
            Self::Root => "/".to_owned(),
            Self::Fixed(seg) => format!("/{seg}"),
            Self::Param { prefix, param } => format!("/{prefix}/:{param}"),
            Self::CatchAll => "*".to_owned(),
        }
    }
}

/// One route: a pattern bound to a page, optionally behind the access
/// gate and optionally listed in the layout nav.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub page: Page,
    pub pattern: RoutePattern,
    pub protected: bool,
    pub nav_label: Option<&'static str>,
}

/// Route table validation failures, reported by [`RouteTableBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route pattern: {0}")]
    DuplicatePattern(String),
    #[error("protected routes require a login route")]
    MissingLogin,
    #[error("invalid route segment: {0:?}")]
    InvalidSegment(String),
}

/// The compiled route table. Cheap to clone; provided via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    base: &'static str,
    routes: Vec<RouteDef>,
}

/// Result of matching a concrete path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matched {
    pub page: Page,
    pub protected: bool,
    pub params: Vec<(&'static str, String)>,
}

/// Outcome of a navigation once the access gate is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    RedirectToLogin,
    NotFound,
}

impl RouteTable {
    pub fn builder(base: &'static str) -> RouteTableBuilder {
        RouteTableBuilder {
            base,
            routes: Vec::new(),
        }
    }

    /// The demo's route table, rooted at `/router7`.
    pub fn standard() -> Self {
        Self::builder("/router7")
            .route(Page::Home, RoutePattern::Root)
            .nav("Home")
            .route(Page::About, RoutePattern::Fixed("about"))
            .nav("About")
            .route(Page::Login, RoutePattern::Fixed("login"))
            .protected(Page::Users, RoutePattern::Fixed("users"))
            .nav("Users")
            .protected(
                Page::UserDetail,
                RoutePattern::Param {
                    prefix: "user",
                    param: "id",
                },
            )
            .route(Page::NotFound, RoutePattern::CatchAll)
            .build()
            .expect("standard route table is valid")
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Strip the base prefix when present so both app-relative and full
    /// browser paths match.
    fn app_path<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(self.base).unwrap_or(path)
    }

    /// Match `path` against the table. The catch-all is tried last; a
    /// table without one reports [`Page::NotFound`] directly.
    pub fn match_path(&self, path: &str) -> Matched {
        let rel = self.app_path(path);
        let segments: Vec<&str> = rel.split('/').filter(|s| !s.is_empty()).collect();

        for route in &self.routes {
            if matches!(route.pattern, RoutePattern::CatchAll) {
                continue;
            }
            if let Some(params) = route.pattern.matches(&segments) {
                return Matched {
                    page: route.page,
                    protected: route.protected,
                    params,
                };
            }
        }
        for route in &self.routes {
            if matches!(route.pattern, RoutePattern::CatchAll) {
                return Matched {
                    page: route.page,
                    protected: route.protected,
                    params: Vec::new(),
                };
            }
        }
        Matched {
            page: Page::NotFound,
            protected: false,
            params: Vec::new(),
        }
    }

    /// Match `path` and apply the access gate: protected pages never
    /// render for an unauthenticated session.
    pub fn resolve(&self, path: &str, authenticated: bool) -> Resolution {
        let matched = self.match_path(path);
        if matched.page == Page::NotFound {
            return Resolution::NotFound;
        }
        if matched.protected && !authenticated {
            return Resolution::RedirectToLogin;
        }
        Resolution::Render(matched.page)
    }

    /// Absolute href (base included) for pages addressable without
    /// parameters. Parameterized pages return `None`; see
    /// [`Self::user_detail_href`].
    pub fn href(&self, page: Page) -> Option<String> {
        self.routes
            .iter()
            .find(|r| r.page == page)
            .and_then(|r| self.static_href(r))
    }

    fn static_href(&self, route: &RouteDef) -> Option<String> {
        match &route.pattern {
            RoutePattern::Root => Some(self.root_href()),
            RoutePattern::Fixed(seg) => Some(format!("{}/{seg}", self.base)),
            RoutePattern::Param { .. } | RoutePattern::CatchAll => None,
        }
    }

    fn root_href(&self) -> String {
        if self.base.is_empty() {
            "/".to_owned()
        } else {
            format!("{}/", self.base)
        }
    }

    /// Href of the login page, the redirect target of the access gate.
    pub fn login_href(&self) -> String {
        self.href(Page::Login)
            .unwrap_or_else(|| format!("{}/login", self.base))
    }

    /// Href of the detail page for one user id.
    pub fn user_detail_href(&self, id: &str) -> String {
        self.routes
            .iter()
            .find_map(|r| match &r.pattern {
                RoutePattern::Param { prefix, .. } if r.page == Page::UserDetail => {
                    Some(format!("{}/{prefix}/{id}", self.base))
                }
                _ => None,
            })
            .unwrap_or_else(|| self.root_href())
    }

    /// (label, href) pairs for routes that carry a nav label, in table
    /// order.
    pub fn nav_entries(&self) -> Vec<(&'static str, String)> {
        self.routes
            .iter()
            .filter_map(|r| {
                let label = r.nav_label?;
                Some((label, self.static_href(r)?))
            })
            .collect()
    }
}

/// Builder for [`RouteTable`]; validation happens in [`Self::build`].
pub struct RouteTableBuilder {
    base: &'static str,
    routes: Vec<RouteDef>,
}

impl RouteTableBuilder {
    /// Add a public route.
    pub fn route(mut self, page: Page, pattern: RoutePattern) -> Self {
        self.routes.push(RouteDef {
            page,
            pattern,
            protected: false,
            nav_label: None,
        });
        self
    }

    /// Add a route behind the access gate.
    pub fn protected(mut self, page: Page, pattern: RoutePattern) -> Self {
        self.routes.push(RouteDef {
            page,
            pattern,
            protected: true,
            nav_label: None,
        });
        self
    }

    /// Attach a nav label to the most recently added route.
    pub fn nav(mut self, label: &'static str) -> Self {
        if let Some(last) = self.routes.last_mut() {
            last.nav_label = Some(label);
        }
        self
    }

    /// Validate and produce the table.
    ///
    /// # Errors
    ///
    /// Rejects duplicate patterns, more than one catch-all, empty or
    /// slash-containing segments, and protected routes without a login
    /// route to redirect to.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut keys: Vec<String> = Vec::new();

        for route in &self.routes {
            match &route.pattern {
                RoutePattern::Fixed(seg) => Self::check_segment(seg)?,
                RoutePattern::Param { prefix, param } => {
                    Self::check_segment(prefix)?;
                    Self::check_segment(param)?;
                }
                RoutePattern::Root | RoutePattern::CatchAll => {}
            }
            let key = route.pattern.key();
            if keys.contains(&key) {
                return Err(RouteTableError::DuplicatePattern(key));
            }
            keys.push(key);
        }

        let has_protected = self.routes.iter().any(|r| r.protected);
        let has_login = self.routes.iter().any(|r| r.page == Page::Login);
        if has_protected && !has_login {
            return Err(RouteTableError::MissingLogin);
        }

        Ok(RouteTable {
            base: self.base,
            routes: self.routes,
        })
    }

    fn check_segment(seg: &str) -> Result<(), RouteTableError> {
        if seg.is_empty() || seg.contains('/') {
            return Err(RouteTableError::InvalidSegment(seg.to_owned()));
        }
        Ok(())
    }
}
