//! URL fragment routing.
//!
//! The fragment is matched exactly against a fixed table. The empty fragment
//! is Home; anything else outside the table is a not-found target and leaves
//! every navigation item unhighlighted.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    Home,
    MyPlants,
    Search,
    Account,
}

impl Route {
    /// Navigation items in display order
    pub const ALL: [Route; 4] = [Route::Home, Route::MyPlants, Route::Search, Route::Account];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::MyPlants => "myplants",
            Self::Search => "search",
            Self::Account => "account",
        }
    }

    /// Fragment the navigation link for this route points at
    pub fn fragment(&self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::MyPlants => "#myplants",
            Self::Search => "#search",
            Self::Account => "#account",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::MyPlants => "My Plants",
            Self::Search => "Search",
            Self::Account => "Account",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a fragment navigates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Screen(Route),
    NotFound(String),
}

impl RouteTarget {
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Screen(route) => Some(*route),
            Self::NotFound(_) => None,
        }
    }
}

fn lookup(fragment: &str) -> Option<Route> {
    match fragment {
        "" | "#home" => Some(Route::Home),
        "#myplants" => Some(Route::MyPlants),
        "#search" => Some(Route::Search),
        "#account" => Some(Route::Account),
        _ => None,
    }
}

pub fn resolve(fragment: &str) -> RouteTarget {
    match lookup(fragment) {
        Some(route) => RouteTarget::Screen(route),
        None => RouteTarget::NotFound(fragment.to_string()),
    }
}

/// Navigation item to highlight for `fragment`, from the same table as [`resolve`]
pub fn active_nav(fragment: &str) -> Option<Route> {
    lookup(fragment)
}
