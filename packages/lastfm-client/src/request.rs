//! Outbound parameter sets for the user methods

use chrono::NaiveDate;

use crate::models::Period;

/// Operation parameters, in the order they are sent
pub(crate) type Params = Vec<(&'static str, String)>;

/// Names owned by the client; operation parameters never override them
const IDENTITY_PARAMS: [&str; 3] = ["method", "api_key", "format"];

/// Assemble the full query for one call: the method and identity parameters
/// first, then the operation's own parameters.
pub(crate) fn build_query<'a>(
    method: &'a str,
    api_key: &'a str,
    params: &'a [(&'static str, String)],
) -> Vec<(&'a str, &'a str)> {
    let mut query = vec![("method", method), ("api_key", api_key), ("format", "json")];
    query.extend(
        params
            .iter()
            .filter(|(name, _)| !IDENTITY_PARAMS.contains(name))
            .map(|(name, value)| (*name, value.as_str())),
    );
    query
}

/// Options for `user.getrecenttracks`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentTracksOptions {
    pub limit: u32,
    pub page: u32,
    /// Ask for extended artist data and loved status
    pub extended: bool,
    /// Only scrobbles after this unix timestamp (seconds, UTC)
    pub from: Option<i64>,
    /// Only scrobbles before this unix timestamp (seconds, UTC)
    pub to: Option<i64>,
}

impl Default for RecentTracksOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            page: 1,
            extended: false,
            from: None,
            to: None,
        }
    }
}

impl RecentTracksOptions {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn since(mut self, unix_seconds: i64) -> Self {
        self.from = Some(unix_seconds);
        self
    }

    pub fn until(mut self, unix_seconds: i64) -> Self {
        self.to = Some(unix_seconds);
        self
    }

    pub(crate) fn params(&self) -> Params {
        let mut params = vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
            ("extended", if self.extended { "1" } else { "0" }.to_string()),
        ];
        if let Some(from) = self.from {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.to_string()));
        }
        params
    }
}

/// Options for `user.gettopartists`, `user.gettopalbums` and `user.gettoptracks`
///
/// `period` is sent as given; an unsupported value is rejected by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopOptions {
    pub period: String,
    pub limit: u32,
    pub page: u32,
}

impl Default for TopOptions {
    fn default() -> Self {
        Self {
            period: Period::Overall.into(),
            limit: 5,
            page: 1,
        }
    }
}

impl TopOptions {
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn params(&self) -> Params {
        vec![
            ("period", self.period.clone()),
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// Options for `user.gettoptags`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
    pub limit: u32,
    pub page: u32,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self { limit: 5, page: 1 }
    }
}

impl TagOptions {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn params(&self) -> Params {
        vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

/// Date range for the weekly chart methods; unset ends are left to the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ChartRange {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub(crate) fn params(&self) -> Params {
        let mut params = Params::new();
        if let Some(from) = self.from {
            params.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

/// Prepend the `user` parameter to an operation's parameters
pub(crate) fn for_user(username: &str, mut params: Params) -> Params {
    params.insert(0, ("user", username.to_string()));
    params
}
