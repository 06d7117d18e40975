/// Request parameters the blocked table reads, passed in explicitly by the
/// HTTP layer instead of being pulled from ambient request state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRequest {
    pub order: Option<String>,
    pub orderby: Option<String>,
    pub blocked_type: Option<String>,
    pub search: Option<String>,
    pub ids: Vec<String>,
    pub nonce: Option<String>,
    pub action: Option<String>,
    pub action2: Option<String>,
    pub filter_action: Option<String>,
    pub paged: Option<String>,
    pub request_uri: String,
}

impl TableRequest {
    /// Builds a request from decoded key/value pairs (query string or form body).
    /// Unknown keys are ignored; `ids` may be given as `ids[]` or `ids`.
    pub fn from_pairs<I, K, V>(pairs: I, request_uri: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self {
            request_uri: request_uri.into(),
            ..Default::default()
        };

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "order" => request.order = Some(value),
                "orderby" => request.orderby = Some(value),
                "type" => request.blocked_type = Some(value),
                "s" => request.search = Some(value),
                "ids[]" | "ids" => request.ids.push(value),
                "zerospam_nonce" => request.nonce = Some(value),
                "action" => request.action = Some(value),
                "action2" => request.action2 = Some(value),
                "filter_action" => request.filter_action = Some(value),
                "paged" => request.paged = Some(value),
                _ => {}
            }
        }

        request
    }

    pub fn order(&self) -> Option<String> {
        non_empty(self.order.as_deref())
    }

    pub fn orderby(&self) -> Option<String> {
        non_empty(self.orderby.as_deref())
    }

    pub fn blocked_type_filter(&self) -> Option<String> {
        non_empty(self.blocked_type.as_deref())
    }

    pub fn ip_filter(&self) -> Option<String> {
        non_empty(self.search.as_deref())
    }

    pub fn nonce(&self) -> String {
        self.nonce.as_deref().map(sanitize_text).unwrap_or_default()
    }

    /// 1-based page number; missing or garbage input means the first page.
    pub fn page_number(&self) -> u32 {
        self.paged
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1)
            .max(1)
    }

    /// Selected bulk action. The top selector wins over the bottom one, `-1`
    /// means "none", and a filter submission never carries an action.
    pub fn current_action(&self) -> Option<String> {
        if self
            .filter_action
            .as_deref()
            .is_some_and(|f| !f.is_empty())
        {
            return None;
        }

        [self.action.as_deref(), self.action2.as_deref()]
            .into_iter()
            .flatten()
            .find(|a| !a.is_empty() && *a != "-1")
            .map(sanitize_text)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(sanitize_text).filter(|v| !v.is_empty())
}

/// Strips tags and control characters, collapses whitespace and trims.
pub fn sanitize_text(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            c if c.is_control() => stripped.push(' '),
            c => stripped.push(c),
        }
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
