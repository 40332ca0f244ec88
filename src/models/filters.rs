/// Server-side search filter for the advocate directory.
///
/// Absent fields impose no constraint. Categories are ANDed together;
/// within `specialties` the match is an OR (at least one held specialty
/// must equal one of the supplied names, compared case-sensitively).
#[derive(Debug, Default, Clone)]
pub struct AdvocateFilter {
    /// Free-text name query; split on whitespace into tokens, every token
    /// must match first or last name as a case-insensitive substring.
    pub name_query: Option<String>,
    /// Case-insensitive substring match against the city field.
    pub city: Option<String>,
    /// Exact specialty names; empty means no specialty constraint.
    pub specialties: Vec<String>,
}

impl AdvocateFilter {
    /// Build a filter from raw query parameters. Parsing is permissive:
    /// blank values and empty CSV segments are treated as "no filter".
    pub fn from_params(
        name_query: Option<&str>,
        city: Option<&str>,
        specialties_csv: Option<&str>,
    ) -> Self {
        let non_blank = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Self {
            name_query: name_query.and_then(non_blank),
            city: city.and_then(non_blank),
            specialties: specialties_csv
                .map(|csv| {
                    csv.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Whitespace-split name tokens, empty when no name query is set.
    pub fn name_tokens(&self) -> Vec<&str> {
        self.name_query
            .as_deref()
            .map(|q| q.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.name_tokens().is_empty() && self.city.is_none() && self.specialties.is_empty()
    }
}
