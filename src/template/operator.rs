// Expression operators and their expansion rules

/// An expression operator together with the fixed rules it expands with.
///
/// Every field is a read-only fact about the operator character; the whole
/// table lives in [`Operator::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// Character following `{`, or `None` for simple string expansion
    pub symbol: Option<char>,
    /// Text prepended to the expansion when at least one variable is defined
    pub prefix: &'static str,
    /// Joins the fragments of one expression
    pub separator: char,
    /// Emit `name=value` pairs instead of bare values
    pub named: bool,
    /// Appended to the name of an empty value when `named` is set
    pub if_empty: &'static str,
    /// Leave reserved characters and pct-encoded triplets untouched
    pub allow_reserved: bool,
}

impl Operator {
    pub const SIMPLE: Operator = Operator::new(None, "", ',', false, "", false);
    pub const RESERVED: Operator = Operator::new(Some('+'), "", ',', false, "", true);
    pub const FRAGMENT: Operator = Operator::new(Some('#'), "#", ',', false, "", true);
    pub const LABEL: Operator = Operator::new(Some('.'), ".", '.', false, "", false);
    pub const PATH: Operator = Operator::new(Some('/'), "/", '/', false, "", false);
    pub const PATH_PARAM: Operator = Operator::new(Some(';'), ";", ';', true, "", false);
    pub const QUERY: Operator = Operator::new(Some('?'), "?", '&', true, "=", false);
    pub const QUERY_CONTINUATION: Operator = Operator::new(Some('&'), "&", '&', true, "=", false);

    pub const ALL: [Operator; 8] = [
        Self::SIMPLE,
        Self::RESERVED,
        Self::FRAGMENT,
        Self::LABEL,
        Self::PATH,
        Self::PATH_PARAM,
        Self::QUERY,
        Self::QUERY_CONTINUATION,
    ];

    const fn new(
        symbol: Option<char>,
        prefix: &'static str,
        separator: char,
        named: bool,
        if_empty: &'static str,
        allow_reserved: bool,
    ) -> Self {
        Self {
            symbol,
            prefix,
            separator,
            named,
            if_empty,
            allow_reserved,
        }
    }

    /// Look up the operator for the character following `{`.
    ///
    /// Returns `None` when `ch` is not one of `+ # . / ; ? &`; the caller
    /// decides whether that means simple expansion or a malformed expression.
    pub fn from_symbol(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Self::RESERVED),
            '#' => Some(Self::FRAGMENT),
            '.' => Some(Self::LABEL),
            '/' => Some(Self::PATH),
            ';' => Some(Self::PATH_PARAM),
            '?' => Some(Self::QUERY),
            '&' => Some(Self::QUERY_CONTINUATION),
            _ => None,
        }
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::SIMPLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_covers_every_symbol() {
        for op in Operator::ALL.iter().skip(1) {
            let symbol = op.symbol.unwrap();
            assert_eq!(Operator::from_symbol(symbol), Some(*op));
        }
        assert_eq!(Operator::from_symbol('a'), None);
        assert_eq!(Operator::from_symbol('='), None);
    }

    #[test]
    fn test_named_operators() {
        let named: Vec<char> = Operator::ALL
            .iter()
            .filter(|op| op.named)
            .filter_map(|op| op.symbol)
            .collect();
        assert_eq!(named, vec![';', '?', '&']);
    }

    #[test]
    fn test_reserved_policy_only_for_plus_and_hash() {
        let reserved: Vec<char> = Operator::ALL
            .iter()
            .filter(|op| op.allow_reserved)
            .filter_map(|op| op.symbol)
            .collect();
        assert_eq!(reserved, vec!['+', '#']);
    }

    #[test]
    fn test_query_separator_and_prefix() {
        assert_eq!(Operator::QUERY.prefix, "?");
        assert_eq!(Operator::QUERY.separator, '&');
        assert_eq!(Operator::QUERY_CONTINUATION.prefix, "&");
        assert_eq!(Operator::SIMPLE.separator, ',');
        assert_eq!(Operator::default(), Operator::SIMPLE);
    }
}
