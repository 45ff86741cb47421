//! Dimension rule grammar for the custom price list.
//!
//! A rule is either the literal "ALL" or comparison clauses joined with ';',
//! all of which must hold: ">34;<78" reads "over 34 and under 78". The
//! relaxed variant re-evaluates the same rule keeping only its upper-bound
//! clauses; it exists to recover table rows whose lower-bound clause is too
//! strict for a boundary case, and must never grow its own parser.

/// One parsed comparison clause.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Clause {
    Greater(f64),
    GreaterEq(f64),
    Less(f64),
    LessEq(f64),
}

impl Clause {
    fn parse(text: &str) -> Option<Clause> {
        let text = text.trim();
        if let Some(rest) = text.strip_prefix(">=") {
            return rest.trim().parse().ok().map(Clause::GreaterEq);
        }
        if let Some(rest) = text.strip_prefix("<=") {
            return rest.trim().parse().ok().map(Clause::LessEq);
        }
        if let Some(rest) = text.strip_prefix('>') {
            return rest.trim().parse().ok().map(Clause::Greater);
        }
        if let Some(rest) = text.strip_prefix('<') {
            return rest.trim().parse().ok().map(Clause::Less);
        }
        None
    }

    fn holds(&self, value: f64) -> bool {
        match *self {
            Clause::Greater(bound) => value > bound,
            Clause::GreaterEq(bound) => value >= bound,
            Clause::Less(bound) => value < bound,
            Clause::LessEq(bound) => value <= bound,
        }
    }

    /// Upper-bound clauses are the '<' family.
    fn is_upper_bound(&self) -> bool {
        matches!(self, Clause::Less(_) | Clause::LessEq(_))
    }
}

fn clauses(rule: &str) -> impl Iterator<Item = Clause> + '_ {
    rule.split(';').filter_map(Clause::parse)
}

/// Evaluate a dimension rule. "ALL" and unparseable clauses pass; every
/// parsed clause must hold.
pub fn matches_rule(value: f64, rule: &str) -> bool {
    if rule.trim().eq_ignore_ascii_case("ALL") {
        return true;
    }
    clauses(rule).all(|clause| clause.holds(value))
}

/// Evaluate a dimension rule keeping only its upper-bound clauses.
/// Vacuously true when the rule has no upper bound.
pub fn matches_relaxed(value: f64, rule: &str) -> bool {
    if rule.trim().eq_ignore_ascii_case("ALL") {
        return true;
    }
    clauses(rule)
        .filter(Clause::is_upper_bound)
        .all(|clause| clause.holds(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(matches_rule(0.0, "ALL"));
        assert!(matches_rule(1000.0, "all"));
    }

    #[test]
    fn test_joined_clauses_are_anded() {
        assert!(matches_rule(50.0, ">34;<78"));
        assert!(!matches_rule(34.0, ">34;<78"));
        assert!(!matches_rule(78.0, ">34;<78"));
    }

    #[test]
    fn test_inclusive_operators() {
        assert!(matches_rule(36.0, ">=36;<78"));
        assert!(matches_rule(78.0, ">36;<=78"));
    }

    #[test]
    fn test_relaxed_drops_lower_bounds() {
        // 34 fails the strict rule on its lower bound but passes relaxed.
        assert!(!matches_rule(34.0, ">34;<78"));
        assert!(matches_relaxed(34.0, ">34;<78"));
        // The upper bound still applies.
        assert!(!matches_relaxed(80.0, ">34;<78"));
    }

    #[test]
    fn test_relaxed_without_upper_bound_is_vacuous() {
        assert!(matches_relaxed(1.0, ">34"));
    }
}
