use crate::error::RangeError;

/// A normalized (show index, season, episode) triple produced from one
/// command token. Unset trailing positions hold the sentinel `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    /// Short ID of the show in the most recent listing (1-based)
    pub index: i32,
    /// Season number, or -1 when the operation covers the whole show
    pub season: i32,
    /// Episode number, or -1 when the operation covers the whole season
    pub episode: i32,
}

/// What a triple refers to once the -1 sentinels are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Entire show
    Show,
    /// Entire season
    Season(u32),
    /// Single episode (season, episode)
    Episode(u32, u32),
}

impl Triple {
    fn new(index: i32, season: i32, episode: i32) -> Self {
        Self {
            index,
            season,
            episode,
        }
    }

    /// Interpret the sentinel convention: both unset means the whole show,
    /// episode unset means the whole season, both set means one episode.
    pub fn scope(&self) -> Scope {
        match (self.season, self.episode) {
            (s, e) if s >= 0 && e >= 0 => Scope::Episode(s as u32, e as u32),
            (s, _) if s >= 0 => Scope::Season(s as u32),
            _ => Scope::Show,
        }
    }
}

/// Parse a compact episode command like `2x3x10 2x3-3x3` into triples.
///
/// Each whitespace-separated token is `A`, `AxB`, or `AxBxC` where a
/// component is either a single integer or an inclusive range `M-N`. A
/// range expands into one triple per value, keeping the components parsed
/// before it and padding the rest with -1. Two quirks of the original
/// command language are preserved:
///
/// - a reversed range (`10-8`) expands to nothing rather than failing;
/// - components after a range in the same token are silently dropped.
///
/// Tokens with more than one range component are rejected outright; the
/// legacy behavior for those was never meaningful.
pub fn parse(command: &str) -> Result<Vec<Triple>, RangeError> {
    let mut triples = Vec::new();

    for token in command.split_whitespace() {
        parse_token(token, &mut triples)?;
    }

    Ok(triples)
}

fn parse_token(token: &str, out: &mut Vec<Triple>) -> Result<(), RangeError> {
    let parts: Vec<&str> = token.split('x').take(3).collect();

    if parts.iter().filter(|p| p.contains('-')).count() > 1 {
        return Err(RangeError::MultipleRanges(token.to_string()));
    }

    let mut head: Vec<i32> = Vec::with_capacity(3);

    for part in parts {
        if let Some((from, to)) = part.split_once('-') {
            let from = parse_number(from)?;
            let to = parse_number(to)?;
            for value in from..=to {
                let mut components = head.clone();
                components.push(value);
                out.push(pad(components));
            }
            // Anything after the range in this token is dropped.
            return Ok(());
        }
        head.push(parse_number(part)?);
    }

    out.push(pad(head));
    Ok(())
}

fn parse_number(text: &str) -> Result<i32, RangeError> {
    text.parse()
        .map_err(|_| RangeError::InvalidNumber(text.to_string()))
}

fn pad(mut components: Vec<i32>) -> Triple {
    while components.len() < 3 {
        components.push(-1);
    }
    Triple::new(components[0], components[1], components[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_single_component() {
        assert_eq!(parse("5").unwrap(), vec![Triple::new(5, -1, -1)]);
    }

    #[test]
    fn test_two_components() {
        assert_eq!(parse("5x2").unwrap(), vec![Triple::new(5, 2, -1)]);
    }

    #[test]
    fn test_three_components() {
        assert_eq!(parse("5x2x10").unwrap(), vec![Triple::new(5, 2, 10)]);
    }

    #[test]
    fn test_episode_range_expands_ascending() {
        assert_eq!(
            parse("5x2x8-10").unwrap(),
            vec![
                Triple::new(5, 2, 8),
                Triple::new(5, 2, 9),
                Triple::new(5, 2, 10),
            ]
        );
    }

    #[test]
    fn test_reversed_range_expands_to_nothing() {
        assert_eq!(parse("5x2x10-8").unwrap(), vec![]);
    }

    #[test]
    fn test_reversed_range_keeps_other_tokens() {
        assert_eq!(
            parse("1x1x1 5x2x10-8 2x2x2").unwrap(),
            vec![Triple::new(1, 1, 1), Triple::new(2, 2, 2)]
        );
    }

    #[test]
    fn test_multiple_tokens_in_input_order() {
        assert_eq!(
            parse("1x2x3 4x5x6").unwrap(),
            vec![Triple::new(1, 2, 3), Triple::new(4, 5, 6)]
        );
    }

    #[test]
    fn test_season_range() {
        assert_eq!(
            parse("2x3-5").unwrap(),
            vec![
                Triple::new(2, 3, -1),
                Triple::new(2, 4, -1),
                Triple::new(2, 5, -1),
            ]
        );
    }

    #[test]
    fn test_non_numeric_component_fails() {
        assert_eq!(
            parse("5xa").unwrap_err(),
            RangeError::InvalidNumber("a".to_string())
        );
    }

    #[test]
    fn test_non_numeric_range_bound_fails() {
        assert_eq!(
            parse("5x2x8-z").unwrap_err(),
            RangeError::InvalidNumber("z".to_string())
        );
    }

    #[test]
    fn test_missing_component_fails() {
        // "x3" has an empty first component
        assert!(matches!(
            parse("x3").unwrap_err(),
            RangeError::InvalidNumber(_)
        ));
    }

    #[test]
    fn test_multi_range_token_rejected() {
        assert_eq!(
            parse("1-2x3-4").unwrap_err(),
            RangeError::MultipleRanges("1-2x3-4".to_string())
        );
    }

    // Known limitation inherited from the original command language: a
    // component after a range in the same token is dropped, not applied.
    #[test]
    fn test_component_after_range_is_dropped() {
        assert_eq!(
            parse("2x3-4x7").unwrap(),
            vec![Triple::new(2, 3, -1), Triple::new(2, 4, -1)]
        );
    }

    #[test]
    fn test_parse_is_pure() {
        let first = parse("2x3x10 2x3-3x3").unwrap();
        let second = parse("2x3x10 2x3-3x3").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scope_mapping() {
        assert_eq!(Triple::new(1, -1, -1).scope(), Scope::Show);
        assert_eq!(Triple::new(1, 4, -1).scope(), Scope::Season(4));
        assert_eq!(Triple::new(1, 4, 2).scope(), Scope::Episode(4, 2));
    }
}
