//! Scanning of CSS functional notation, e.g. `rgb(255, 127, 64)`.

/// A functional-notation expression split into its name and raw argument
/// slices.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FunctionCall<'a> {
    /// The function name, untouched. Match it case-insensitively.
    pub name: &'a str,
    /// The raw arguments in document order. When a `/` introduced the
    /// final argument it is already folded into this list.
    pub args: Vec<&'a str>,
}

impl FunctionCall<'_> {
    /// Whether the function name matches any of `names`, ignoring case.
    pub fn name_matches(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.name.eq_ignore_ascii_case(name))
    }
}

/// Scan `input` as `name(args)`. Returns `None` when the overall shape
/// does not match; argument counts are the caller's concern.
///
/// Arguments split on commas or whitespace, and a single `/` may
/// introduce the final (alpha) argument. There is some forgiveness in the
/// separators, mixing commas and spaces is accepted.
pub(crate) fn scan(input: &str) -> Option<FunctionCall<'_>> {
    let input = input.trim();
    let (name, rest) = input.split_once('(')?;
    let body = rest.strip_suffix(')')?;

    let name = name.trim();
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let (leading, alpha) = match body.split_once('/') {
        Some((leading, alpha)) => (leading, Some(alpha)),
        None => (body, None),
    };

    let mut args: Vec<&str> = split_args(leading).collect();

    if let Some(alpha) = alpha {
        let mut trailing = split_args(alpha);
        // The slash introduces exactly one argument, and only one slash
        // is allowed.
        match (trailing.next(), trailing.next()) {
            (Some(arg), None) if !arg.contains('/') => args.push(arg),
            _ => return None,
        }
    }

    Some(FunctionCall { name, args })
}

fn split_args(body: &str) -> impl Iterator<Item = &str> {
    body.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|piece| !piece.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_comma_separated_arguments() {
        let call = scan("rgb(255, 127, 64)").unwrap();
        assert_eq!(call.name, "rgb");
        assert_eq!(call.args, vec!["255", "127", "64"]);
    }

    #[test]
    fn scans_space_separated_arguments() {
        let call = scan("rgb(255 127   64)").unwrap();
        assert_eq!(call.args, vec!["255", "127", "64"]);
    }

    #[test]
    fn folds_the_slash_alpha_argument() {
        let call = scan("rgb(255 127 64 / 0.5)").unwrap();
        assert_eq!(call.args, vec!["255", "127", "64", "0.5"]);
    }

    #[test]
    fn tolerates_loose_spacing() {
        let call = scan("rgb(  255,127 ,64 )").unwrap();
        assert_eq!(call.args, vec!["255", "127", "64"]);
    }

    #[test]
    fn matches_names_case_insensitively() {
        let call = scan("HSLA(120, 50%, 50%, none)").unwrap();
        assert!(call.name_matches(&["hsl", "hsla"]));
        assert!(!call.name_matches(&["rgb", "rgba"]));
        assert_eq!(call.args.len(), 4);
    }

    #[test]
    fn rejects_shapes_that_are_not_function_calls() {
        assert_eq!(scan("bad string"), None);
        assert_eq!(scan("rgb 255 127 64"), None);
        assert_eq!(scan("(1, 2, 3)"), None);
        assert_eq!(scan("rgb(1 2 / 3 4)"), None);
        assert_eq!(scan("rgb(1 2 / 3 / 4)"), None);
    }
}
