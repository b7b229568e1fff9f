use crate::core::FxError;
use crate::render::RenderTarget;

/// A comma-separated list of compound selectors, e.g. `span.price, [data-deposit=main]`.
///
/// Each compound is an optional tag (or `*`) followed by any number of `#id`, `.class`,
/// `[attr]` and `[attr=value]` parts. Combinators are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

impl Selector {
    /// Parses a selector list.
    ///
    /// # Errors
    ///
    /// Returns `FxError::Data` for empty alternatives, combinators, or malformed parts.
    pub fn parse(input: &str) -> Result<Self, FxError> {
        let alternatives = input
            .split(',')
            .map(|alt| parse_compound(alt.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { alternatives })
    }

    pub fn matches<T: RenderTarget + ?Sized>(&self, target: &T) -> bool {
        self.alternatives.iter().any(|c| c.matches(target))
    }
}

impl std::str::FromStr for Selector {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Compound {
    fn matches<T: RenderTarget + ?Sized>(&self, target: &T) -> bool {
        if let Some(tag) = &self.tag
            && !target
                .tag_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
        {
            return false;
        }

        self.parts.iter().all(|part| match part {
            Part::Id(id) => target.attribute("id") == Some(id.as_str()),
            Part::Class(class) => target
                .attribute("class")
                .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class)),
            Part::Attr { name, value: None } => target.attribute(name).is_some(),
            Part::Attr {
                name,
                value: Some(expected),
            } => target.attribute(name) == Some(expected.as_str()),
        })
    }
}

fn parse_compound(input: &str) -> Result<Compound, FxError> {
    if input.is_empty() {
        return Err(FxError::Data("empty selector".into()));
    }

    let mut compound = Compound::default();
    let mut rest = input;

    let tag_len = rest.find(['#', '.', '[']).unwrap_or(rest.len());
    let tag = &rest[..tag_len];
    if !tag.is_empty() && tag != "*" {
        compound.tag = Some(ident(tag, input)?.to_string());
    }
    rest = &rest[tag_len..];

    while let Some(first) = rest.chars().next() {
        match first {
            '#' | '.' => {
                let body = &rest[1..];
                let len = body.find(['#', '.', '[']).unwrap_or(body.len());
                let name = ident(&body[..len], input)?.to_string();
                compound.parts.push(if first == '#' {
                    Part::Id(name)
                } else {
                    Part::Class(name)
                });
                rest = &body[len..];
            }
            '[' => {
                let close = rest
                    .find(']')
                    .ok_or_else(|| FxError::Data(format!("unclosed attribute in selector `{input}`")))?;
                let inner = &rest[1..close];
                let part = match inner.split_once('=') {
                    Some((name, value)) => Part::Attr {
                        name: ident(name.trim(), input)?.to_string(),
                        value: Some(unquote(value.trim()).to_string()),
                    },
                    None => Part::Attr {
                        name: ident(inner.trim(), input)?.to_string(),
                        value: None,
                    },
                };
                compound.parts.push(part);
                rest = &rest[close + 1..];
            }
            _ => {
                return Err(FxError::Data(format!(
                    "unsupported selector syntax in `{input}`"
                )));
            }
        }
    }

    Ok(compound)
}

fn ident<'a>(name: &'a str, input: &str) -> Result<&'a str, FxError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(name)
    } else {
        Err(FxError::Data(format!(
            "invalid name `{name}` in selector `{input}`"
        )))
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
