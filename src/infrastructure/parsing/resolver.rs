//! Field resolution over ordered selector-fallback chains
//!
//! The page's class names are generated hashes, so every field is looked up
//! through an ordered chain of strategies. Earlier entries take precedence;
//! a miss is never fatal, it only hands over to the next strategy.

use std::collections::HashSet;

use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};

/// One lookup strategy for a field within a scope element.
#[derive(Debug, Clone)]
pub enum FieldStrategy {
    /// Attribute value of the first descendant matching the selector that
    /// carries a non-empty value for the named attribute.
    Attr { selector: Selector, name: String },

    /// Trimmed text of the first descendant matching the selector whose
    /// trimmed text is non-empty.
    Text(Selector),

    /// Trimmed full text content of the scope element itself.
    OwnText,
}

impl FieldStrategy {
    pub fn attr(selector: &str, name: &str) -> ParsingResult<Self> {
        Ok(Self::Attr {
            selector: parse_selector(selector)?,
            name: name.to_string(),
        })
    }

    pub fn text(selector: &str) -> ParsingResult<Self> {
        Ok(Self::Text(parse_selector(selector)?))
    }

    fn apply(&self, scope: ElementRef<'_>) -> Option<String> {
        match self {
            Self::Attr { selector, name } => scope
                .select(selector)
                .find_map(|el| el.value().attr(name))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            Self::Text(selector) => scope
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty()),
            Self::OwnText => Some(element_text(scope)).filter(|text| !text.is_empty()),
        }
    }
}

/// Resolve a field by trying each strategy in chain order.
///
/// Returns the first non-empty result, `None` when the whole chain misses.
/// Chain order is significant and fixed.
pub fn resolve_field(scope: ElementRef<'_>, chain: &[FieldStrategy]) -> Option<String> {
    chain.iter().find_map(|strategy| strategy.apply(scope))
}

/// Union of matches across independent selector patterns, deduplicated, in
/// document order.
pub fn select_union<'a>(scope: ElementRef<'a>, selectors: &[Selector]) -> Vec<ElementRef<'a>> {
    let mut matched = HashSet::new();
    for selector in selectors {
        for element in scope.select(selector) {
            matched.insert(element.id());
        }
    }
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| matched.contains(&el.id()))
        .collect()
}

/// Compile selector strings, skipping (and logging) invalid entries.
///
/// Fails only when an entire chain turns out unusable, since a field with no
/// working selectors could never resolve.
pub fn compile_selectors(field: &str, patterns: &[String]) -> ParsingResult<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut errors = Vec::new();

    for pattern in patterns {
        match Selector::parse(pattern) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!("failed to compile selector '{}' for {}: {}", pattern, field, e);
                errors.push(format!("'{pattern}': {e}"));
            }
        }
    }

    if selectors.is_empty() {
        return Err(ParsingError::SelectorChainEmpty {
            field: field.to_string(),
            errors,
        });
    }

    if !errors.is_empty() {
        debug!("{} of {} selectors usable for {}", selectors.len(), patterns.len(), field);
    }

    Ok(selectors)
}

/// Compile a pattern chain into text-lookup strategies.
pub fn text_chain(field: &str, patterns: &[String]) -> ParsingResult<Vec<FieldStrategy>> {
    Ok(compile_selectors(field, patterns)?
        .into_iter()
        .map(FieldStrategy::Text)
        .collect())
}

/// Compile a pattern chain into attribute-lookup strategies.
pub fn attr_chain(field: &str, patterns: &[String], name: &str) -> ParsingResult<Vec<FieldStrategy>> {
    Ok(compile_selectors(field, patterns)?
        .into_iter()
        .map(|selector| FieldStrategy::Attr {
            selector,
            name: name.to_string(),
        })
        .collect())
}

fn parse_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
