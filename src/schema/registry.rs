//! Type tag resolution and the tag → parser table.
//!
//! The registry is the single place where a [`ComponentType`] is bound to the
//! function that builds it. Adding a component type means adding a tag to
//! [`ComponentType`], a parser in [`super::parsers`], and one line in
//! [`ComponentRegistry::standard`].

use super::factory::ParserFn;
use super::parsers;
use crate::domain::ComponentType;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeMap;

/// Resolves a wire tag to its component type.
///
/// Pure, exact, and case-sensitive: `"tableView"` resolves, `"TableView"` and
/// `"table_view"` do not.
///
/// # Examples
///
/// ```
/// use component_kit::domain::ComponentType;
/// use component_kit::schema::resolve_type;
///
/// assert_eq!(resolve_type("stack_view"), Some(ComponentType::StackView));
/// assert_eq!(resolve_type("Stack_View"), None);
/// ```
#[must_use]
pub fn resolve_type(tag: &str) -> Option<ComponentType> {
    ComponentType::from_tag(tag)
}

/// Closest known tag to an unrecognized one, for diagnostics only.
///
/// Matching is case-insensitive so `"TableView"` suggests `"tableView"`.
#[must_use]
pub fn suggest(tag: &str) -> Option<&'static str> {
    let pattern = tag.to_lowercase();
    if pattern.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    ComponentType::ALL
        .into_iter()
        .filter_map(|ty| {
            matcher
                .fuzzy_match(&ty.tag().to_lowercase(), &pattern)
                .map(|score| (score, ty.tag()))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, tag)| tag)
}

/// Maps each component type to the parser that builds it.
#[derive(Clone)]
pub struct ComponentRegistry {
    parsers: BTreeMap<ComponentType, ParserFn>,
}

impl ComponentRegistry {
    /// Registry with no parsers; every tag resolves but nothing parses.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parsers: BTreeMap::new(),
        }
    }

    /// Registry with a parser for every built-in type.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(ComponentType::Button, parsers::button::parse);
        registry.register(ComponentType::Icon, parsers::icon::parse);
        registry.register(ComponentType::Label, parsers::label::parse);
        registry.register(ComponentType::Separator, parsers::separator::parse);
        registry.register(ComponentType::BasicListItem, parsers::list_item::parse);
        registry.register(ComponentType::StackView, parsers::stack::parse);
        registry.register(ComponentType::TableView, parsers::table::parse);
        registry.register(ComponentType::CarouselView, parsers::carousel::parse);
        registry.register(ComponentType::ScrollView, parsers::scroll::parse);
        registry
    }

    /// Binds `parser` to `component_type`, returning the parser it replaced.
    pub fn register(&mut self, component_type: ComponentType, parser: ParserFn) -> Option<ParserFn> {
        self.parsers.insert(component_type, parser)
    }

    #[must_use]
    pub fn parser_for(&self, component_type: ComponentType) -> Option<ParserFn> {
        self.parsers.get(&component_type).copied()
    }

    /// Types that currently have a parser, in tag order.
    pub fn types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.parsers.keys().copied()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.types()).finish()
    }
}
