use std::collections::BTreeMap;
use std::rc::Rc;

use gpui::*;
use webchat_state::SlotName;

/// Render hook supplied by a collaborator for one slot.
pub type SlotRenderer = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement>;

/// Where the element rendered for a slot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    Hook,
    Fallback,
    Empty,
}

/// Named insertion points of the container.
///
/// Every slot is rendered on every pass; an unfilled slot without fallback renders nothing.
#[derive(Clone, Default)]
pub struct ExtensionSlots {
    overrides: BTreeMap<SlotName, SlotRenderer>,
}

impl ExtensionSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills `name`, replacing any previous hook.
    pub fn fill(
        mut self,
        name: SlotName,
        renderer: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
    ) -> Self {
        if self.overrides.insert(name, Rc::new(renderer)).is_some() {
            tracing::debug!(slot = name.as_str(), "replaced extension slot");
        }
        self
    }

    pub fn is_filled(&self, name: SlotName) -> bool {
        self.overrides.contains_key(&name)
    }

    pub fn resolve(&self, name: SlotName) -> Option<SlotRenderer> {
        self.overrides.get(&name).cloned()
    }

    /// A filled slot always wins over the fallback.
    pub fn source(&self, name: SlotName, has_fallback: bool) -> SlotSource {
        if self.is_filled(name) {
            SlotSource::Hook
        } else if has_fallback {
            SlotSource::Fallback
        } else {
            SlotSource::Empty
        }
    }

    /// Renders the hook for `name`, else `fallback`, else an empty element.
    pub fn render(
        &self,
        name: SlotName,
        fallback: Option<AnyElement>,
        window: &mut Window,
        cx: &mut App,
    ) -> AnyElement {
        match (self.source(name, fallback.is_some()), self.resolve(name), fallback) {
            (SlotSource::Hook, Some(renderer), _) => renderer(window, cx),
            (SlotSource::Fallback, _, Some(fallback)) => fallback,
            _ => Empty.into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[::core::prelude::v1::test]
    fn unfilled_slots_resolve_to_nothing() {
        let slots = ExtensionSlots::new();

        for name in [
            SlotName::BeforeContainer,
            SlotName::BelowConversation,
            SlotName::Composer,
        ] {
            assert!(!slots.is_filled(name));
            assert!(slots.resolve(name).is_none());
            assert_eq!(slots.source(name, false), SlotSource::Empty);
        }
    }

    #[::core::prelude::v1::test]
    fn unfilled_composer_uses_the_builtin_fallback() {
        let slots = ExtensionSlots::new()
            .fill(SlotName::BelowConversation, |_, _| Empty.into_any_element());

        assert_eq!(slots.source(SlotName::Composer, true), SlotSource::Fallback);
    }

    #[::core::prelude::v1::test]
    fn hook_wins_over_fallback() {
        let slots = ExtensionSlots::new()
            .fill(SlotName::Composer, |_, _| div().child("custom composer").into_any_element());

        assert_eq!(slots.source(SlotName::Composer, true), SlotSource::Hook);
        assert_eq!(slots.source(SlotName::Composer, false), SlotSource::Hook);
    }

    #[::core::prelude::v1::test]
    fn filling_one_slot_leaves_the_others_empty() {
        let slots = ExtensionSlots::new()
            .fill(SlotName::BelowConversation, |_, _| {
                div().child("custom").into_any_element()
            })
            .fill(SlotName::BelowConversation, |_, _| {
                div().child("replacement").into_any_element()
            });

        assert!(slots.is_filled(SlotName::BelowConversation));
        assert!(!slots.is_filled(SlotName::BeforeContainer));
        assert!(!slots.is_filled(SlotName::Composer));
    }
}
