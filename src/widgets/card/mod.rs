//! Card container with named slots and a styling variant.

mod variant;
mod view;

pub use variant::CardVariant;
pub use view::{CardLayout, CardView};

use std::collections::BTreeSet;

use crate::widgets::attributes::Attributes;

pub const VARIANT_ATTR: &str = "variant";

/// Content assigned to the card's slots. Empty slots are not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSlots {
    pub header: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Default slot.
    pub body: Option<String>,
    pub footer: Option<String>,
}

impl CardSlots {
    pub fn has_header(&self) -> bool {
        self.header.is_some() || self.title.is_some() || self.subtitle.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    attributes: Attributes,
    slots: CardSlots,
    variant: CardVariant,
    classes: BTreeSet<&'static str>,
}

impl Card {
    pub const TAG_NAME: &'static str = "frmwk-card";
    pub const OBSERVED_ATTRIBUTES: &'static [&'static str] = &[VARIANT_ATTR];

    pub fn new(slots: CardSlots) -> Self {
        Self {
            attributes: Attributes::new(),
            slots,
            variant: CardVariant::Plain,
            classes: BTreeSet::from(["card"]),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn connected(&mut self) {
        self.apply_variant();
    }

    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.attributes.set(name, value),
            None => {
                self.attributes.remove(name);
            }
        }
        if Self::OBSERVED_ATTRIBUTES.contains(&name) {
            self.apply_variant();
        }
    }

    fn apply_variant(&mut self) {
        for class in CardVariant::CLASSES {
            self.classes.remove(class);
        }
        self.variant = CardVariant::parse(self.attributes.get(VARIANT_ATTR));
        if let Some(class) = self.variant.class() {
            self.classes.insert(class);
        }
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().copied()
    }

    pub fn slots(&self) -> &CardSlots {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut CardSlots {
        &mut self.slots
    }
}
