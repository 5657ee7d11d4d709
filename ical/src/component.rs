// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A `BEGIN:X` ... `END:X` block with its properties and nested blocks.

use crate::content_line::ContentLine;

/// A component such as `VCALENDAR`, `VEVENT` or `VALARM`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    /// Component name as written after `BEGIN:`
    pub name: String,
    /// Properties in original order
    pub properties: Vec<ContentLine>,
    /// Nested child components in original order
    pub children: Vec<Component>,
}

impl Component {
    /// Create an empty component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether the name matches, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The first property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&ContentLine> {
        self.properties.iter().find(|p| p.is(name))
    }

    /// All properties with the given name.
    pub fn properties_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ContentLine> + 'a {
        self.properties.iter().filter(move |p| p.is(name))
    }

    /// All direct children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> + 'a {
        self.children.iter().filter(move |c| c.is(name))
    }

    /// Append a property.
    pub fn push_property(&mut self, property: ContentLine) {
        self.properties.push(property);
    }

    /// Append a child component.
    pub fn push_child(&mut self, child: Component) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_by_name_case_insensitively() {
        let mut event = Component::new("VEVENT");
        event.push_property(ContentLine::new("SUMMARY", "Meeting"));
        event.push_property(ContentLine::new("attendee", "mailto:a@x"));
        event.push_property(ContentLine::new("ATTENDEE", "mailto:b@y"));
        event.push_child(Component::new("VALARM"));

        let mut calendar = Component::new("VCALENDAR");
        calendar.push_child(event);
        calendar.push_child(Component::new("vevent"));

        assert!(calendar.is("vcalendar"));
        assert_eq!(calendar.children_named("VEVENT").count(), 2);

        let event = calendar.children_named("vevent").next().unwrap();
        assert_eq!(event.property("summary").unwrap().value(), "Meeting");
        assert_eq!(event.properties_named("Attendee").count(), 2);
        assert!(event.property("DTSTART").is_none());
        assert_eq!(event.children_named("VALARM").count(), 1);
    }
}
